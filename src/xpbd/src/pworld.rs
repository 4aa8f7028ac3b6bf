use std::ops::Range;

use rayon::prelude::*;

use crate::constraint::spring::SpringConstraint;
use crate::constraint::CRef;
use crate::error::PhysicsError;
use crate::particle::Particle;
use crate::particle_group::ParticleGroup;
use crate::physical_model::PhysicalModel;
use crate::V2;
use protocol::pr_model::{PrModel, PrParticle};

/// Where a registered model lives inside the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelHandle {
	particle_start: usize,
	particle_count: usize,
	constraint_start: usize,
	constraint_count: usize,
}

impl ModelHandle {
	pub fn particles(&self) -> Range<usize> {
		self.particle_start..self.particle_start + self.particle_count
	}

	pub fn constraints(&self) -> Range<usize> {
		self.constraint_start..self.constraint_start + self.constraint_count
	}
}

#[derive(Clone)]
pub struct PWorld {
	pub iteration: usize,
	pub max_dp: f32,
	pub gravity: V2,
	pub csize: f32,

	particles: Vec<Particle>,
	constraints: Vec<CRef>,
	tmp_constraints: Vec<CRef>,
}

impl Default for PWorld {
	fn default() -> Self {
		Self {
			iteration: 2,
			max_dp: 1080.0,
			gravity: V2::zeros(),
			csize: 20.0,

			particles: Vec::new(),
			constraints: Vec::new(),
			tmp_constraints: Vec::new(),
		}
	}
}

impl PWorld {
	pub fn with_iteration(mut self, iteration: usize) -> Self {
		self.iteration = iteration.max(1);
		self
	}

	pub fn with_max_dp(mut self, max_dp: f32) -> Self {
		self.max_dp = max_dp;
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn add_model(
		&mut self,
		physical_model: PhysicalModel,
	) -> Result<ModelHandle, PhysicsError> {
		let count = physical_model.particles.len();
		for spring in physical_model.springs.iter() {
			for end in spring.ends {
				match end.particle_id() {
					Some(index) if index >= count => {
						return Err(PhysicsError::ParticleOutOfBounds { index, count })
					}
					_ => {}
				}
			}
		}
		log::info!(
			"add model: {} particles, {} springs",
			count,
			physical_model.springs.len()
		);
		let handle = ModelHandle {
			particle_start: self.particles.len(),
			particle_count: count,
			constraint_start: self.constraints.len(),
			constraint_count: physical_model.springs.len(),
		};
		let base = handle.particle_start;
		for (idx, p) in physical_model.particles.iter().enumerate() {
			self.particles.push(Particle::from_template(base + idx, p));
		}
		for spring in physical_model.springs.into_iter() {
			let [a, b] = spring.ends;
			let con = SpringConstraint::new_with_l0(a.offset(base), b.offset(base), spring.l0)
				.with_stiffness(spring.stiffness)
				.with_damping(spring.damping)
				.build();
			self.constraints.push(con);
		}
		Ok(handle)
	}

	fn solve_constraints(&mut self, dt: f32) {
		for constraint in self
			.constraints
			.iter_mut()
			.chain(self.tmp_constraints.iter_mut())
		{
			constraint.step(&mut self.particles, dt);
		}
	}

	/// Advance every particle by `dt`. Non-positive or non-finite `dt`
	/// leaves the world untouched.
	pub fn step(&mut self, dt: f32) {
		if !(dt > 0f32 && dt.is_finite()) {
			return;
		}
		let (gravity, max_dp) = (self.gravity, self.max_dp);
		self.particles
			.par_iter_mut()
			.for_each(|p| p.update(dt, gravity, max_dp));
		self.tmp_constraints =
			ParticleGroup::build(self.csize, &self.particles)
				.collision_constraints(&self.particles);
		for _ in 0..self.iteration {
			self.solve_constraints(dt);
		}
		self.particles.par_iter_mut().for_each(|p| p.settle(dt));
		for constraint in self.constraints.iter() {
			constraint.damp(&mut self.particles);
		}
	}

	/// Drop every particle and constraint; existing handles become empty.
	pub fn clear(&mut self) {
		log::info!(
			"clear world: {} particles, {} constraints",
			self.particles.len(),
			self.constraints.len()
		);
		self.particles.clear();
		self.constraints.clear();
		self.tmp_constraints.clear();
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_of(&self, handle: &ModelHandle) -> &[Particle] {
		self.particles.get(handle.particles()).unwrap_or(&[])
	}

	pub fn positions(&self, handle: &ModelHandle) -> Vec<V2> {
		self.particles_of(handle).iter().map(|p| p.get_pos()).collect()
	}

	pub fn particle_count(&self) -> usize {
		self.particles.len()
	}

	pub fn constraint_count(&self) -> usize {
		self.constraints.len()
	}

	/// Contacts found during the last step.
	pub fn contact_count(&self) -> usize {
		self.tmp_constraints.len()
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.particles
			.iter()
			.map(|p| (p.get_id(), PrParticle { pos: p.get_pos() }))
			.collect();
		let constraints = self
			.constraints
			.iter()
			.enumerate()
			.map(|(id, c)| c.render(id))
			.collect();
		PrModel {
			particles,
			constraints,
		}
	}
}
