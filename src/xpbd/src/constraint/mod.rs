pub mod constraint_template;
pub mod spring;

use dyn_clone::DynClone;

use crate::particle::Particle;
use crate::V2;
use protocol::pr_model::{PrAnchor, PrConstraint};

// below this separation a constraint has no usable axis
pub const MIN_LENGTH: f32 = 1e-6;

pub trait Constraint: DynClone + Send {
	/// One relaxation pass: move the ends towards the rest condition.
	fn step(&mut self, particles: &mut [Particle], dt: f32);

	/// Runs once per world step after velocities are settled.
	fn damp(&self, _particles: &mut [Particle]) {}

	fn render(&self, id: usize) -> PrConstraint;
}

dyn_clone::clone_trait_object!(Constraint);

pub type CRef = Box<dyn Constraint>;

/// One end of a constraint: a world point or a particle id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
	Fixed(V2),
	Particle(usize),
}

impl Anchor {
	pub fn pos(self, particles: &[Particle]) -> V2 {
		match self {
			Anchor::Fixed(pos) => pos,
			Anchor::Particle(id) => particles[id].get_pos(),
		}
	}

	pub fn vel(self, particles: &[Particle]) -> V2 {
		match self {
			Anchor::Fixed(_) => V2::zeros(),
			Anchor::Particle(id) => particles[id].get_vel(),
		}
	}

	pub fn imass(self, particles: &[Particle]) -> f32 {
		match self {
			Anchor::Fixed(_) => 0.0,
			Anchor::Particle(id) => particles[id].get_imass(),
		}
	}

	pub fn add_pos(self, particles: &mut [Particle], dp: V2) {
		if let Anchor::Particle(id) = self {
			particles[id].add_pos(dp);
		}
	}

	pub fn add_vel(self, particles: &mut [Particle], dv: V2) {
		if let Anchor::Particle(id) = self {
			particles[id].add_vel(dv);
		}
	}

	pub fn particle_id(self) -> Option<usize> {
		match self {
			Anchor::Fixed(_) => None,
			Anchor::Particle(id) => Some(id),
		}
	}

	pub(crate) fn offset(self, base: usize) -> Self {
		match self {
			Anchor::Fixed(pos) => Anchor::Fixed(pos),
			Anchor::Particle(id) => Anchor::Particle(id + base),
		}
	}

	pub fn render(self) -> PrAnchor {
		match self {
			Anchor::Fixed(pos) => PrAnchor::Fixed(pos),
			Anchor::Particle(id) => PrAnchor::Particle(id),
		}
	}
}
