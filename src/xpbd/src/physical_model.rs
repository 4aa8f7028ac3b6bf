use crate::constraint::constraint_template::SpringTemplate;
use crate::constraint::Anchor;
use crate::error::{check_unit, PhysicsError};
use crate::particle::ParticleTemplate;
use crate::V2;

/// Particles and springs waiting to be registered in a `PWorld`.
/// Particle anchors index `particles`.
#[derive(Clone, Debug, Default)]
pub struct PhysicalModel {
	pub particles: Vec<ParticleTemplate>,
	pub springs: Vec<SpringTemplate>,
}

impl PhysicalModel {
	pub fn add_particle(&mut self, particle: ParticleTemplate) -> usize {
		self.particles.push(particle);
		self.particles.len() - 1
	}

	pub fn anchor_pos(&self, anchor: Anchor) -> Result<V2, PhysicsError> {
		match anchor {
			Anchor::Fixed(pos) => Ok(pos),
			Anchor::Particle(index) => self
				.particles
				.get(index)
				.map(|p| p.pos)
				.ok_or(PhysicsError::ParticleOutOfBounds {
					index,
					count: self.particles.len(),
				}),
		}
	}

	/// Spring whose rest length is the current distance between the ends.
	pub fn add_spring(
		&mut self,
		a: Anchor,
		b: Anchor,
		stiffness: f32,
		damping: f32,
	) -> Result<usize, PhysicsError> {
		let l0 = (self.anchor_pos(b)? - self.anchor_pos(a)?).magnitude();
		self.add_spring_with_l0(a, b, l0, stiffness, damping)
	}

	pub fn add_spring_with_l0(
		&mut self,
		a: Anchor,
		b: Anchor,
		l0: f32,
		stiffness: f32,
		damping: f32,
	) -> Result<usize, PhysicsError> {
		self.anchor_pos(a)?;
		self.anchor_pos(b)?;
		check_unit(stiffness, PhysicsError::InvalidStiffness)?;
		check_unit(damping, PhysicsError::InvalidDamping)?;
		self.springs.push(SpringTemplate {
			ends: [a, b],
			l0,
			stiffness,
			damping,
		});
		Ok(self.springs.len() - 1)
	}

	/// Particles at `points` joined by springs in order.
	pub fn new_line(
		points: &[V2],
		stiffness: f32,
		damping: f32,
	) -> Result<Self, PhysicsError> {
		let mut model = Self::default();
		for (idx, point) in points.iter().enumerate() {
			model.add_particle(ParticleTemplate::new(*point));
			if idx > 0 {
				model.add_spring(
					Anchor::Particle(idx - 1),
					Anchor::Particle(idx),
					stiffness,
					damping,
				)?;
			}
		}
		Ok(model)
	}
}
