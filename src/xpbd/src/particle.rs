use crate::V2;

/// Whether a particle takes part in contact resolution.
///
/// A pair only collides when both sides are `Enabled`, so one `Disabled`
/// group keeps every particle in it free of contacts regardless of what it
/// overlaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
	#[default]
	Disabled,
	Enabled,
}

impl CollisionPolicy {
	pub fn collides_with(self, other: Self) -> bool {
		self == Self::Enabled && other == Self::Enabled
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTemplate {
	pub imass: f32,
	pub pos: V2,
	pub radius: f32,
	pub collision: CollisionPolicy,
}

impl ParticleTemplate {
	pub fn new(pos: V2) -> Self {
		Self {
			imass: 1.0,
			pos,
			radius: 0.0,
			collision: CollisionPolicy::Disabled,
		}
	}

	pub fn with_imass(mut self, imass: f32) -> Self {
		self.imass = imass;
		self
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
		self.collision = collision;
		self
	}
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub id: usize,
	pub imass: f32,
	pub pos: V2,
	// position at the start of the current step
	pub ppos: V2,
	pub vel: V2,
	pub accel: V2,
	pub radius: f32,
	pub collision: CollisionPolicy,
}

impl Particle {
	pub fn from_template(id: usize, template: &ParticleTemplate) -> Self {
		Self {
			id,
			imass: template.imass, // 0 is immovable
			pos: template.pos,
			ppos: template.pos,
			vel: V2::zeros(),
			accel: V2::zeros(),
			radius: template.radius,
			collision: template.collision,
		}
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_vel(&self) -> V2 {
		self.vel
	}

	pub fn get_imass(&self) -> f32 {
		self.imass
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp
	}

	pub fn add_vel(&mut self, dv: V2) {
		self.vel += dv
	}

	pub fn reset_pos(&mut self, p: V2) {
		self.pos = p;
		self.ppos = p;
		self.vel = V2::zeros();
	}

	/// Semi-implicit Euler: velocity first, then position from the new
	/// velocity. The displacement is clamped to `max_dp`.
	pub fn update(&mut self, t: f32, gravity: V2, max_dp: f32) {
		self.ppos = self.pos;
		if self.imass == 0f32 {
			return;
		}
		self.vel += (self.accel + gravity) * t;
		let mut dp = self.vel * t;
		if dp.magnitude() > max_dp {
			dp = dp.normalize() * max_dp;
		}
		self.pos += dp;
	}

	/// Re-derive velocity from the displacement of the whole step,
	/// constraint corrections included.
	pub fn settle(&mut self, t: f32) {
		if self.imass == 0f32 {
			self.vel = V2::zeros();
			return;
		}
		self.vel = (self.pos - self.ppos) / t;
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_update_semi_implicit() {
		let mut p = Particle::from_template(0, &ParticleTemplate::new(V2::zeros()));
		p.update(0.5, V2::new(0., 2.), f32::INFINITY);
		// v = 1 after the kick, x moves by v * t
		assert_eq!(p.get_vel(), V2::new(0., 1.));
		assert_eq!(p.get_pos(), V2::new(0., 0.5));
	}

	#[test]
	fn test_update_clamps_displacement() {
		let mut p = Particle::from_template(0, &ParticleTemplate::new(V2::zeros()));
		p.vel = V2::new(1000., 0.);
		p.update(1.0, V2::zeros(), 10.0);
		assert!((p.get_pos() - V2::new(10., 0.)).magnitude() < 1e-5);
		p.settle(1.0);
		assert!((p.get_vel() - V2::new(10., 0.)).magnitude() < 1e-5);
	}

	#[test]
	fn test_immovable() {
		let template = ParticleTemplate::new(V2::new(3., 4.)).with_imass(0.0);
		let mut p = Particle::from_template(0, &template);
		p.vel = V2::new(5., 5.);
		p.update(1.0, V2::new(0., 9.8), f32::INFINITY);
		p.settle(1.0);
		assert_eq!(p.get_pos(), V2::new(3., 4.));
		assert_eq!(p.get_vel(), V2::zeros());
	}

	#[test]
	fn test_collision_policy() {
		use CollisionPolicy::*;
		assert!(Enabled.collides_with(Enabled));
		assert!(!Enabled.collides_with(Disabled));
		assert!(!Disabled.collides_with(Disabled));
	}
}
