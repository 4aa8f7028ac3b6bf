use crate::constraint::{Anchor, Constraint, MIN_LENGTH};
use crate::particle::Particle;
use protocol::pr_model::PrConstraint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpringType {
	Normal,
	Repulsive, // collision
}

/// Damped spring between two anchors.
///
/// Each relaxation pass moves the ends by `stiffness * (len - l0)` along
/// the spring axis, shared by inverse mass. A fixed anchor has inverse
/// mass 0, so the particle end takes the whole correction. `damping`
/// removes that fraction of the relative velocity along the axis once per
/// world step.
#[derive(Clone, Debug)]
pub struct SpringConstraint {
	ends: [Anchor; 2],
	l0: f32,
	stiffness: f32,
	damping: f32,
	ty: SpringType,
}

impl SpringConstraint {
	/// Rest length is the current distance between the ends.
	pub fn new(a: Anchor, b: Anchor, particles: &[Particle]) -> Self {
		let l0 = (b.pos(particles) - a.pos(particles)).magnitude();
		Self::new_with_l0(a, b, l0)
	}

	pub fn new_with_l0(a: Anchor, b: Anchor, l0: f32) -> Self {
		Self {
			ends: [a, b],
			l0,
			stiffness: 1.0,
			damping: 0.0,
			ty: SpringType::Normal,
		}
	}

	pub fn with_stiffness(mut self, stiffness: f32) -> Self {
		self.stiffness = stiffness;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_ty(mut self, ty: SpringType) -> Self {
		self.ty = ty;
		self
	}

	pub fn repulsive_only(self) -> Self {
		self.with_ty(SpringType::Repulsive)
	}

	pub fn build(self) -> Box<dyn Constraint> {
		Box::new(self)
	}

	pub fn ends(&self) -> [Anchor; 2] {
		self.ends
	}

	pub fn get_l0(&self) -> f32 {
		self.l0
	}

	pub fn get_stiffness(&self) -> f32 {
		self.stiffness
	}

	pub fn get_damping(&self) -> f32 {
		self.damping
	}

	pub fn length(&self, particles: &[Particle]) -> f32 {
		(self.ends[1].pos(particles) - self.ends[0].pos(particles)).magnitude()
	}
}

impl Constraint for SpringConstraint {
	fn render(&self, id: usize) -> PrConstraint {
		PrConstraint {
			id,
			ends: [self.ends[0].render(), self.ends[1].render()],
		}
	}

	fn step(&mut self, particles: &mut [Particle], _dt: f32) {
		let [a, b] = self.ends;
		let imass1 = a.imass(particles);
		let imass2 = b.imass(particles);
		let imass = imass1 + imass2;
		if imass == 0.0 {
			return;
		}
		let dp = b.pos(particles) - a.pos(particles);
		let l = dp.magnitude();
		if !l.is_finite() {
			log::warn!("bad spring length {}", l);
			return;
		}
		let dl = l - self.l0;
		if self.ty == SpringType::Repulsive && dl >= 0. {
			return;
		}
		if l < MIN_LENGTH {
			// coincident ends: nothing to pull along, and a zero rest
			// length is already met
			return;
		}
		let correct = dp * (dl * self.stiffness / (l * imass));
		a.add_pos(particles, correct * imass1);
		b.add_pos(particles, -correct * imass2);
	}

	fn damp(&self, particles: &mut [Particle]) {
		if self.damping == 0.0 {
			return;
		}
		let [a, b] = self.ends;
		let imass1 = a.imass(particles);
		let imass2 = b.imass(particles);
		let imass = imass1 + imass2;
		if imass == 0.0 {
			return;
		}
		let rel = b.vel(particles) - a.vel(particles);
		let dp = b.pos(particles) - a.pos(particles);
		let l = dp.magnitude();
		let axial = if l > MIN_LENGTH {
			let normal = dp / l;
			normal * normal.dot(&rel)
		} else {
			rel
		};
		let dv = axial * self.damping;
		a.add_vel(particles, dv * (imass1 / imass));
		b.add_vel(particles, -dv * (imass2 / imass));
	}
}
