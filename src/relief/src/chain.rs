use crate::bezier::SampledPath;
use crate::config::SpringConfig;
use crate::control::ControlPoints;
use crate::error::CurveError;
use protocol::color::Rgba;
use protocol::V2;
use xpbd::constraint::Anchor;
use xpbd::particle::{CollisionPolicy, ParticleTemplate};
use xpbd::physical_model::PhysicalModel;
use xpbd::pworld::{ModelHandle, PWorld};

/// One curve's particles in the world, its fill and its draw depth.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
	handle: ModelHandle,
	color: Rgba,
	dist: f32,
	control: ControlPoints,
}

impl Chain {
	pub fn handle(&self) -> &ModelHandle {
		&self.handle
	}

	pub fn color(&self) -> Rgba {
		self.color
	}

	/// Distance of the random midpoint from the origin, fixed at creation.
	pub fn dist(&self) -> f32 {
		self.dist
	}

	pub fn control(&self) -> &ControlPoints {
		&self.control
	}

	pub fn len(&self) -> usize {
		self.handle.particles().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn positions(&self, world: &PWorld) -> Vec<V2> {
		world.positions(&self.handle)
	}
}

/// Turns sampled curves into spring chains.
///
/// For `n` samples a chain gets `n` particles, `n - 1` links, two end
/// anchors back to the start and end control points, and a rigid
/// zero-length pull from the origin to the last particle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChainBuilder {
	spring: SpringConfig,
}

impl ChainBuilder {
	pub fn new(spring: SpringConfig) -> Self {
		Self { spring }
	}

	pub fn build_model(
		&self,
		path: &SampledPath,
		control: &ControlPoints,
	) -> Result<PhysicalModel, CurveError> {
		if path.len() < 2 {
			return Err(CurveError::PathTooShort(path.len()));
		}
		self.spring.validate()?;
		let SpringConfig { stiffness, damping } = self.spring;
		let mut model = PhysicalModel::default();
		for (idx, pos) in path.points().iter().enumerate() {
			model.add_particle(
				ParticleTemplate::new(*pos).with_collision(CollisionPolicy::Disabled),
			);
			if idx > 0 {
				model.add_spring(
					Anchor::Particle(idx - 1),
					Anchor::Particle(idx),
					stiffness,
					damping,
				)?;
			}
		}
		let last = path.len() - 1;
		model.add_spring(
			Anchor::Fixed(control.start),
			Anchor::Particle(0),
			stiffness,
			damping,
		)?;
		model.add_spring(
			Anchor::Fixed(control.end),
			Anchor::Particle(last),
			stiffness,
			damping,
		)?;
		model.add_spring_with_l0(
			Anchor::Fixed(V2::zeros()),
			Anchor::Particle(last),
			0.0,
			1.0,
			1.0,
		)?;
		Ok(model)
	}

	pub fn build(
		&self,
		world: &mut PWorld,
		path: SampledPath,
		control: ControlPoints,
		color: Rgba,
	) -> Result<Chain, CurveError> {
		let model = self.build_model(&path, &control)?;
		let handle = world.add_model(model)?;
		let chain = Chain {
			handle,
			color,
			dist: control.dist(),
			control,
		};
		log::debug!(
			"built {} chain: {} particles, dist {:.1}",
			color,
			chain.len(),
			chain.dist
		);
		Ok(chain)
	}
}
