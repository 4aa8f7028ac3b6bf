//! Frame driver: owns the world, the chains and their draw order for one
//! run of the relief animation.

use protocol::pr_model::PrModel;
use relief::chain::Chain;
use relief::config::SceneConfig;
use relief::control::{MidpointPolicy, RandomBand};
use relief::error::{ConfigError, CurveError};
use relief::populate::populate;
use render::curve_renderer::CurveRenderer;
use render::debug_renderer::DebugRenderer;
use render::surface::Surface;
use xpbd::pworld::PWorld;

pub struct Scene {
	config: SceneConfig,
	world: PWorld,
	chains: Vec<Chain>,
	renderer: CurveRenderer,
	debug_renderer: DebugRenderer,
}

impl Scene {
	pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let world = PWorld::default()
			.with_iteration(config.physics.iteration)
			.with_max_dp(config.physics.max_dp);
		Ok(Self {
			config,
			world,
			chains: Vec::new(),
			renderer: CurveRenderer::new(&[]),
			debug_renderer: DebugRenderer::default(),
		})
	}

	/// Build one chain per palette color with random midpoints.
	pub fn begin(&mut self) -> Result<(), CurveError> {
		let mut policy = RandomBand::new(self.config.midpoint_band, self.config.seed);
		self.begin_with(&mut policy)
	}

	pub fn begin_with(&mut self, policy: &mut dyn MidpointPolicy) -> Result<(), CurveError> {
		if !self.chains.is_empty() {
			self.end();
		}
		self.chains = populate(&mut self.world, &self.config, policy)?;
		self.renderer = CurveRenderer::new(&self.chains);
		log::info!(
			"scene begin: {} chains, {} particles, {} constraints",
			self.chains.len(),
			self.world.particle_count(),
			self.world.constraint_count()
		);
		Ok(())
	}

	pub fn step(&mut self, dt: f32) {
		self.world.step(dt);
	}

	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.clear(self.config.background);
		if self.config.debug {
			self.debug_renderer.draw(&self.pr_model(), surface);
		} else {
			self.renderer.draw(&self.chains, &self.world, surface);
		}
	}

	/// One frame: advance by `dt`, then paint the new state.
	pub fn frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) {
		self.step(dt);
		self.draw(surface);
	}

	pub fn end(&mut self) {
		log::info!("scene end: {} chains", self.chains.len());
		self.world.clear();
		self.chains.clear();
		self.renderer = CurveRenderer::new(&[]);
	}

	pub fn config(&self) -> &SceneConfig {
		&self.config
	}

	pub fn world(&self) -> &PWorld {
		&self.world
	}

	pub fn chains(&self) -> &[Chain] {
		&self.chains
	}

	pub fn renderer(&self) -> &CurveRenderer {
		&self.renderer
	}

	pub fn pr_model(&self) -> PrModel {
		self.world.pr_model()
	}

	pub fn frame_count(&self) -> usize {
		self.config.frame.frame_count()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use protocol::color::Rgba;
	use protocol::V2;
	use relief::control::FixedMidpoints;
	use render::surface::{DrawCommand, Recorder};

	fn mids() -> FixedMidpoints {
		FixedMidpoints::new(vec![
			V2::new(500., 500.),
			V2::new(600., 480.),
			V2::new(450., 470.),
			V2::new(520., 610.),
		])
	}

	#[test]
	fn test_rejects_invalid_config() {
		let config = SceneConfig::default().with_palette(vec![]);
		assert!(matches!(Scene::new(config), Err(ConfigError::EmptyPalette)));
	}

	#[test]
	fn test_lifecycle() {
		let mut scene = Scene::new(SceneConfig::default()).unwrap();
		scene.begin_with(&mut mids()).unwrap();
		assert_eq!(scene.chains().len(), 4);
		assert_eq!(scene.world().particle_count(), 120);
		scene.step(1.0 / 60.0);
		scene.end();
		assert!(scene.chains().is_empty());
		assert_eq!(scene.world().particle_count(), 0);
		assert!(scene.renderer().order().is_empty());
	}

	#[test]
	fn test_begin_twice_replaces_chains() {
		let mut scene = Scene::new(SceneConfig::default().with_seed(3)).unwrap();
		scene.begin().unwrap();
		scene.begin().unwrap();
		assert_eq!(scene.chains().len(), 4);
		assert_eq!(scene.world().particle_count(), 120);
	}

	#[test]
	fn test_draw_clears_then_fills() {
		let mut scene = Scene::new(SceneConfig::default()).unwrap();
		scene.begin_with(&mut mids()).unwrap();
		let mut rec = Recorder::default();
		scene.draw(&mut rec);
		assert_eq!(rec.commands[0], DrawCommand::Clear(Rgba::WHITE));
		assert_eq!(rec.fills().len(), 4);
	}

	#[test]
	fn test_frame_paints_stepped_state() {
		let mut scene = Scene::new(SceneConfig::default()).unwrap();
		scene.begin_with(&mut mids()).unwrap();
		let mut rec = Recorder::default();
		scene.frame(1.0 / 60.0, &mut rec);
		let ends: Vec<V2> = rec
			.commands
			.windows(2)
			.filter_map(|w| match w {
				[DrawCommand::QuadTo(_, to), DrawCommand::LineTo(_)] => Some(*to),
				_ => None,
			})
			.collect();
		assert_eq!(ends.len(), 4);
		// the origin pull has already drawn every last mass in
		for end in ends {
			assert!(end.magnitude() < 1e-3, "{:?}", end);
		}
	}

	#[test]
	fn test_debug_draws_wireframe() {
		let mut config = SceneConfig::default();
		config.debug = true;
		let mut scene = Scene::new(config).unwrap();
		scene.begin_with(&mut mids()).unwrap();
		let mut rec = Recorder::default();
		scene.draw(&mut rec);
		assert!(rec.commands.contains(&DrawCommand::Stroke));
		// a single fill for the particle dots
		assert_eq!(rec.fills().len(), 1);
	}
}
