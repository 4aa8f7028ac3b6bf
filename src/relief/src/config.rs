use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use protocol::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
	pub steps: usize,
	/// Curve parameter at which the curve passes through the midpoint.
	pub tightness: f32,
}

impl Default for CurveConfig {
	fn default() -> Self {
		Self {
			steps: 30,
			tightness: 0.5,
		}
	}
}

impl CurveConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.steps < 2 {
			return Err(ConfigError::TooFewSteps(self.steps));
		}
		if !(self.tightness > 0.0 && self.tightness < 1.0) {
			return Err(ConfigError::InvalidTightness(self.tightness));
		}
		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
	pub stiffness: f32,
	pub damping: f32,
}

impl Default for SpringConfig {
	fn default() -> Self {
		Self {
			stiffness: 0.5,
			damping: 0.05,
		}
	}
}

impl SpringConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(0.0..=1.0).contains(&self.stiffness) {
			return Err(ConfigError::InvalidStiffness(self.stiffness));
		}
		if !(0.0..=1.0).contains(&self.damping) {
			return Err(ConfigError::InvalidDamping(self.damping));
		}
		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
	pub iteration: usize,
	/// Largest integration displacement per step, in canvas units.
	pub max_dp: f32,
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			iteration: 2,
			max_dp: 1080.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
	pub fps: u32,
	/// seconds
	pub duration: f32,
	/// step by `1 / fps` instead of measured wall time
	pub fixed: bool,
}

impl Default for FrameConfig {
	fn default() -> Self {
		Self {
			fps: 60,
			duration: 7.0,
			fixed: true,
		}
	}
}

impl FrameConfig {
	pub fn frame_time(&self) -> f32 {
		1.0 / self.fps as f32
	}

	pub fn frame_count(&self) -> usize {
		(self.duration * self.fps as f32).round() as usize
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
	pub width: u32,
	pub height: u32,
	pub curve: CurveConfig,
	pub spring: SpringConfig,
	pub physics: PhysicsConfig,
	pub frame: FrameConfig,
	/// One chain per color, in this order.
	pub palette: Vec<Rgba>,
	pub background: Rgba,
	/// Fraction of the canvas the random midpoint is drawn from, per axis.
	pub midpoint_band: [f32; 2],
	pub seed: Option<u64>,
	/// Draw the physics wireframe instead of the curves.
	pub debug: bool,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			width: 1080,
			height: 1080,
			curve: CurveConfig::default(),
			spring: SpringConfig::default(),
			physics: PhysicsConfig::default(),
			frame: FrameConfig::default(),
			palette: vec![
				Rgba::rgb(0xf1, 0x34, 0x01),
				Rgba::rgb(0x07, 0x69, 0xce),
				Rgba::rgb(0xf1, 0xd9, 0x3c),
				Rgba::rgb(0x11, 0x80, 0x4b),
			],
			background: Rgba::WHITE,
			midpoint_band: [0.4, 0.6],
			seed: None,
			debug: false,
		}
	}
}

impl SceneConfig {
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn with_size(mut self, width: u32, height: u32) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_palette(mut self, palette: Vec<Rgba>) -> Self {
		self.palette = palette;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.width == 0 || self.height == 0 {
			return Err(ConfigError::InvalidCanvas(self.width, self.height));
		}
		self.curve.validate()?;
		self.spring.validate()?;
		if self.palette.is_empty() {
			return Err(ConfigError::EmptyPalette);
		}
		let [lo, hi] = self.midpoint_band;
		if !(0.0 <= lo && lo <= hi && hi <= 1.0) {
			return Err(ConfigError::InvalidBand(lo, hi));
		}
		if self.frame.fps == 0 {
			return Err(ConfigError::InvalidFps);
		}
		if !(self.frame.duration > 0.0 && self.frame.duration.is_finite()) {
			return Err(ConfigError::InvalidDuration(self.frame.duration));
		}
		if self.physics.iteration == 0 {
			return Err(ConfigError::NoIterations);
		}
		if !(self.physics.max_dp > 0.0) {
			return Err(ConfigError::InvalidMaxDp(self.physics.max_dp));
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_is_valid() {
		let config = SceneConfig::default();
		assert_eq!(config.validate(), Ok(()));
		assert_eq!(config.frame.frame_count(), 420);
	}

	#[test]
	fn test_rejects_bad_values() {
		let mut config = SceneConfig::default();
		config.curve.steps = 0;
		assert_eq!(config.validate(), Err(ConfigError::TooFewSteps(0)));

		let mut config = SceneConfig::default();
		config.spring.stiffness = 1.5;
		assert_eq!(config.validate(), Err(ConfigError::InvalidStiffness(1.5)));

		let mut config = SceneConfig::default();
		config.spring.damping = -0.1;
		assert_eq!(config.validate(), Err(ConfigError::InvalidDamping(-0.1)));

		let config = SceneConfig::default().with_palette(vec![]);
		assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));

		let mut config = SceneConfig::default();
		config.midpoint_band = [0.7, 0.3];
		assert_eq!(config.validate(), Err(ConfigError::InvalidBand(0.7, 0.3)));

		let mut config = SceneConfig::default();
		config.curve.tightness = 1.0;
		assert_eq!(config.validate(), Err(ConfigError::InvalidTightness(1.0)));
	}

	#[test]
	fn test_rejects_bad_canvas_and_timing() {
		let config = SceneConfig::default().with_size(0, 1080);
		assert_eq!(config.validate(), Err(ConfigError::InvalidCanvas(0, 1080)));

		let mut config = SceneConfig::default();
		config.frame.fps = 0;
		assert_eq!(config.validate(), Err(ConfigError::InvalidFps));

		for duration in [0.0, -1.0, f32::INFINITY] {
			let mut config = SceneConfig::default();
			config.frame.duration = duration;
			assert_eq!(config.validate(), Err(ConfigError::InvalidDuration(duration)));
		}

		let mut config = SceneConfig::default();
		config.physics.iteration = 0;
		assert_eq!(config.validate(), Err(ConfigError::NoIterations));

		let mut config = SceneConfig::default();
		config.physics.max_dp = 0.0;
		assert_eq!(config.validate(), Err(ConfigError::InvalidMaxDp(0.0)));
	}

	#[test]
	fn test_rejects_nan_coefficients() {
		let mut config = SceneConfig::default();
		config.spring.stiffness = f32::NAN;
		assert!(matches!(
			config.validate(),
			Err(ConfigError::InvalidStiffness(s)) if s.is_nan()
		));

		let mut config = SceneConfig::default();
		config.physics.max_dp = f32::NAN;
		assert!(matches!(
			config.validate(),
			Err(ConfigError::InvalidMaxDp(d)) if d.is_nan()
		));
	}

	#[test]
	fn test_partial_json() {
		let config: SceneConfig = serde_json::from_str(
			r##"{"seed": 7, "spring": {"stiffness": 0.8}, "palette": ["#000", "#fff"]}"##,
		)
		.unwrap();
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.spring.stiffness, 0.8);
		assert_eq!(config.spring.damping, 0.05);
		assert_eq!(config.palette, vec![Rgba::BLACK, Rgba::WHITE]);
		assert_eq!(config.width, 1080);
	}
}
