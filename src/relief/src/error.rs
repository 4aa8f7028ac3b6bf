use thiserror::Error;

use xpbd::error::PhysicsError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
	#[error("curve needs at least 2 sample steps, got {0}")]
	TooFewSteps(usize),
	#[error("tightness must lie strictly between 0 and 1, got {0}")]
	InvalidTightness(f32),
	#[error("spring stiffness must be in [0, 1], got {0}")]
	InvalidStiffness(f32),
	#[error("spring damping must be in [0, 1], got {0}")]
	InvalidDamping(f32),
	#[error("canvas must be non-empty, got {0}x{1}")]
	InvalidCanvas(u32, u32),
	#[error("palette is empty")]
	EmptyPalette,
	#[error("midpoint band must satisfy 0 <= lo <= hi <= 1, got [{0}, {1}]")]
	InvalidBand(f32, f32),
	#[error("fps must be positive")]
	InvalidFps,
	#[error("duration must be positive and finite, got {0}")]
	InvalidDuration(f32),
	#[error("physics needs at least one iteration")]
	NoIterations,
	#[error("max_dp must be positive, got {0}")]
	InvalidMaxDp(f32),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
	#[error("a chain needs at least 2 sampled positions, got {0}")]
	PathTooShort(usize),
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Physics(#[from] PhysicsError),
}
