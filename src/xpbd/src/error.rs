use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
	#[error("particle index {index} out of bounds (count: {count})")]
	ParticleOutOfBounds { index: usize, count: usize },
	#[error("stiffness must be in [0, 1], got {0}")]
	InvalidStiffness(f32),
	#[error("damping must be in [0, 1], got {0}")]
	InvalidDamping(f32),
}

pub(crate) fn check_unit(value: f32, err: fn(f32) -> PhysicsError) -> Result<(), PhysicsError> {
	if (0.0..=1.0).contains(&value) {
		Ok(())
	} else {
		Err(err(value))
	}
}
