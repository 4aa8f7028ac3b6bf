use crate::bezier::sample_curve;
use crate::chain::{Chain, ChainBuilder};
use crate::config::SceneConfig;
use crate::control::{ControlPoints, MidpointPolicy};
use crate::error::CurveError;
use xpbd::pworld::PWorld;

/// One chain per palette color, in palette order.
pub fn populate(
	world: &mut PWorld,
	config: &SceneConfig,
	midpoints: &mut dyn MidpointPolicy,
) -> Result<Vec<Chain>, CurveError> {
	config.validate()?;
	let (width, height) = (config.width as f32, config.height as f32);
	let builder = ChainBuilder::new(config.spring);
	config
		.palette
		.iter()
		.map(|color| {
			let mid = midpoints.midpoint(width, height);
			let control = ControlPoints::corners(width, height, mid);
			let path = sample_curve(&control, &config.curve)?;
			builder.build(world, path, control, *color)
		})
		.collect()
}
