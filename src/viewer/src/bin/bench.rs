use std::time::Instant;

use anyhow::Result;

use relief::config::SceneConfig;
use viewer::Scene;

fn main() -> Result<()> {
	env_logger::init();
	let config = SceneConfig::default().with_seed(0);
	let dt = config.frame.frame_time();
	let rframes = config.frame.frame_count();
	let mut scene = Scene::new(config)?;
	scene.begin()?;
	let start = Instant::now();
	for _ in 0..rframes {
		scene.step(dt);
	}
	let time = rframes as f32 * dt;
	let duration = start.elapsed().as_secs_f32();
	// wall time over simulated time
	eprintln!("{:.3}%", duration / time * 100.0);
	Ok(())
}
