use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use protocol::view::View;
use relief::config::SceneConfig;
use render::raster::RasterSurface;
use viewer::Scene;
use xpbd::time_manager::TimeManager;

#[derive(Parser, Debug)]
#[command(name = "relief", about = "Render spring-chain relief curves to png frames")]
struct Cli {
	/// JSON scene file, missing fields take their defaults
	#[arg(long)]
	config: Option<PathBuf>,
	#[arg(long)]
	width: Option<u32>,
	#[arg(long)]
	height: Option<u32>,
	#[arg(long)]
	seed: Option<u64>,
	/// Number of frames, instead of fps times duration
	#[arg(long)]
	frames: Option<usize>,
	#[arg(long, default_value = "frames")]
	out: PathBuf,
	/// Output pixels per canvas unit
	#[arg(long, default_value_t = 1.0)]
	scale: f32,
	/// Draw the physics wireframe
	#[arg(long)]
	debug: bool,
}

fn load_config(cli: &Cli) -> Result<SceneConfig> {
	let mut config = match &cli.config {
		Some(path) => {
			let text = std::fs::read_to_string(path)
				.with_context(|| format!("reading {}", path.display()))?;
			serde_json::from_str(&text)
				.with_context(|| format!("parsing {}", path.display()))?
		}
		None => SceneConfig::default(),
	};
	let width = cli.width.unwrap_or(config.width);
	let height = cli.height.unwrap_or(config.height);
	config = config.with_size(width, height);
	if cli.seed.is_some() {
		config.seed = cli.seed;
	}
	config.debug |= cli.debug;
	Ok(config)
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();
	ensure!(
		cli.scale > 0.0 && cli.scale.is_finite(),
		"scale must be positive, got {}",
		cli.scale
	);
	let config = load_config(&cli)?;
	let mut scene = Scene::new(config)?;
	scene.begin()?;

	let config = scene.config();
	let frames = cli.frames.unwrap_or_else(|| scene.frame_count());
	let mut tm = if config.frame.fixed {
		TimeManager::fixed(config.frame.frame_time())
	} else {
		TimeManager::realtime(config.frame.frame_time())
	};
	let mut surface = RasterSurface::with_view(
		[config.width, config.height],
		View::default().with_zoom(cli.scale),
	)?;
	std::fs::create_dir_all(&cli.out)
		.with_context(|| format!("creating {}", cli.out.display()))?;
	log::info!("rendering {} frames into {}", frames, cli.out.display());

	for frame in 0..frames {
		scene.frame(tm.take_time(), &mut surface);
		let path = cli.out.join(format!("frame_{:04}.png", frame));
		surface
			.save_png(&path)
			.with_context(|| format!("writing {}", path.display()))?;
		log::debug!("saved {}", path.display());
	}
	scene.end();
	Ok(())
}
