use relief::bezier::sample_curve;
use relief::config::SceneConfig;
use render::surface::{DrawCommand, Recorder};
use viewer::Scene;

fn run(seed: u64, frames: usize) -> (Scene, Vec<DrawCommand>) {
	let mut scene = Scene::new(SceneConfig::default().with_seed(seed)).unwrap();
	scene.begin().unwrap();
	for _ in 0..frames {
		scene.step(1.0 / 60.0);
	}
	let mut rec = Recorder::default();
	scene.draw(&mut rec);
	(scene, rec.commands)
}

#[test]
fn test_seeded_runs_match() {
	let (a, commands_a) = run(42, 60);
	let (b, commands_b) = run(42, 60);
	assert_eq!(a.chains(), b.chains());
	assert_eq!(a.renderer().order(), b.renderer().order());
	assert_eq!(commands_a, commands_b);
}

#[test]
fn test_initial_state_follows_curves() {
	let (scene, _) = run(5, 0);
	let config = scene.config();
	for chain in scene.chains() {
		let path = sample_curve(chain.control(), &config.curve).unwrap();
		assert_eq!(chain.positions(scene.world()), path.points());
		let [lo, hi] = config.midpoint_band;
		let mid = chain.control().mid;
		assert!(mid[0] >= lo * config.width as f32 && mid[0] <= hi * config.width as f32);
		assert!(mid[1] >= lo * config.height as f32 && mid[1] <= hi * config.height as f32);
	}
}

#[test]
fn test_draw_order_by_distance() {
	let (scene, _) = run(9, 10);
	let dists: Vec<f32> = scene
		.renderer()
		.order()
		.iter()
		.map(|&i| scene.chains()[i].dist())
		.collect();
	assert!(dists.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_last_particle_pulled_to_origin() {
	let (start, _) = run(1, 0);
	let (later, _) = run(1, 120);
	for (c0, c1) in start.chains().iter().zip(later.chains()) {
		let before = c0.positions(start.world()).last().unwrap().magnitude();
		let after = c1.positions(later.world()).last().unwrap().magnitude();
		assert!(after < before, "{} >= {}", after, before);
	}
}
