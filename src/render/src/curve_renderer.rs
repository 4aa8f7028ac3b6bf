use crate::surface::{LineCap, LineJoin, Surface};
use protocol::color::Rgba;
use protocol::V2;
use relief::chain::Chain;
use xpbd::pworld::PWorld;

/// Paints chains back to front.
///
/// The order is fixed when the renderer is made: descending midpoint
/// distance, so chains with a nearer midpoint cover farther ones. Ties
/// keep the order they were given in.
pub struct CurveRenderer {
	order: Vec<usize>,
}

impl CurveRenderer {
	pub fn new(chains: &[Chain]) -> Self {
		let mut order: Vec<usize> = (0..chains.len()).collect();
		order.sort_by(|&a, &b| chains[b].dist().total_cmp(&chains[a].dist()));
		Self { order }
	}

	/// Chain indices in draw order.
	pub fn order(&self) -> &[usize] {
		&self.order
	}

	pub fn draw<S: Surface + ?Sized>(&self, chains: &[Chain], world: &PWorld, surface: &mut S) {
		for &idx in self.order.iter() {
			if let Some(chain) = chains.get(idx) {
				draw_chain(chain, world, surface);
			}
		}
	}
}

pub fn draw_chain<S: Surface + ?Sized>(chain: &Chain, world: &PWorld, surface: &mut S) {
	trace_curve(&chain.positions(world), chain.color(), surface);
}

/// Fill the smoothed polyline through `points`, closed at the origin.
///
/// Every pair of neighbours `a, b` adds two quadratic segments with `a` as
/// the control point: one ending at their midpoint and one ending at `b`.
pub fn trace_curve<S: Surface + ?Sized>(points: &[V2], color: Rgba, surface: &mut S) {
	if points.len() < 2 {
		return;
	}
	surface.begin_path();
	surface.set_line_style(LineJoin::Round, LineCap::Round);
	surface.set_fill(color);
	surface.move_to(points[0]);
	for pair in points.windows(2) {
		let (a, b) = (pair[0], pair[1]);
		let mid = (a + b) / 2.0;
		surface.quadratic_curve_to(a, mid);
		surface.quadratic_curve_to(a, b);
	}
	surface.line_to(V2::zeros());
	surface.close_path();
	surface.fill();
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::surface::{DrawCommand, Recorder};
	use relief::config::SceneConfig;
	use relief::control::FixedMidpoints;
	use relief::populate::populate;

	fn scene(mids: Vec<V2>) -> (PWorld, Vec<Chain>) {
		let palette = vec![Rgba::rgb(1, 0, 0), Rgba::rgb(0, 1, 0), Rgba::rgb(0, 0, 1)];
		let config = SceneConfig::default().with_palette(palette);
		let mut world = PWorld::default();
		let chains = populate(&mut world, &config, &mut FixedMidpoints::new(mids)).unwrap();
		(world, chains)
	}

	#[test]
	fn test_descending_dist_order() {
		let (world, chains) = scene(vec![
			V2::new(300., 400.), // 500
			V2::new(180., 240.), // 300
			V2::new(480., 640.), // 800
		]);
		let renderer = CurveRenderer::new(&chains);
		assert_eq!(renderer.order(), &[2, 0, 1]);
		let dists: Vec<f32> = renderer.order().iter().map(|&i| chains[i].dist()).collect();
		for (d, expected) in dists.iter().zip([800., 500., 300.]) {
			assert!((d - expected).abs() < 1e-3);
		}

		let mut rec = Recorder::default();
		renderer.draw(&chains, &world, &mut rec);
		assert_eq!(
			rec.fills(),
			vec![Rgba::rgb(0, 0, 1), Rgba::rgb(1, 0, 0), Rgba::rgb(0, 1, 0)]
		);
	}

	#[test]
	fn test_order_fixed_after_steps() {
		let (mut world, chains) = scene(vec![
			V2::new(300., 400.),
			V2::new(180., 240.),
			V2::new(480., 640.),
		]);
		let renderer = CurveRenderer::new(&chains);
		let before = renderer.order().to_vec();
		for _ in 0..30 {
			world.step(1.0 / 60.0);
		}
		assert_eq!(renderer.order(), &before[..]);
	}

	#[test]
	fn test_trace_commands() {
		let points = [V2::new(10., 0.), V2::new(20., 10.), V2::new(40., 10.)];
		let mut rec = Recorder::default();
		trace_curve(&points, Rgba::WHITE, &mut rec);
		use DrawCommand::*;
		assert_eq!(
			rec.commands,
			vec![
				BeginPath,
				LineStyle(LineJoin::Round, LineCap::Round),
				SetFill(Rgba::WHITE),
				MoveTo(V2::new(10., 0.)),
				QuadTo(V2::new(10., 0.), V2::new(15., 5.)),
				QuadTo(V2::new(10., 0.), V2::new(20., 10.)),
				QuadTo(V2::new(20., 10.), V2::new(30., 10.)),
				QuadTo(V2::new(20., 10.), V2::new(40., 10.)),
				LineTo(V2::zeros()),
				ClosePath,
				Fill,
			]
		);
	}

	#[test]
	fn test_trace_reads_live_positions() {
		let (mut world, chains) = scene(vec![V2::new(540., 540.)]);
		world.step(1.0 / 60.0);
		let mut rec = Recorder::default();
		draw_chain(&chains[0], &world, &mut rec);
		let last = *chains[0].positions(&world).last().unwrap();
		let quads: Vec<V2> = rec
			.commands
			.iter()
			.filter_map(|c| match c {
				DrawCommand::QuadTo(_, to) => Some(*to),
				_ => None,
			})
			.collect();
		assert_eq!(quads.len(), 2 * 29);
		assert_eq!(*quads.last().unwrap(), last);
	}

	#[test]
	fn test_short_chain_draws_nothing() {
		let mut rec = Recorder::default();
		trace_curve(&[V2::new(1., 1.)], Rgba::BLACK, &mut rec);
		assert!(rec.commands.is_empty());
	}
}
