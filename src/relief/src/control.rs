use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use protocol::V2;

/// The three points a chain's curve is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
	pub start: V2,
	pub mid: V2,
	pub end: V2,
}

impl ControlPoints {
	/// Start at the top-right corner, end at the bottom-left one.
	pub fn corners(width: f32, height: f32, mid: V2) -> Self {
		Self {
			start: V2::new(width, 0.),
			mid,
			end: V2::new(0., height),
		}
	}

	/// Distance of the midpoint from the canvas origin.
	pub fn dist(&self) -> f32 {
		self.mid[0].hypot(self.mid[1])
	}
}

/// Chooses the free middle control point of each chain.
pub trait MidpointPolicy {
	fn midpoint(&mut self, width: f32, height: f32) -> V2;
}

/// Uniform midpoint inside the central `[lo, hi]` band of the canvas.
pub struct RandomBand {
	band: [f32; 2],
	rng: StdRng,
}

impl RandomBand {
	pub fn new(band: [f32; 2], seed: Option<u64>) -> Self {
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		Self { band, rng }
	}

	fn range(&mut self, len: f32) -> f32 {
		let [lo, hi] = self.band;
		if hi <= lo {
			return lo * len;
		}
		self.rng.gen_range(lo * len..hi * len)
	}
}

impl MidpointPolicy for RandomBand {
	fn midpoint(&mut self, width: f32, height: f32) -> V2 {
		let x = self.range(width);
		let y = self.range(height);
		V2::new(x, y)
	}
}

/// Hands out the given midpoints in order, wrapping around.
pub struct FixedMidpoints {
	points: Vec<V2>,
	next: usize,
}

impl FixedMidpoints {
	pub fn new(points: Vec<V2>) -> Self {
		Self { points, next: 0 }
	}
}

impl MidpointPolicy for FixedMidpoints {
	fn midpoint(&mut self, width: f32, height: f32) -> V2 {
		if self.points.is_empty() {
			return V2::new(width / 2., height / 2.);
		}
		let p = self.points[self.next % self.points.len()];
		self.next += 1;
		p
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_dist_is_hypot() {
		let c = ControlPoints::corners(1080., 1080., V2::new(300., 400.));
		assert!((c.dist() - 500.).abs() < 1e-3);
		assert_eq!(c.start, V2::new(1080., 0.));
		assert_eq!(c.end, V2::new(0., 1080.));
	}

	#[test]
	fn test_random_band_bounds() {
		let mut policy = RandomBand::new([0.4, 0.6], Some(3));
		for _ in 0..200 {
			let p = policy.midpoint(1000., 500.);
			assert!((400.0..600.0).contains(&p[0]));
			assert!((200.0..300.0).contains(&p[1]));
		}
	}

	#[test]
	fn test_seed_reproducible() {
		let mut a = RandomBand::new([0.4, 0.6], Some(42));
		let mut b = RandomBand::new([0.4, 0.6], Some(42));
		for _ in 0..10 {
			assert_eq!(a.midpoint(1080., 1080.), b.midpoint(1080., 1080.));
		}
	}

	#[test]
	fn test_empty_band() {
		let mut policy = RandomBand::new([0.5, 0.5], None);
		assert_eq!(policy.midpoint(100., 200.), V2::new(50., 100.));
	}

	#[test]
	fn test_fixed_wraps() {
		let mut policy = FixedMidpoints::new(vec![V2::new(1., 2.), V2::new(3., 4.)]);
		assert_eq!(policy.midpoint(0., 0.), V2::new(1., 2.));
		assert_eq!(policy.midpoint(0., 0.), V2::new(3., 4.));
		assert_eq!(policy.midpoint(0., 0.), V2::new(1., 2.));
	}
}
