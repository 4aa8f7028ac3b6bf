//! Quadratic Bezier construction and uniform sampling.

use crate::config::CurveConfig;
use crate::control::ControlPoints;
use crate::error::CurveError;
use protocol::V2;

/// Quadratic Bezier with control handle `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
	pub p0: V2,
	pub p1: V2,
	pub p2: V2,
}

impl QuadBezier {
	pub fn new(p0: V2, p1: V2, p2: V2) -> Self {
		Self { p0, p1, p2 }
	}

	/// The curve from `start` to `end` that passes through `through` at
	/// parameter `t`.
	///
	/// The handle sits on the ray from `C` through `through`, where `C` is
	/// the point of the start-end line that `through` projects onto at `t`:
	/// with `w = t² + (1-t)²`, `C = u·start + (1-u)·end` for `u = (1-t)²/w`,
	/// and `handle = through + (through - C)·w/(1-w)`.
	pub fn from_points(start: V2, through: V2, end: V2, t: f32) -> Self {
		if t <= 0.0 {
			return Self::new(through, through, end);
		}
		if t >= 1.0 {
			return Self::new(start, through, through);
		}
		let mt = 1.0 - t;
		let w = t * t + mt * mt;
		let u = mt * mt / w;
		let c = start * u + end * (1.0 - u);
		let ratio = ((w - 1.0) / w).abs();
		let handle = through + (through - c) / ratio;
		Self::new(start, handle, end)
	}

	pub fn eval(&self, t: f32) -> V2 {
		let mt = 1.0 - t;
		self.p0 * (mt * mt) + self.p1 * (2.0 * mt * t) + self.p2 * (t * t)
	}

	/// `steps` points at uniform parameter spacing, both ends included.
	pub fn sample(&self, steps: usize) -> Vec<V2> {
		match steps {
			0 => Vec::new(),
			1 => vec![self.p0],
			_ => {
				let last = (steps - 1) as f32;
				(0..steps).map(|i| self.eval(i as f32 / last)).collect()
			}
		}
	}
}

/// Ordered curve samples, consumed by the chain builder.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledPath {
	points: Vec<V2>,
}

impl SampledPath {
	pub fn new(points: Vec<V2>) -> Self {
		Self { points }
	}

	pub fn points(&self) -> &[V2] {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn into_points(self) -> Vec<V2> {
		self.points
	}
}

/// Sample the curve through `control` into `curve.steps` positions.
pub fn sample_curve(
	control: &ControlPoints,
	curve: &CurveConfig,
) -> Result<SampledPath, CurveError> {
	curve.validate()?;
	let bezier =
		QuadBezier::from_points(control.start, control.mid, control.end, curve.tightness);
	Ok(SampledPath::new(bezier.sample(curve.steps)))
}
