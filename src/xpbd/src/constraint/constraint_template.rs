use crate::constraint::Anchor;

/// A spring as stored in a `PhysicalModel`, ends indexed locally.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringTemplate {
	pub ends: [Anchor; 2],
	pub l0: f32,
	pub stiffness: f32,
	pub damping: f32,
}
