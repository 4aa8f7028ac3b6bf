// pr_model: Physical model for rendering

use std::collections::HashMap;

use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: V2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrAnchor {
	Particle(usize),
	Fixed(V2),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrConstraint {
	pub id: usize,
	pub ends: [PrAnchor; 2],
}

#[derive(Clone, Debug, Default)]
pub struct PrModel {
	pub particles: HashMap<usize, PrParticle>,
	pub constraints: Vec<PrConstraint>,
}

impl PrModel {
	pub fn resolve(&self, anchor: PrAnchor) -> Option<V2> {
		match anchor {
			PrAnchor::Particle(id) => self.particles.get(&id).map(|p| p.pos),
			PrAnchor::Fixed(pos) => Some(pos),
		}
	}

	/// Both endpoints of every constraint whose particles are still present.
	pub fn segments(&self) -> Vec<[V2; 2]> {
		self.constraints
			.iter()
			.filter_map(|c| {
				Some([self.resolve(c.ends[0])?, self.resolve(c.ends[1])?])
			})
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_segments_skip_missing() {
		let mut model = PrModel::default();
		model.particles.insert(0, PrParticle { pos: V2::new(1., 2.) });
		model.constraints.push(PrConstraint {
			id: 0,
			ends: [PrAnchor::Fixed(V2::zeros()), PrAnchor::Particle(0)],
		});
		model.constraints.push(PrConstraint {
			id: 1,
			ends: [PrAnchor::Particle(0), PrAnchor::Particle(7)],
		});
		let segs = model.segments();
		assert_eq!(segs.len(), 1);
		assert_eq!(segs[0][1], V2::new(1., 2.));
	}
}
