use fnv::FnvHashMap;

use crate::constraint::spring::SpringConstraint;
use crate::constraint::{Anchor, CRef};
use crate::particle::{CollisionPolicy, Particle};
use crate::{C2, V2};

/// Spatial hash over the particles that take part in collisions.
///
/// Cells must be at least as wide as the largest particle diameter, so
/// every contact lies within a cell or its 8 neighbours.
pub struct ParticleGroup {
	csize: f32,
	data: FnvHashMap<C2, Vec<usize>>,
}

impl ParticleGroup {
	pub fn new(csize: f32) -> Self {
		Self {
			csize,
			data: FnvHashMap::default(),
		}
	}

	/// Index every collidable particle; `Disabled` particles are left out.
	pub fn build(csize: f32, particles: &[Particle]) -> Self {
		let mut pg = Self::new(csize);
		for p in particles
			.iter()
			.filter(|p| p.collision == CollisionPolicy::Enabled)
		{
			pg.add_particle(p);
		}
		pg
	}

	fn get_cpos(&self, p: V2) -> C2 {
		C2::new(
			(p[0] / self.csize).floor() as i32,
			(p[1] / self.csize).floor() as i32,
		)
	}

	pub fn add_particle(&mut self, p: &Particle) {
		let cpos = self.get_cpos(p.get_pos());
		self.data.entry(cpos).or_default().push(p.get_id());
	}

	pub fn len(&self) -> usize {
		self.data.values().map(|ids| ids.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Temporary repulsive springs for every overlapping collidable pair.
	pub fn collision_constraints(&self, particles: &[Particle]) -> Vec<CRef> {
		let mut result = Vec::new();
		for (cpos, ids) in self.data.iter() {
			for dx in -1..=1 {
				for dy in -1..=1 {
					let Some(others) = self.data.get(&(*cpos + C2::new(dx, dy))) else {
						continue;
					};
					for &i in ids {
						for &j in others {
							// each pair once, from the lower id
							if i >= j {
								continue;
							}
							let (p1, p2) = (&particles[i], &particles[j]);
							if !p1.collision.collides_with(p2.collision) {
								continue;
							}
							let r = p1.radius + p2.radius;
							if r <= 0.0 {
								continue;
							}
							if (p2.get_pos() - p1.get_pos()).magnitude() < r {
								let c = SpringConstraint::new_with_l0(
									Anchor::Particle(i),
									Anchor::Particle(j),
									r,
								)
								.repulsive_only()
								.build();
								result.push(c);
							}
						}
					}
				}
			}
		}
		result
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle::ParticleTemplate;

	fn particle(id: usize, pos: V2, collision: CollisionPolicy) -> Particle {
		let t = ParticleTemplate::new(pos)
			.with_radius(1.0)
			.with_collision(collision);
		Particle::from_template(id, &t)
	}

	#[test]
	fn test_overlap_across_cells() {
		use CollisionPolicy::Enabled;
		let ps = vec![
			particle(0, V2::new(19.5, 0.), Enabled),
			particle(1, V2::new(20.5, 0.), Enabled),
			particle(2, V2::new(80., 80.), Enabled),
		];
		let pg = ParticleGroup::build(20.0, &ps);
		assert_eq!(pg.len(), 3);
		assert_eq!(pg.collision_constraints(&ps).len(), 1);
	}

	#[test]
	fn test_disabled_never_indexed() {
		use CollisionPolicy::*;
		let ps = vec![
			particle(0, V2::new(5., 5.), Disabled),
			particle(1, V2::new(5., 5.), Disabled),
			particle(2, V2::new(5.5, 5.), Enabled),
		];
		let pg = ParticleGroup::build(20.0, &ps);
		assert_eq!(pg.len(), 1);
		assert!(pg.collision_constraints(&ps).is_empty());
	}
}
