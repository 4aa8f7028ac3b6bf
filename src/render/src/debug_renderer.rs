use crate::surface::{LineCap, LineJoin, Surface};
use protocol::color::Rgba;
use protocol::pr_model::PrModel;
use protocol::V2;

/// Wireframe of the physics state: springs as lines, particles as dots.
#[derive(Clone, Copy, Debug)]
pub struct DebugRenderer {
	pub constraint_color: Rgba,
	pub particle_color: Rgba,
	pub particle_size: f32,
	pub line_width: f32,
}

impl Default for DebugRenderer {
	fn default() -> Self {
		Self {
			constraint_color: Rgba::rgb(0, 160, 160),
			particle_color: Rgba::rgb(255, 0, 255),
			particle_size: 3.0,
			line_width: 1.0,
		}
	}
}

impl DebugRenderer {
	pub fn with_particle_size(mut self, size: f32) -> Self {
		self.particle_size = size;
		self
	}

	pub fn draw<S: Surface + ?Sized>(&self, pr_model: &PrModel, surface: &mut S) {
		let segments = pr_model.segments();
		if !segments.is_empty() {
			surface.begin_path();
			surface.set_line_style(LineJoin::Bevel, LineCap::Butt);
			surface.set_stroke(self.constraint_color, self.line_width);
			for [p1, p2] in segments.into_iter() {
				surface.move_to(p1);
				surface.line_to(p2);
			}
			surface.stroke();
		}

		if pr_model.particles.is_empty() {
			return;
		}
		// sorted so the command stream does not depend on hash order
		let mut ids: Vec<&usize> = pr_model.particles.keys().collect();
		ids.sort_unstable();
		let h = self.particle_size / 2.0;
		surface.begin_path();
		surface.set_fill(self.particle_color);
		for id in ids {
			let pos = pr_model.particles[id].pos;
			surface.move_to(pos + V2::new(-h, -h));
			surface.line_to(pos + V2::new(h, -h));
			surface.line_to(pos + V2::new(h, h));
			surface.line_to(pos + V2::new(-h, h));
			surface.close_path();
		}
		surface.fill();
	}
}
