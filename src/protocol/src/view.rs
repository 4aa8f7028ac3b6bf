use crate::V2;

/// Maps canvas coordinates onto output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
	offset: V2,
	zoom: f32,
}

impl Default for View {
	fn default() -> Self {
		Self {
			offset: V2::zeros(),
			zoom: 1.0,
		}
	}
}

impl View {
	pub fn with_zoom(mut self, zoom: f32) -> Self {
		self.zoom = zoom;
		self
	}

	pub fn with_offset(mut self, offset: V2) -> Self {
		self.offset = offset;
		self
	}

	pub fn get_zoom(&self) -> f32 {
		self.zoom
	}

	pub fn w2s(&self, pos: V2) -> V2 {
		(pos - self.offset) * self.zoom
	}

	pub fn s2w(&self, pos: V2) -> V2 {
		pos / self.zoom + self.offset
	}

	/// Pixel size of a canvas of the given dimensions.
	pub fn screen_size(&self, canvas: [u32; 2]) -> [u32; 2] {
		[
			(canvas[0] as f32 * self.zoom).round().max(1.0) as u32,
			(canvas[1] as f32 * self.zoom).round().max(1.0) as u32,
		]
	}
}
