use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::RenderError;
use crate::surface::{LineCap, LineJoin, Surface};
use protocol::color::Rgba;
use protocol::view::View;
use protocol::V2;

fn paint(color: Rgba) -> Paint<'static> {
	let mut paint = Paint::default();
	paint.set_color_rgba8(color.r, color.g, color.b, color.a);
	paint
}

/// `Surface` drawing into a tiny-skia pixmap.
///
/// Commands arrive in canvas units and are mapped to pixels through a
/// `View`. Fills use the non-zero rule.
pub struct RasterSurface {
	pixmap: Pixmap,
	view: View,
	path: PathBuilder,
	// false until the open path has a current point
	has_point: bool,
	fill: Rgba,
	stroke_color: Rgba,
	stroke: Stroke,
}

impl RasterSurface {
	pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
		let pixmap = Pixmap::new(width, height)
			.ok_or(RenderError::EmptyCanvas(width, height))?;
		Ok(Self {
			pixmap,
			view: View::default(),
			path: PathBuilder::new(),
			has_point: false,
			fill: Rgba::BLACK,
			stroke_color: Rgba::BLACK,
			stroke: Stroke::default(),
		})
	}

	/// Surface for a `canvas` sized scene seen through `view`.
	pub fn with_view(canvas: [u32; 2], view: View) -> Result<Self, RenderError> {
		let [w, h] = view.screen_size(canvas);
		let mut result = Self::new(w, h)?;
		result.view = view;
		Ok(result)
	}

	pub fn width(&self) -> u32 {
		self.pixmap.width()
	}

	pub fn height(&self) -> u32 {
		self.pixmap.height()
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
		let c = self.pixmap.pixel(x, y)?.demultiply();
		Some(Rgba {
			r: c.red(),
			g: c.green(),
			b: c.blue(),
			a: c.alpha(),
		})
	}

	/// Straight-alpha copy of the pixels.
	pub fn to_image(&self) -> RgbaImage {
		let mut image = RgbaImage::new(self.width(), self.height());
		for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
			let c = src.demultiply();
			*dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
		}
		image
	}

	pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
		self.to_image().save_with_format(path, ImageFormat::Png)?;
		Ok(())
	}

	fn start_at(&mut self, p: V2) {
		if !self.has_point {
			self.path.move_to(p[0], p[1]);
			self.has_point = true;
		}
	}
}

impl Surface for RasterSurface {
	fn clear(&mut self, color: Rgba) {
		self.pixmap
			.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
	}

	fn begin_path(&mut self) {
		self.path = PathBuilder::new();
		self.has_point = false;
	}

	fn set_line_style(&mut self, join: LineJoin, cap: LineCap) {
		self.stroke.line_join = match join {
			LineJoin::Miter => tiny_skia::LineJoin::Miter,
			LineJoin::Round => tiny_skia::LineJoin::Round,
			LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
		};
		self.stroke.line_cap = match cap {
			LineCap::Butt => tiny_skia::LineCap::Butt,
			LineCap::Round => tiny_skia::LineCap::Round,
			LineCap::Square => tiny_skia::LineCap::Square,
		};
	}

	fn set_fill(&mut self, color: Rgba) {
		self.fill = color;
	}

	fn set_stroke(&mut self, color: Rgba, width: f32) {
		self.stroke_color = color;
		self.stroke.width = width * self.view.get_zoom();
	}

	fn move_to(&mut self, p: V2) {
		let p = self.view.w2s(p);
		self.path.move_to(p[0], p[1]);
		self.has_point = true;
	}

	// without a current point, line_to and quadratic_curve_to start a
	// subpath at their first point, as on an html canvas
	fn line_to(&mut self, p: V2) {
		let p = self.view.w2s(p);
		self.start_at(p);
		self.path.line_to(p[0], p[1]);
	}

	fn quadratic_curve_to(&mut self, ctrl: V2, to: V2) {
		let ctrl = self.view.w2s(ctrl);
		let to = self.view.w2s(to);
		self.start_at(ctrl);
		self.path.quad_to(ctrl[0], ctrl[1], to[0], to[1]);
	}

	fn close_path(&mut self) {
		self.path.close();
	}

	fn fill(&mut self) {
		if let Some(path) = self.path.clone().finish() {
			self.pixmap.fill_path(
				&path,
				&paint(self.fill),
				FillRule::Winding,
				Transform::identity(),
				None,
			);
		}
	}

	fn stroke(&mut self) {
		if let Some(path) = self.path.clone().finish() {
			self.pixmap.stroke_path(
				&path,
				&paint(self.stroke_color),
				&self.stroke,
				Transform::identity(),
				None,
			);
		}
	}
}
