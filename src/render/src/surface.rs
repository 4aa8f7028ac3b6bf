use protocol::color::Rgba;
use protocol::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
	Miter,
	Round,
	Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
	Butt,
	Round,
	Square,
}

/// Canvas-style path drawing target.
///
/// A path is collected between `begin_path` and `fill`/`stroke`. As on an
/// html canvas, `line_to` or `quadratic_curve_to` without a current point
/// starts a subpath at their first point.
pub trait Surface {
	fn clear(&mut self, color: Rgba);
	fn begin_path(&mut self);
	fn set_line_style(&mut self, join: LineJoin, cap: LineCap);
	fn set_fill(&mut self, color: Rgba);
	fn set_stroke(&mut self, color: Rgba, width: f32);
	fn move_to(&mut self, p: V2);
	fn line_to(&mut self, p: V2);
	fn quadratic_curve_to(&mut self, ctrl: V2, to: V2);
	fn close_path(&mut self);
	fn fill(&mut self);
	fn stroke(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear(Rgba),
	BeginPath,
	LineStyle(LineJoin, LineCap),
	SetFill(Rgba),
	SetStroke(Rgba, f32),
	MoveTo(V2),
	LineTo(V2),
	QuadTo(V2, V2),
	ClosePath,
	Fill,
	Stroke,
}

/// Keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
	pub commands: Vec<DrawCommand>,
}

impl Recorder {
	/// The fill color in effect at each `Fill`, in order.
	pub fn fills(&self) -> Vec<Rgba> {
		let mut color = Rgba::BLACK;
		let mut result = Vec::new();
		for command in self.commands.iter() {
			match command {
				DrawCommand::SetFill(c) => color = *c,
				DrawCommand::Fill => result.push(color),
				_ => {}
			}
		}
		result
	}

	pub fn clear_commands(&mut self) {
		self.commands.clear();
	}
}

impl Surface for Recorder {
	fn clear(&mut self, color: Rgba) {
		self.commands.push(DrawCommand::Clear(color));
	}

	fn begin_path(&mut self) {
		self.commands.push(DrawCommand::BeginPath);
	}

	fn set_line_style(&mut self, join: LineJoin, cap: LineCap) {
		self.commands.push(DrawCommand::LineStyle(join, cap));
	}

	fn set_fill(&mut self, color: Rgba) {
		self.commands.push(DrawCommand::SetFill(color));
	}

	fn set_stroke(&mut self, color: Rgba, width: f32) {
		self.commands.push(DrawCommand::SetStroke(color, width));
	}

	fn move_to(&mut self, p: V2) {
		self.commands.push(DrawCommand::MoveTo(p));
	}

	fn line_to(&mut self, p: V2) {
		self.commands.push(DrawCommand::LineTo(p));
	}

	fn quadratic_curve_to(&mut self, ctrl: V2, to: V2) {
		self.commands.push(DrawCommand::QuadTo(ctrl, to));
	}

	fn close_path(&mut self) {
		self.commands.push(DrawCommand::ClosePath);
	}

	fn fill(&mut self) {
		self.commands.push(DrawCommand::Fill);
	}

	fn stroke(&mut self) {
		self.commands.push(DrawCommand::Stroke);
	}
}
