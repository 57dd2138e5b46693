use seekmark_primitives::{Color, Rect};

use crate::strategy::Canvas;

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
	Fill { rect: Rect, color: Color },
	Stroke { rect: Rect, color: Color },
}

/// A canvas that records drawing calls in order instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
	pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
	pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
		self.commands.iter().filter_map(|cmd| match *cmd {
			DrawCommand::Fill { rect, color } => Some((rect, color)),
			DrawCommand::Stroke { .. } => None,
		})
	}

	pub fn strokes(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
		self.commands.iter().filter_map(|cmd| match *cmd {
			DrawCommand::Stroke { rect, color } => Some((rect, color)),
			DrawCommand::Fill { .. } => None,
		})
	}

	pub fn clear(&mut self) {
		self.commands.clear();
	}
}

impl Canvas for RecordingCanvas {
	fn fill_rect(&mut self, rect: Rect, color: Color) {
		self.commands.push(DrawCommand::Fill { rect, color });
	}

	fn stroke_rect(&mut self, rect: Rect, color: Color) {
		self.commands.push(DrawCommand::Stroke { rect, color });
	}
}
