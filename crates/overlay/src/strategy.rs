//! Paint routines for highlight overlays.
//!
//! A strategy is a pure function of the surface snapshot, the overlay span,
//! and the settings at paint time. It never reads engine state, so the host
//! may invoke it whenever its paint cycle runs.

use seekmark_primitives::{Color, Rect, Span, word_bounds};

use crate::coords::{glyph_rect, span_rect};
use crate::host::{HighlightSettings, Surface};

/// Drawing target supplied by the host's paint cycle.
pub trait Canvas {
	fn fill_rect(&mut self, rect: Rect, color: Color);
	fn stroke_rect(&mut self, rect: Rect, color: Color);
}

/// How an overlay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
	/// Filled span with a tag-colored outline.
	Filled,
	/// [`Self::Filled`] plus an outline around the containing word.
	FilledWithOutline,
	/// A one-glyph marker at the match start.
	RegexSingle,
}

/// Pixels the word outline extends past the word on the left.
const WORD_OUTLINE_LEFT: i32 = 1;
/// Pixels the word outline extends past the word on the right.
const WORD_OUTLINE_RIGHT: i32 = 2;

impl RenderStrategy {
	pub fn paint(
		self,
		surface: &dyn Surface,
		span: Span,
		canvas: &mut dyn Canvas,
		settings: &dyn HighlightSettings,
	) {
		match self {
			Self::Filled => paint_filled(surface, span, canvas, settings),
			Self::FilledWithOutline => {
				paint_filled(surface, span, canvas, settings);
				paint_word_outline(surface, span, canvas, settings);
			}
			Self::RegexSingle => {
				// Regex matches can span lines; only the start is marked.
				canvas.fill_rect(glyph_rect(surface, span.start), settings.highlight_fill());
			}
		}
	}
}

fn paint_filled(
	surface: &dyn Surface,
	span: Span,
	canvas: &mut dyn Canvas,
	settings: &dyn HighlightSettings,
) {
	let rect = span_rect(surface, span);
	canvas.fill_rect(rect, settings.highlight_fill());
	canvas.stroke_rect(rect, settings.tag_outline());
}

fn paint_word_outline(
	surface: &dyn Surface,
	span: Span,
	canvas: &mut dyn Canvas,
	settings: &dyn HighlightSettings,
) {
	let Some(word) = word_bounds(surface.text(), span.start) else {
		return;
	};
	let rect = span_rect(surface, word).widen(WORD_OUTLINE_LEFT, WORD_OUTLINE_RIGHT);
	canvas.stroke_rect(rect, settings.target_outline());
}

#[cfg(test)]
mod tests;
