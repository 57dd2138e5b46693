//! Mapping from text offsets to pixel rectangles.
//!
//! Nothing here is cached: layout changes (wrapping, scrolling) between
//! paints, so every call asks the surface again.

use seekmark_primitives::{CharIdx, Point, Rect, Span};

use crate::host::Surface;

/// Returns the top-left pixel of the character at `offset`.
///
/// Offsets past the end of the text are clamped to the end position; these
/// coordinates only guide painting, so a stale offset degrades to a nearby
/// position instead of failing.
pub fn offset_to_point(surface: &dyn Surface, offset: CharIdx) -> Point {
	let len = surface.text().len_chars();
	surface.layout_position(offset.min(len))
}

/// Returns the rectangle covering `span` at line height.
///
/// Spans that cross a visual line break are measured by glyph advances from
/// the start position, so the rectangle stays on the first row.
pub fn span_rect(surface: &dyn Surface, span: Span) -> Rect {
	let text = surface.text();
	let span = span.clamp_to(text.len_chars());
	let start = offset_to_point(surface, span.start);
	let end = offset_to_point(surface, span.end);

	let width = if end.y == start.y {
		end.x.saturating_sub(start.x).max(0) as u32
	} else {
		text.slice(span.start..span.end)
			.chars()
			.map(|ch| surface.glyph_width(visible_glyph(ch)))
			.sum()
	};

	Rect::at(start, width, surface.line_height())
}

/// Returns a rectangle exactly one glyph wide over the character at `offset`.
///
/// Line breaks, tabs, and the end of the text are measured as a space.
pub fn glyph_rect(surface: &dyn Surface, offset: CharIdx) -> Rect {
	let text = surface.text();
	let ch = if offset < text.len_chars() {
		visible_glyph(text.char(offset))
	} else {
		' '
	};
	Rect::at(
		offset_to_point(surface, offset),
		surface.glyph_width(ch),
		surface.line_height(),
	)
}

fn visible_glyph(ch: char) -> char {
	match ch {
		'\n' | '\r' | '\t' => ' ',
		other => other,
	}
}
