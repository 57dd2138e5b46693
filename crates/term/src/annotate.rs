//! Maps painted rectangles back onto the text grid.
//!
//! Each visual row of a surface is printed as-is, followed by a marker row
//! when anything was painted on it: `^` under filled cells and `~` under
//! cells covered only by a target outline.

use seekmark_overlay::Surface;
use seekmark_overlay::headless::{DrawCommand, TextSurface};
use seekmark_primitives::{Color, Rect};

const FILL_MARK: char = '^';
const OUTLINE_MARK: char = '~';
/// Placeholder for the second cell of a double-width glyph.
const CONTINUATION: char = '\0';

/// Renders `surface`'s text with marker rows for `commands`.
///
/// Strokes in `target_outline` become outline marks; other strokes trace
/// fills and are not shown separately.
pub fn annotate(surface: &TextSurface, commands: &[DrawCommand], target_outline: Color) -> String {
	let cell = surface.cell_width().max(1) as i32;
	let line = surface.line_height().max(1) as i32;

	let rows = text_grid(surface, cell, line);
	let mut marks: Vec<Vec<char>> = vec![Vec::new(); rows.len()];

	for command in commands {
		match *command {
			DrawCommand::Stroke { rect, color } if color == target_outline => {
				mark(&mut marks, rect, cell, line, OUTLINE_MARK);
			}
			_ => {}
		}
	}
	for command in commands {
		if let DrawCommand::Fill { rect, .. } = *command {
			mark(&mut marks, rect, cell, line, FILL_MARK);
		}
	}

	let mut out = String::new();
	for (row, row_marks) in rows.iter().zip(&marks) {
		out.extend(row.iter().filter(|c| **c != CONTINUATION));
		out.push('\n');
		if row_marks.iter().any(|c| *c != ' ') {
			let marker: String = row_marks.iter().collect();
			out.push_str(marker.trim_end());
			out.push('\n');
		}
	}
	out
}

/// Places every character at its laid-out cell.
fn text_grid(surface: &TextSurface, cell: i32, line: i32) -> Vec<Vec<char>> {
	let text = surface.text();
	let mut rows: Vec<Vec<char>> = vec![Vec::new()];

	for (offset, ch) in text.chars().enumerate() {
		let pos = surface.layout_position(offset);
		let row = pos.y.div_euclid(line).max(0) as usize;
		let col = pos.x.div_euclid(cell).max(0) as usize;
		if rows.len() <= row {
			rows.resize(row + 1, Vec::new());
		}
		if ch == '\n' || ch == '\r' {
			continue;
		}

		let cells = (surface.glyph_width(ch) as i32 / cell).max(1) as usize;
		let target = &mut rows[row];
		if target.len() < col + cells {
			target.resize(col + cells, ' ');
		}
		target[col] = if ch == '\t' { ' ' } else { ch };
		for slot in &mut target[col + 1..col + cells] {
			*slot = CONTINUATION;
		}
	}
	rows
}

/// Marks the cells `rect` covers, rounding its edges to the nearest cell
/// boundary so sub-cell insets and extensions do not spill over.
fn mark(marks: &mut [Vec<char>], rect: Rect, cell: i32, line: i32, glyph: char) {
	if rect.is_empty() {
		return;
	}
	let first_col = (rect.left() + cell / 2).div_euclid(cell).max(0) as usize;
	let last_col = (rect.right() + cell / 2).div_euclid(cell).max(0) as usize;
	let first_row = rect.top().div_euclid(line).max(0) as usize;
	let last_row = (rect.bottom() - 1).div_euclid(line).max(0) as usize;

	for row in first_row..=last_row {
		let Some(row_marks) = marks.get_mut(row) else {
			break;
		};
		if row_marks.len() < last_col {
			row_marks.resize(last_col, ' ');
		}
		for slot in &mut row_marks[first_col.min(last_col)..last_col] {
			*slot = glyph;
		}
	}
}
