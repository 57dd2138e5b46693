use ropey::RopeSlice;

use crate::span::{CharIdx, Span};

/// Returns whether a character is a word character (alphanumeric or underscore).
///
/// This is the same classification word motions use, so an outlined target
/// always covers the token a jump would consume.
pub fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Returns the span of the word containing `pos`, or `None` when the character
/// at `pos` is not a word character (or `pos` is past the end of the text).
///
/// The returned span is half-open: `end` is one past the last word character.
pub fn word_bounds(text: RopeSlice, pos: CharIdx) -> Option<Span> {
	let len = text.len_chars();
	if pos >= len || !is_word_char(text.char(pos)) {
		return None;
	}

	let mut start = pos;
	while start > 0 && is_word_char(text.char(start - 1)) {
		start -= 1;
	}

	let mut end = pos;
	while end + 1 < len && is_word_char(text.char(end + 1)) {
		end += 1;
	}

	Some(Span::new(start, end + 1))
}
