/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// Kept distinct from [`CharIdx`] so signatures say which one they expect.
pub type CharLen = usize;

/// A half-open character span `[start, end)`.
///
/// Unlike a selection range there is no direction: `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
	/// First character covered by the span.
	pub start: CharIdx,
	/// One past the last character covered by the span.
	pub end: CharIdx,
}

impl Span {
	/// Creates a span, swapping the bounds if they are given in reverse.
	pub fn new(start: CharIdx, end: CharIdx) -> Self {
		if end < start {
			Self {
				start: end,
				end: start,
			}
		} else {
			Self { start, end }
		}
	}

	/// Creates a span of `len` characters beginning at `start`.
	pub fn at(start: CharIdx, len: CharLen) -> Self {
		Self {
			start,
			end: start.saturating_add(len),
		}
	}

	/// Returns the number of characters covered.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true if the span covers no characters.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if `pos` lies inside the span (exclusive of `end`).
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.start && pos < self.end
	}

	/// Clamps both bounds to `[0, max_char]`.
	pub fn clamp_to(&self, max_char: CharIdx) -> Self {
		Self {
			start: self.start.min(max_char),
			end: self.end.min(max_char),
		}
	}
}

impl From<std::ops::Range<CharIdx>> for Span {
	fn from(range: std::ops::Range<CharIdx>) -> Self {
		Self::new(range.start, range.end)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn new_orders_bounds() {
		let s = Span::new(10, 3);
		assert_eq!(s, Span { start: 3, end: 10 });
		assert_eq!(s.len(), 7);
	}

	#[test]
	fn at_saturates() {
		let s = Span::at(usize::MAX - 1, 5);
		assert_eq!(s.end, usize::MAX);
	}

	#[test]
	fn contains_is_half_open() {
		let s = Span::from(3..6);
		assert!(!s.contains(2));
		assert!(s.contains(3));
		assert!(s.contains(5));
		assert!(!s.contains(6));
	}

	#[test]
	fn empty_span() {
		let s = Span::at(4, 0);
		assert!(s.is_empty());
		assert!(!s.contains(4));
	}

	#[test]
	fn clamp_to_pulls_both_bounds_in() {
		assert_eq!(Span::new(8, 20).clamp_to(10), Span::new(8, 10));
		assert_eq!(Span::new(12, 20).clamp_to(10), Span::new(10, 10));
	}

	#[test]
	fn clamped_spans_sort_by_start_then_end() {
		let len = 7;
		let mut spans = vec![Span::at(5, 4).clamp_to(len), Span::at(5, 1), Span::at(0, 2).clamp_to(len)];
		spans.sort();
		assert_eq!(spans, vec![Span::new(0, 2), Span::new(5, 6), Span::new(5, 7)]);
	}

	proptest! {
		#[test]
		fn clamp_to_never_exceeds_max(a in 0usize..500, b in 0usize..500, max in 0usize..500) {
			let s = Span::new(a, b).clamp_to(max);
			prop_assert!(s.start <= s.end);
			prop_assert!(s.end <= max);
		}
	}
}
