use regex::Regex;
use ropey::RopeSlice;
use seekmark_primitives::{CharIdx, CharLen};

use crate::error::QueryError;

/// Kind of a [`Query`], used by strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
	Literal,
	RegularExpression,
}

/// The search text the matches were produced from.
#[derive(Debug, Clone)]
pub enum Query {
	/// Plain text; every match is as long as the text.
	Literal(String),
	/// A compiled pattern; match length depends on the text at each offset.
	Regex(Regex),
}

impl Query {
	pub fn literal(text: impl Into<String>) -> Result<Self, QueryError> {
		let text = text.into();
		if text.is_empty() {
			return Err(QueryError::Empty);
		}
		Ok(Self::Literal(text))
	}

	pub fn regex(pattern: &str) -> Result<Self, QueryError> {
		if pattern.is_empty() {
			return Err(QueryError::Empty);
		}
		Ok(Self::Regex(Regex::new(pattern)?))
	}

	pub fn kind(&self) -> QueryKind {
		match self {
			Self::Literal(_) => QueryKind::Literal,
			Self::Regex(_) => QueryKind::RegularExpression,
		}
	}

	/// The text as the user typed it.
	pub fn raw_text(&self) -> &str {
		match self {
			Self::Literal(text) => text,
			Self::Regex(re) => re.as_str(),
		}
	}

	/// Length in characters of the match starting at `offset`.
	///
	/// For regex queries this snapshots the whole text; use [`Self::measure`]
	/// when measuring many offsets in the same text.
	pub fn match_length(&self, text: RopeSlice, offset: CharIdx) -> CharLen {
		self.measure(text).len_at(offset)
	}

	/// Prepares per-offset match length lookups for one text snapshot.
	pub fn measure<'q, 't>(&'q self, text: RopeSlice<'t>) -> MatchMeasure<'q, 't> {
		match self {
			Self::Literal(literal) => MatchMeasure::Fixed(literal.chars().count()),
			Self::Regex(regex) => MatchMeasure::Regex {
				regex,
				text,
				haystack: String::from(text),
			},
		}
	}
}

/// Match length lookup bound to one text snapshot.
pub enum MatchMeasure<'q, 't> {
	Fixed(CharLen),
	Regex {
		regex: &'q Regex,
		text: RopeSlice<'t>,
		haystack: String,
	},
}

impl MatchMeasure<'_, '_> {
	/// Returns the match length at `offset`, or 0 if no regex match starts there.
	pub fn len_at(&self, offset: CharIdx) -> CharLen {
		match self {
			Self::Fixed(len) => *len,
			Self::Regex {
				regex,
				text,
				haystack,
			} => {
				if offset > text.len_chars() {
					return 0;
				}
				let byte = text.char_to_byte(offset);
				regex
					.find_at(haystack, byte)
					.filter(|m| m.start() == byte)
					.map_or(0, |m| m.as_str().chars().count())
			}
		}
	}
}

/// How the pending jump will treat the selected match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
	/// Move the caret to the match start.
	#[default]
	Jump,
	/// Move the caret to the match end.
	JumpEnd,
	/// Select the whole word under the match.
	Target,
	/// Jump to the declaration of the symbol under the match.
	Declaration,
}
