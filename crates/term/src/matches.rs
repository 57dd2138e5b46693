//! Match discovery for the command line.
//!
//! The overlay core takes match offsets as input; this is the producer that
//! feeds it when running outside an editor.

use seekmark_overlay::Query;
use seekmark_primitives::CharIdx;

/// Char offsets of every non-overlapping match of `query` in `text`, in order.
///
/// Empty regex matches are skipped since they would paint nothing.
pub fn find_matches(text: &str, query: &Query) -> Vec<CharIdx> {
	let byte_starts: Vec<usize> = match query {
		Query::Literal(literal) => text.match_indices(literal.as_str()).map(|(at, _)| at).collect(),
		Query::Regex(regex) => regex
			.find_iter(text)
			.filter(|m| !m.is_empty())
			.map(|m| m.start())
			.collect(),
	};
	to_char_offsets(text, &byte_starts)
}

/// Converts ascending byte offsets on char boundaries to char offsets.
fn to_char_offsets(text: &str, byte_starts: &[usize]) -> Vec<CharIdx> {
	let mut out = Vec::with_capacity(byte_starts.len());
	let mut chars = 0;
	let mut last = 0;
	for &at in byte_starts {
		chars += text[last..at].chars().count();
		last = at;
		out.push(chars);
	}
	out
}
