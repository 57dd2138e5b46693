use crate::query::{InteractionMode, Query, QueryKind};
use crate::strategy::RenderStrategy;

/// Chooses the paint routine for every overlay of one reconciliation.
///
/// Regex queries always get [`RenderStrategy::RegexSingle`], even in target
/// mode: regex spans are not word-bounded, so a word outline would mislead.
pub fn select(query: &Query, mode: InteractionMode) -> RenderStrategy {
	match (query.kind(), mode) {
		(QueryKind::RegularExpression, _) => RenderStrategy::RegexSingle,
		(QueryKind::Literal, InteractionMode::Target) => RenderStrategy::FilledWithOutline,
		(QueryKind::Literal, _) => RenderStrategy::Filled,
	}
}
