//! Overlay reconciliation.
//!
//! Each [`Highlighter::render`] fully replaces the overlays of every surface
//! in the match set rather than patching them: match sets change wholesale on
//! every keystroke, and the dominant cost is overlay creation, which bulk
//! mode amortizes.

use indexmap::IndexMap;
use seekmark_primitives::{CharIdx, Span};

use crate::bulk::{scoped, should_batch};
use crate::error::HighlightError;
use crate::host::{HIGHLIGHT_LAYER, HighlightContext, NotificationId, OverlaySpec, Surface, SurfaceId};
use crate::notify::summary_text;
use crate::query::{InteractionMode, Query};
use crate::select::select;
use crate::store::HighlightStore;
use crate::strategy::RenderStrategy;

/// Match offsets per surface, in discovery order.
pub type MatchSet = IndexMap<SurfaceId, Vec<CharIdx>>;

/// Session-wide highlight state.
///
/// Every surface tracked here has its overlays attached to its markup layer;
/// at most one notification is visible.
#[derive(Debug, Default)]
pub struct RenderState {
	highlights: HighlightStore,
	notification: Option<NotificationId>,
}

impl RenderState {
	pub fn highlights(&self) -> &HighlightStore {
		&self.highlights
	}

	/// The notification currently shown, if any.
	pub fn notification(&self) -> Option<NotificationId> {
		self.notification
	}
}

/// Outcome of one [`Highlighter::render`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
	/// Surfaces whose overlays were replaced.
	pub surfaces_reconciled: usize,
	pub overlays_added: usize,
	pub overlays_removed: usize,
	/// Surfaces reconciled with updates suspended.
	pub surfaces_batched: usize,
	/// Surfaces dropped because they had no matches this time.
	pub surfaces_pruned: usize,
	/// Offsets past the end of their surface's text.
	pub offsets_clamped: usize,
	/// Per-surface failures; other surfaces were still reconciled. A surface
	/// whose suspend or resume failed also counts as reconciled.
	pub failures: Vec<(SurfaceId, HighlightError)>,
}

impl RenderReport {
	pub fn is_clean(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Owns the [`RenderState`] of one session and reconciles it on demand.
#[derive(Debug, Default)]
pub struct Highlighter {
	state: RenderState,
}

impl Highlighter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &RenderState {
		&self.state
	}

	/// Replaces all highlights with ones for `matches`.
	///
	/// Surfaces absent from `matches` lose their overlays. A surface that
	/// fails is reported in the returned [`RenderReport`] and does not stop
	/// the others.
	pub fn render(
		&mut self,
		ctx: &mut dyn HighlightContext,
		matches: &MatchSet,
		query: &Query,
		mode: InteractionMode,
	) -> RenderReport {
		let _span = tracing::debug_span!(
			"highlight_render",
			surfaces = matches.len(),
			query = query.raw_text(),
			?mode
		)
		.entered();

		let strategy = select(query, mode);
		let mut report = RenderReport::default();

		for (&id, offsets) in matches {
			match self.reconcile_surface(ctx, id, offsets, query, strategy, &mut report) {
				Ok(()) => report.surfaces_reconciled += 1,
				Err(e) => {
					tracing::warn!(surface = %id, error = %e, "Failed to reconcile surface highlights");
					if matches!(e, HighlightError::MissingSurface(_)) {
						self.state.highlights.forget(id);
					}
					report.failures.push((id, e));
				}
			}
		}

		report.surfaces_pruned = self
			.state
			.highlights
			.prune(ctx, |id| matches.contains_key(&id));
		if report.surfaces_pruned > 0 {
			tracing::debug!(pruned = report.surfaces_pruned, "Pruned surfaces without matches");
		}

		self.refresh_notification(ctx, matches, mode);
		report
	}

	/// Removes every overlay and hides the notification.
	///
	/// Safe to call repeatedly; with nothing highlighted it does nothing.
	pub fn reset(&mut self, ctx: &mut dyn HighlightContext) {
		let cleared = self.state.highlights.clear(ctx);
		if let Some(id) = self.state.notification.take() {
			ctx.hide_notification(id);
		}
		if cleared > 0 {
			tracing::debug!(surfaces = cleared, "Cleared all highlights");
		}
	}

	fn reconcile_surface(
		&mut self,
		ctx: &mut dyn HighlightContext,
		id: SurfaceId,
		offsets: &[CharIdx],
		query: &Query,
		strategy: RenderStrategy,
		report: &mut RenderReport,
	) -> Result<(), HighlightError> {
		let surface = match ctx.surface_mut(id) {
			Some(surface) if !surface.is_disposed() => surface,
			_ => return Err(HighlightError::MissingSurface(id)),
		};

		let previous = self.state.highlights.lookup(id).len();
		let batch = should_batch(previous, offsets.len());
		tracing::trace!(surface = %id, previous, new = offsets.len(), batch, "Reconciling surface");

		let (specs, clamped) = build_specs(&*surface, offsets, query, strategy);
		let store = &mut self.state.highlights;
		let outcome = scoped(surface, batch, |surface| Ok(store.replace(surface, specs).len()))?;

		report.overlays_added += offsets.len();
		report.overlays_removed += outcome.value;
		report.offsets_clamped += clamped;
		if outcome.batched {
			report.surfaces_batched += 1;
		}
		if let Some(error) = outcome.degraded {
			tracing::warn!(surface = %id, %error, "Surface reconciled with a bulk-mode failure");
			report.failures.push((id, error));
		}
		Ok(())
	}

	fn refresh_notification(&mut self, ctx: &mut dyn HighlightContext, matches: &MatchSet, mode: InteractionMode) {
		if let Some(previous) = self.state.notification.take() {
			ctx.hide_notification(previous);
		}

		let settings = ctx.settings();
		if !settings.show_notification() {
			return;
		}
		let accent = settings.mode_accent(mode);

		let surfaces: Vec<SurfaceId> = matches
			.iter()
			.filter(|(_, offsets)| !offsets.is_empty())
			.map(|(id, _)| *id)
			.collect();
		let total: usize = matches.values().map(Vec::len).sum();
		if total == 0 {
			return;
		}

		let text = summary_text(total, surfaces.len());
		self.state.notification = Some(ctx.show_notification(&surfaces, &text, accent));
	}
}

/// Builds one overlay spec per offset. Offsets past the end of the text are
/// clamped to it; returns the specs and the number of clamped offsets.
fn build_specs(
	surface: &dyn Surface,
	offsets: &[CharIdx],
	query: &Query,
	strategy: RenderStrategy,
) -> (Vec<OverlaySpec>, usize) {
	let text = surface.text();
	let len = text.len_chars();
	let measure = query.measure(text);
	let mut clamped = 0;

	let specs = offsets
		.iter()
		.map(|&offset| {
			if offset > len {
				clamped += 1;
				let error = HighlightError::InvalidOffset {
					surface: surface.id(),
					offset,
					len,
				};
				tracing::warn!(%error, "Clamping match offset");
			}
			let start = offset.min(len);
			OverlaySpec {
				span: Span::at(start, measure.len_at(start)).clamp_to(len),
				layer: HIGHLIGHT_LAYER,
				strategy,
			}
		})
		.collect();
	(specs, clamped)
}

#[cfg(test)]
mod tests;
