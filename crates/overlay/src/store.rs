//! Per-surface overlay bookkeeping.
//!
//! Every surface key in the store has its overlays attached to that surface's
//! markup layer. Entries leave the store only together with their overlays.

use rustc_hash::FxHashMap;
use seekmark_primitives::Span;

use crate::host::{HighlightContext, OverlayId, OverlaySpec, Surface, SurfaceId};
use crate::strategy::RenderStrategy;

/// One installed overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayHandle {
	pub id: OverlayId,
	pub span: Span,
	pub strategy: RenderStrategy,
}

/// Current overlays of every highlighted surface.
#[derive(Debug, Default)]
pub struct HighlightStore {
	surfaces: FxHashMap<SurfaceId, Vec<OverlayHandle>>,
}

impl HighlightStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Overlays currently installed on `surface`; empty if untracked.
	pub fn lookup(&self, surface: SurfaceId) -> &[OverlayHandle] {
		self.surfaces.get(&surface).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn is_tracked(&self, surface: SurfaceId) -> bool {
		self.surfaces.contains_key(&surface)
	}

	pub fn overlay_count(&self) -> usize {
		self.surfaces.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.surfaces.is_empty()
	}

	/// Swaps `surface`'s overlays for ones built from `specs`.
	///
	/// Old overlays are detached before the new ones are attached, all before
	/// the host paints again. Returns the detached handles.
	pub fn replace(&mut self, surface: &mut dyn Surface, specs: Vec<OverlaySpec>) -> Vec<OverlayHandle> {
		let id = surface.id();
		let old = self.surfaces.remove(&id).unwrap_or_default();
		for handle in &old {
			if !surface.remove_overlay(handle.id) {
				tracing::trace!(surface = %id, overlay = ?handle.id, "Overlay was already detached");
			}
		}

		let handles: Vec<OverlayHandle> = specs
			.into_iter()
			.map(|spec| OverlayHandle {
				id: surface.add_overlay(spec),
				span: spec.span,
				strategy: spec.strategy,
			})
			.collect();
		self.surfaces.insert(id, handles);
		old
	}

	/// Drops the entry for `surface` without touching its markup layer.
	///
	/// Used once the host has discarded the surface along with its overlays.
	pub fn forget(&mut self, surface: SurfaceId) -> Vec<OverlayHandle> {
		self.surfaces.remove(&surface).unwrap_or_default()
	}

	/// Removes every tracked surface for which `keep` is false, detaching its
	/// overlays. Closed or disposed surfaces are dropped silently.
	///
	/// Returns the number of surfaces pruned.
	pub fn prune(&mut self, ctx: &mut dyn HighlightContext, mut keep: impl FnMut(SurfaceId) -> bool) -> usize {
		let stale: Vec<SurfaceId> = self.surfaces.keys().copied().filter(|id| !keep(*id)).collect();
		for id in &stale {
			let handles = self.forget(*id);
			match ctx.surface_mut(*id) {
				Some(surface) if !surface.is_disposed() => {
					for handle in &handles {
						surface.remove_overlay(handle.id);
					}
				}
				_ => {
					tracing::debug!(surface = %id, "Pruned surface is gone; dropping its overlays");
				}
			}
		}
		stale.len()
	}

	/// Removes every overlay from every surface.
	pub fn clear(&mut self, ctx: &mut dyn HighlightContext) -> usize {
		self.prune(ctx, |_| false)
	}
}
