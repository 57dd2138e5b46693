//! Contracts between the highlight engine and the host editor.
//!
//! The host owns surfaces, their markup layers, and the paint cycle. The
//! engine only reaches them through these traits.

use std::fmt;

use ropey::RopeSlice;
use seekmark_primitives::{CharIdx, Color, Point, Span};

use crate::error::SurfaceError;
use crate::query::InteractionMode;
use crate::strategy::RenderStrategy;

/// Markup layer used for search highlights; above selection and syntax layers.
pub const HIGHLIGHT_LAYER: u16 = 6_000;

/// Stable identity of a host surface for the lifetime of a render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "surface#{}", self.0)
	}
}

/// Identity of an overlay within one surface's markup layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Identity of a visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

/// What the engine asks the host to attach to a surface.
///
/// The host keeps the spec and, on each paint, hands `span` and the surface
/// back to `strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySpec {
	pub span: Span,
	pub layer: u16,
	pub strategy: RenderStrategy,
}

/// A text viewport with its own buffer snapshot and markup layer.
pub trait Surface {
	fn id(&self) -> SurfaceId;

	/// Immutable snapshot of the surface's text.
	fn text(&self) -> RopeSlice<'_>;

	/// Height of one visual line in device pixels.
	fn line_height(&self) -> u32;

	/// Host layout: top-left pixel of the character at `offset`.
	///
	/// `offset` is always within `[0, text().len_chars()]`; `len_chars()`
	/// maps to the position just after the last character.
	fn layout_position(&self, offset: CharIdx) -> Point;

	/// Advance width of `ch` in device pixels.
	fn glyph_width(&self, ch: char) -> u32;

	/// Returns true once the host has closed the surface.
	fn is_disposed(&self) -> bool {
		false
	}

	fn add_overlay(&mut self, spec: OverlaySpec) -> OverlayId;

	/// Removes an overlay, returning false if it was not attached.
	fn remove_overlay(&mut self, id: OverlayId) -> bool;

	/// Stops per-change layout notifications until [`Self::resume_updates`].
	fn suspend_updates(&mut self) -> Result<(), SurfaceError>;

	fn resume_updates(&mut self) -> Result<(), SurfaceError>;
}

/// Colors and flags read from the host's configuration.
///
/// Paint routines query this on every paint so theme changes apply without
/// reconciling again.
pub trait HighlightSettings {
	fn highlight_fill(&self) -> Color;
	fn tag_outline(&self) -> Color;
	fn target_outline(&self) -> Color;
	/// Accent color shown alongside the match count for `mode`.
	fn mode_accent(&self, mode: InteractionMode) -> Color;
	fn show_notification(&self) -> bool;
}

/// Access to the host during reconciliation.
pub trait HighlightContext {
	/// Returns `None` when the surface has been closed.
	fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut dyn Surface>;

	fn settings(&self) -> &dyn HighlightSettings;

	fn show_notification(&mut self, surfaces: &[SurfaceId], text: &str, accent: Color) -> NotificationId;

	fn hide_notification(&mut self, id: NotificationId);
}
