//! Search-match overlays for editor surfaces.
//!
//! A [`Highlighter`] owns the [`RenderState`] for one session. Every query
//! change calls [`Highlighter::render`] with the fresh match set; the engine
//! replaces each surface's overlays, prunes surfaces that no longer have
//! matches, and refreshes the match-count notification. Overlays only carry
//! the chosen [`RenderStrategy`]; the host's paint cycle later calls
//! [`RenderStrategy::paint`] to draw them.

/// Scoped suspension of surface update notifications for large reconciles.
pub mod bulk;
/// Highlight colors and flags loaded from TOML.
pub mod config;
/// Text offset to pixel mapping.
pub mod coords;
/// The reconciliation engine and its public entry points.
pub mod engine;
/// Error types.
pub mod error;
/// In-memory host used by tests and the terminal front end.
pub mod headless;
/// Collaborator traits implemented by the host editor.
pub mod host;
/// Match-count notification text.
pub mod notify;
/// Search queries and interaction modes.
pub mod query;
/// Strategy selection by query kind and mode.
pub mod select;
/// Paint routines for overlays.
pub mod strategy;
/// Per-surface overlay bookkeeping.
pub mod store;

pub use bulk::{BULK_MODE_THRESHOLD, BulkUpdate, Scoped, scoped, should_batch};
pub use config::{ConfigError, HighlightConfig, ModeColors};
pub use engine::{Highlighter, MatchSet, RenderReport, RenderState};
pub use error::{HighlightError, QueryError, SurfaceError};
pub use host::{
	HIGHLIGHT_LAYER, HighlightContext, HighlightSettings, NotificationId, OverlayId, OverlaySpec,
	Surface, SurfaceId,
};
pub use query::{InteractionMode, MatchMeasure, Query, QueryKind};
pub use select::select;
pub use store::{HighlightStore, OverlayHandle};
pub use strategy::{Canvas, RenderStrategy};
