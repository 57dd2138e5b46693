//! Error types for highlight reconciliation.

use seekmark_primitives::CharIdx;

use crate::host::SurfaceId;

/// Failure reported by a host surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
	/// The surface was closed by the host.
	#[error("surface is disposed")]
	Disposed,
	/// Any other host-side failure.
	#[error("host error: {0}")]
	Host(String),
}

/// Errors produced while reconciling highlights.
///
/// These are reported per surface; one failing surface never aborts the
/// reconciliation of the others.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
	/// A match offset falls outside the surface's text.
	#[error("offset {offset} is outside {surface} (length {len})")]
	InvalidOffset {
		surface: SurfaceId,
		offset: CharIdx,
		len: usize,
	},

	/// The surface refused to suspend update notifications.
	#[error("failed to suspend updates on {surface}: {source}")]
	BulkSuspend {
		surface: SurfaceId,
		#[source]
		source: SurfaceError,
	},

	/// Update notifications could not be resumed after a bulk reconcile.
	///
	/// Resume is attempted exactly once; this error is never retried.
	#[error("failed to resume updates on {surface}: {source}")]
	BulkResume {
		surface: SurfaceId,
		#[source]
		source: SurfaceError,
	},

	/// The host no longer knows the surface.
	#[error("{0} is no longer available")]
	MissingSurface(SurfaceId),
}

/// Errors building a [`crate::Query`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
	#[error("query is empty")]
	Empty,
	#[error("invalid pattern: {0}")]
	Regex(#[from] regex::Error),
}
