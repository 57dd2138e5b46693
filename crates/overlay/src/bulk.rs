//! Bulk-update scoping.
//!
//! Installing thousands of overlays one by one makes the host re-layout after
//! each change. Past [`BULK_MODE_THRESHOLD`] the reconcile runs inside a
//! [`BulkUpdate`], which suspends update notifications and always resumes
//! them when the scope ends.

use std::ops::{Deref, DerefMut};

use crate::error::HighlightError;
use crate::host::{Surface, SurfaceId};

/// Combined old + new overlay count above which a reconcile is batched.
pub const BULK_MODE_THRESHOLD: usize = 1000;

/// Returns true when replacing `previous` overlays with `new` ones should run
/// with update notifications suspended.
pub fn should_batch(previous: usize, new: usize) -> bool {
	previous.saturating_add(new) > BULK_MODE_THRESHOLD
}

/// RAII guard holding a surface's update notifications suspended.
///
/// Resume happens exactly once: either through [`Self::finish`], which
/// reports a resume failure, or on drop (error or panic unwind), which logs
/// it. Resuming twice is never attempted.
pub struct BulkUpdate<'a> {
	surface: &'a mut dyn Surface,
	id: SurfaceId,
	released: bool,
}

impl<'a> BulkUpdate<'a> {
	/// Suspends updates on `surface`.
	pub fn begin(surface: &'a mut dyn Surface) -> Result<Self, HighlightError> {
		let id = surface.id();
		surface
			.suspend_updates()
			.map_err(|source| HighlightError::BulkSuspend { surface: id, source })?;
		tracing::trace!(surface = %id, "Suspended surface updates");
		Ok(Self {
			surface,
			id,
			released: false,
		})
	}

	/// Resumes updates and reports whether that succeeded.
	pub fn finish(mut self) -> Result<(), HighlightError> {
		self.released = true;
		let id = self.id;
		self.surface
			.resume_updates()
			.map_err(|source| HighlightError::BulkResume { surface: id, source })
	}
}

impl<'a> Deref for BulkUpdate<'a> {
	type Target = dyn Surface + 'a;

	fn deref(&self) -> &Self::Target {
		&*self.surface
	}
}

impl<'a> DerefMut for BulkUpdate<'a> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut *self.surface
	}
}

impl Drop for BulkUpdate<'_> {
	fn drop(&mut self) {
		if self.released {
			return;
		}
		self.released = true;
		if let Err(e) = self.surface.resume_updates() {
			tracing::error!(surface = %self.id, error = %e, "Failed to resume surface updates");
		}
	}
}

/// Result of a [`scoped`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoped<R> {
	pub value: R,
	/// Whether `f` ran with updates suspended.
	pub batched: bool,
	/// Suspend or resume failure. `f` still ran to completion.
	pub degraded: Option<HighlightError>,
}

/// Runs `f` against `surface`, inside a [`BulkUpdate`] when `batch` is set.
///
/// A surface that refuses to suspend is reconciled unbatched instead, and a
/// failed resume is reported once without retrying; both come back in
/// [`Scoped::degraded`]. Only an error from `f` itself is returned as `Err`,
/// and it takes precedence over a resume failure, which the guard logs.
pub fn scoped<R>(
	surface: &mut dyn Surface,
	batch: bool,
	f: impl FnOnce(&mut dyn Surface) -> Result<R, HighlightError>,
) -> Result<Scoped<R>, HighlightError> {
	if !batch {
		return Ok(Scoped {
			value: f(surface)?,
			batched: false,
			degraded: None,
		});
	}

	let error = match BulkUpdate::begin(&mut *surface) {
		Ok(mut guard) => {
			let value = f(&mut *guard)?;
			return Ok(Scoped {
				value,
				batched: true,
				degraded: guard.finish().err(),
			});
		}
		Err(error) => error,
	};
	tracing::debug!(surface = %surface.id(), %error, "Reconciling without bulk mode");
	Ok(Scoped {
		value: f(surface)?,
		batched: false,
		degraded: Some(error),
	})
}
