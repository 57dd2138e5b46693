//! A complete in-memory host.
//!
//! Backs the unit and integration tests and the terminal front end: rope
//! surfaces on a monospace grid, a canvas that records draw calls, and a
//! workspace that owns surfaces and notifications.

mod canvas;
mod surface;
mod workspace;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use surface::TextSurface;
pub use workspace::{Notification, Workspace};

use crate::host::HighlightSettings;
use crate::strategy::Canvas;

/// Runs one paint cycle over `surface`'s overlays.
///
/// Overlays paint in layer order, then by span, matching how a host stacks
/// its markup.
pub fn paint_surface(surface: &TextSurface, canvas: &mut dyn Canvas, settings: &dyn HighlightSettings) {
	let mut overlays: Vec<_> = surface.overlays().map(|(_, spec)| *spec).collect();
	overlays.sort_by_key(|spec| (spec.layer, spec.span));
	for spec in overlays {
		spec.strategy.paint(surface, spec.span, canvas, settings);
	}
}
