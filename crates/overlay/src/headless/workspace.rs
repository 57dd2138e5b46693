use indexmap::IndexMap;
use seekmark_primitives::Color;

use super::TextSurface;
use crate::config::HighlightConfig;
use crate::host::{HighlightContext, HighlightSettings, NotificationId, Surface, SurfaceId};

/// A notification the workspace was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub id: NotificationId,
	pub surfaces: Vec<SurfaceId>,
	pub text: String,
	pub accent: Color,
	pub hidden: bool,
}

/// A set of open surfaces plus the notification area.
#[derive(Debug)]
pub struct Workspace {
	surfaces: IndexMap<SurfaceId, TextSurface>,
	next_surface: u64,
	settings: HighlightConfig,
	notifications: Vec<Notification>,
}

impl Workspace {
	pub fn new(settings: HighlightConfig) -> Self {
		Self {
			surfaces: IndexMap::new(),
			next_surface: 1,
			settings,
			notifications: Vec::new(),
		}
	}

	/// Opens a surface with default cell metrics.
	pub fn open(&mut self, text: &str) -> SurfaceId {
		self.open_with(|id| TextSurface::new(id, text))
	}

	/// Opens a surface built by `build` from the allocated id.
	pub fn open_with(&mut self, build: impl FnOnce(SurfaceId) -> TextSurface) -> SurfaceId {
		let id = SurfaceId(self.next_surface);
		self.next_surface += 1;
		self.surfaces.insert(id, build(id));
		id
	}

	/// Drops a surface from the workspace entirely.
	pub fn close(&mut self, id: SurfaceId) -> Option<TextSurface> {
		self.surfaces.shift_remove(&id)
	}

	pub fn get(&self, id: SurfaceId) -> Option<&TextSurface> {
		self.surfaces.get(&id)
	}

	pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut TextSurface> {
		self.surfaces.get_mut(&id)
	}

	/// Live overlay count of a surface; 0 for unknown surfaces.
	pub fn overlay_count(&self, id: SurfaceId) -> usize {
		self.get(id).map_or(0, TextSurface::overlay_count)
	}

	pub fn config(&self) -> &HighlightConfig {
		&self.settings
	}

	pub fn config_mut(&mut self) -> &mut HighlightConfig {
		&mut self.settings
	}

	/// Every notification shown so far, oldest first.
	pub fn notifications(&self) -> &[Notification] {
		&self.notifications
	}

	pub fn visible_notifications(&self) -> impl Iterator<Item = &Notification> {
		self.notifications.iter().filter(|n| !n.hidden)
	}
}

impl Default for Workspace {
	fn default() -> Self {
		Self::new(HighlightConfig::default())
	}
}

impl HighlightContext for Workspace {
	fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut dyn Surface> {
		self.surfaces.get_mut(&id).map(|s| s as &mut dyn Surface)
	}

	fn settings(&self) -> &dyn HighlightSettings {
		&self.settings
	}

	fn show_notification(&mut self, surfaces: &[SurfaceId], text: &str, accent: Color) -> NotificationId {
		let id = NotificationId(self.notifications.len() as u64);
		self.notifications.push(Notification {
			id,
			surfaces: surfaces.to_vec(),
			text: text.to_string(),
			accent,
			hidden: false,
		});
		id
	}

	fn hide_notification(&mut self, id: NotificationId) {
		if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
			n.hidden = true;
		}
	}
}
