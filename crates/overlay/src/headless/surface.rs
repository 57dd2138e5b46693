use std::collections::BTreeMap;

use ropey::{Rope, RopeSlice};
use seekmark_primitives::{CharIdx, Point};
use unicode_width::UnicodeWidthChar;

use crate::error::SurfaceError;
use crate::host::{OverlayId, OverlaySpec, Surface, SurfaceId};

/// A monospace text surface backed by a rope.
///
/// Layout is a fixed cell grid with optional soft wrap and a scroll offset.
/// Overlay changes made while updates are not suspended each count as one
/// layout invalidation; changes made while suspended are flushed as a single
/// invalidation on resume.
#[derive(Debug)]
pub struct TextSurface {
	id: SurfaceId,
	text: Rope,
	cell_width: u32,
	line_height: u32,
	wrap: Option<usize>,
	scroll: Point,
	overlays: BTreeMap<OverlayId, OverlaySpec>,
	next_overlay: u64,
	suspend_depth: u32,
	pending_changes: usize,
	layout_invalidations: usize,
	suspend_calls: usize,
	resume_calls: usize,
	fail_suspend: Option<SurfaceError>,
	fail_resume: Option<SurfaceError>,
	disposed: bool,
}

impl TextSurface {
	pub const DEFAULT_CELL_WIDTH: u32 = 8;
	pub const DEFAULT_LINE_HEIGHT: u32 = 16;

	pub fn new(id: SurfaceId, text: &str) -> Self {
		Self {
			id,
			text: Rope::from(text),
			cell_width: Self::DEFAULT_CELL_WIDTH,
			line_height: Self::DEFAULT_LINE_HEIGHT,
			wrap: None,
			scroll: Point::default(),
			overlays: BTreeMap::new(),
			next_overlay: 0,
			suspend_depth: 0,
			pending_changes: 0,
			layout_invalidations: 0,
			suspend_calls: 0,
			resume_calls: 0,
			fail_suspend: None,
			fail_resume: None,
			disposed: false,
		}
	}

	pub fn with_cell(mut self, cell_width: u32, line_height: u32) -> Self {
		self.cell_width = cell_width;
		self.line_height = line_height;
		self
	}

	/// Soft-wraps visual lines at `columns` cells.
	pub fn with_wrap(mut self, columns: usize) -> Self {
		self.wrap = (columns > 0).then_some(columns);
		self
	}

	pub fn set_scroll(&mut self, scroll: Point) {
		self.scroll = scroll;
	}

	pub fn set_text(&mut self, text: &str) {
		self.text = Rope::from(text);
	}

	pub fn cell_width(&self) -> u32 {
		self.cell_width
	}

	/// Live overlays in id order.
	pub fn overlays(&self) -> impl Iterator<Item = (OverlayId, &OverlaySpec)> {
		self.overlays.iter().map(|(id, spec)| (*id, spec))
	}

	pub fn overlay(&self, id: OverlayId) -> Option<&OverlaySpec> {
		self.overlays.get(&id)
	}

	pub fn overlay_count(&self) -> usize {
		self.overlays.len()
	}

	pub fn is_suspended(&self) -> bool {
		self.suspend_depth > 0
	}

	pub fn layout_invalidations(&self) -> usize {
		self.layout_invalidations
	}

	pub fn suspend_calls(&self) -> usize {
		self.suspend_calls
	}

	pub fn resume_calls(&self) -> usize {
		self.resume_calls
	}

	/// Makes every following suspend fail with `error`.
	pub fn fail_suspend(&mut self, error: SurfaceError) {
		self.fail_suspend = Some(error);
	}

	/// Makes every following resume fail with `error`.
	pub fn fail_resume(&mut self, error: SurfaceError) {
		self.fail_resume = Some(error);
	}

	/// Closes the surface; its markup layer is discarded with it.
	pub fn dispose(&mut self) {
		self.disposed = true;
		self.overlays.clear();
	}

	fn cells(ch: char) -> usize {
		match ch {
			'\n' | '\r' => 0,
			'\t' => 1,
			c => c.width().unwrap_or(1),
		}
	}

	fn visual_rows(&self, line: RopeSlice) -> usize {
		match self.wrap {
			Some(wrap) => line.chars().map(Self::cells).sum::<usize>() / wrap + 1,
			None => 1,
		}
	}

	fn record_change(&mut self) {
		if self.is_suspended() {
			self.pending_changes += 1;
		} else {
			self.layout_invalidations += 1;
		}
	}
}

impl Surface for TextSurface {
	fn id(&self) -> SurfaceId {
		self.id
	}

	fn text(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	fn line_height(&self) -> u32 {
		self.line_height
	}

	fn layout_position(&self, offset: CharIdx) -> Point {
		let text = self.text.slice(..);
		let offset = offset.min(text.len_chars());
		let line = text.char_to_line(offset);
		let line_start = text.line_to_char(line);

		let mut row: usize = (0..line).map(|l| self.visual_rows(text.line(l))).sum();
		let mut col: usize = text.slice(line_start..offset).chars().map(Self::cells).sum();
		if let Some(wrap) = self.wrap {
			row += col / wrap;
			col %= wrap;
		}

		let x = col as i64 * i64::from(self.cell_width) - i64::from(self.scroll.x);
		let y = row as i64 * i64::from(self.line_height) - i64::from(self.scroll.y);
		Point::new(
			x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
			y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
		)
	}

	fn glyph_width(&self, ch: char) -> u32 {
		Self::cells(ch).max(1) as u32 * self.cell_width
	}

	fn is_disposed(&self) -> bool {
		self.disposed
	}

	fn add_overlay(&mut self, spec: OverlaySpec) -> OverlayId {
		let id = OverlayId(self.next_overlay);
		self.next_overlay += 1;
		self.overlays.insert(id, spec);
		self.record_change();
		id
	}

	fn remove_overlay(&mut self, id: OverlayId) -> bool {
		let removed = self.overlays.remove(&id).is_some();
		if removed {
			self.record_change();
		}
		removed
	}

	fn suspend_updates(&mut self) -> Result<(), SurfaceError> {
		self.suspend_calls += 1;
		if let Some(e) = &self.fail_suspend {
			return Err(e.clone());
		}
		if self.disposed {
			return Err(SurfaceError::Disposed);
		}
		self.suspend_depth += 1;
		Ok(())
	}

	fn resume_updates(&mut self) -> Result<(), SurfaceError> {
		self.resume_calls += 1;
		if let Some(e) = &self.fail_resume {
			return Err(e.clone());
		}
		if self.suspend_depth == 0 {
			return Err(SurfaceError::Host("resume without matching suspend".into()));
		}
		self.suspend_depth -= 1;
		if self.suspend_depth == 0 && self.pending_changes > 0 {
			self.pending_changes = 0;
			self.layout_invalidations += 1;
		}
		Ok(())
	}
}
