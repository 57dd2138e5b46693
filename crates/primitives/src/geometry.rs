//! Pixel-space points and rectangles.
//!
//! Coordinates are signed because scrolled content can sit above or left of
//! the viewport origin; extents are unsigned.

/// A point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// An axis-aligned rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
	pub x: i32,
	pub y: i32,
	pub width: u32,
	pub height: u32,
}

impl Rect {
	pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Builds a rectangle from its top-left corner.
	pub const fn at(origin: Point, width: u32, height: u32) -> Self {
		Self::new(origin.x, origin.y, width, height)
	}

	pub const fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	pub const fn left(&self) -> i32 {
		self.x
	}

	/// Exclusive right edge.
	pub fn right(&self) -> i32 {
		self.x.saturating_add_unsigned(self.width)
	}

	pub const fn top(&self) -> i32 {
		self.y
	}

	/// Exclusive bottom edge.
	pub fn bottom(&self) -> i32 {
		self.y.saturating_add_unsigned(self.height)
	}

	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns true if `p` is inside, counting the origin but not the far edges.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
	}

	/// Moves the left edge by `left` pixels outward and the right edge by
	/// `right` pixels outward. Negative values shrink.
	pub fn widen(&self, left: i32, right: i32) -> Self {
		let x = self.x.saturating_sub(left);
		let width = (i64::from(self.width) + i64::from(left) + i64::from(right)).clamp(0, i64::from(u32::MAX));
		Self {
			x,
			y: self.y,
			width: width as u32,
			height: self.height,
		}
	}
}
