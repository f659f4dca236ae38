//! Shared value types for the backdrop.

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Width in px.
	pub width: f64,
	/// Height in px.
	pub height: f64,
}

impl Viewport {
	/// Viewport of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Center point, used as the anchor for the ambient decorators.
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Surface area in px².
	pub fn area(&self) -> f64 {
		self.width * self.height
	}
}
