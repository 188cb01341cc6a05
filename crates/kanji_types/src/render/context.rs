//! Drawing-context target, for renderers that draw points with a current color.

use super::{Color, PixelSink, SubPixel};

/// Renderer that draws single points in its current draw color.
pub trait DrawContext {
	/// Returns the logical width and height in pixels.
	fn logical_size(&self) -> (i32, i32);

	/// Returns the current draw color.
	fn draw_color(&self) -> Color;

	/// Sets the current draw color.
	fn set_draw_color(&mut self, color: Color);

	/// Draws a point at a sub-pixel position.
	fn draw_point(&mut self, x: f32, y: f32);
}

/// Pixel sink drawing through a [`DrawContext`].
///
/// Each pixel is drawn in the requested color at `(x + sub.x, y + sub.y)`.
/// The context's draw color is restored after every point.
#[derive(Debug)]
pub struct ContextSink<'a, C: ?Sized> {
	context: &'a mut C,
}

impl<'a, C: DrawContext + ?Sized> ContextSink<'a, C> {
	/// Wraps a drawing context.
	pub fn new(context: &'a mut C) -> Self {
		Self {
			context,
		}
	}
}

impl<C: DrawContext + ?Sized> PixelSink for ContextSink<'_, C> {
	fn bounds(&self) -> (i32, i32) {
		self.context.logical_size()
	}

	fn put_pixel(&mut self, x: i32, y: i32, sub: SubPixel, color: Color) {
		let previous = self.context.draw_color();
		self.context.set_draw_color(color);
		self.context.draw_point(sub.x + x as f32, sub.y + y as f32);
		self.context.set_draw_color(previous);
	}
}
