//! Text layout and glyph blitting.
//!
//! The blit engine walks a byte string, resolves each character to a glyph
//! and reports every set pixel to a [`PixelSink`]. Two sinks are provided:
//! [`Surface`], an owned pixel buffer, and [`ContextSink`], which draws points
//! through a [`DrawContext`].

use serde::{Deserialize, Serialize};

pub mod context;
pub mod layout;
pub mod surface;
pub mod units;

pub use context::{ContextSink, DrawContext};
pub use layout::{create_surface, create_surface_vertical, put_text, put_text_vertical};
pub use surface::{PixelFormat, Surface};
pub use units::{Unit, Units};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
	/// Red
	pub r: u8,
	/// Green
	pub g: u8,
	/// Blue
	pub b: u8,
	/// Alpha
	pub a: u8,
}

impl Color {
	/// Opaque black
	pub const BLACK: Self = Self::rgb(0, 0, 0);

	/// Opaque white
	pub const WHITE: Self = Self::rgb(255, 255, 255);

	/// Creates a new color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Returns the color with inverted RGB channels and the same alpha.
	pub const fn complement(self) -> Self {
		Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
	}
}

/// Integer pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	/// Column
	pub x: i32,
	/// Row
	pub y: i32,
}

impl Point {
	/// The origin
	pub const ORIGIN: Self = Self::new(0, 0);

	/// Creates a new point.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// Sub-pixel offset passed through to every pixel write
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubPixel {
	/// Horizontal offset
	pub x: f32,
	/// Vertical offset
	pub y: f32,
}

impl SubPixel {
	/// Creates a new offset.
	pub const fn new(x: f32, y: f32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// Destination of glyph pixels.
pub trait PixelSink {
	/// Returns the drawable width and height in pixels.
	fn bounds(&self) -> (i32, i32);

	/// Sets one pixel. The blit engine only calls this inside [`PixelSink::bounds`].
	fn put_pixel(&mut self, x: i32, y: i32, sub: SubPixel, color: Color);
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
	fn bounds(&self) -> (i32, i32) {
		(**self).bounds()
	}

	fn put_pixel(&mut self, x: i32, y: i32, sub: SubPixel, color: Color) {
		(**self).put_pixel(x, y, sub, color);
	}
}

/// Pixel sink forwarding every pixel to a closure.
#[derive(Debug, Clone)]
pub struct FnSink<F> {
	width: i32,
	height: i32,
	put: F,
}

impl<F> FnSink<F>
where
	F: FnMut(i32, i32, SubPixel, Color),
{
	/// Creates a sink with the given bounds.
	pub fn new(width: i32, height: i32, put: F) -> Self {
		Self {
			width,
			height,
			put,
		}
	}
}

impl<F> PixelSink for FnSink<F>
where
	F: FnMut(i32, i32, SubPixel, Color),
{
	fn bounds(&self) -> (i32, i32) {
		(self.width, self.height)
	}

	fn put_pixel(&mut self, x: i32, y: i32, sub: SubPixel, color: Color) {
		(self.put)(x, y, sub, color);
	}
}

/// Selects the double-byte glyphs that vertical layout moves to the upper right
/// of their cell, the way commas and periods sit in vertical Japanese text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationNudge {
	/// `、。，．` only (JIS `0x2122..=0x2125`)
	#[default]
	Range,

	/// Every glyph of JIS row 1. Matches fonts and layouts tuned against
	/// older renderers that tested `low >= 0x22 || low <= 0x25`.
	Legacy,

	/// No glyph is moved
	Off,
}

impl PunctuationNudge {
	/// Returns true if the JIS pair is moved in vertical layout.
	pub fn applies(self, high: u8, low: u8) -> bool {
		match self {
			Self::Range => high == 0x21 && (0x22..=0x25).contains(&low),
			Self::Legacy => high == 0x21,
			Self::Off => false,
		}
	}
}

/// Cuts `text` at its first NUL byte.
pub fn terminated(text: &[u8]) -> &[u8] {
	match text.iter().position(|&b| b == 0) {
		Some(end) => &text[..end],
		None => text,
	}
}
