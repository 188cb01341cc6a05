//! Owned pixel buffer target.

use super::{Color, PixelSink, SubPixel};
use crate::error::RenderError;

/// Pixel layout of a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
	/// 1 byte per pixel, `RRRGGGBB`
	Rgb332,

	/// 2 bytes per pixel, `RRRRRGGG GGGBBBBB`
	Rgb565,

	/// 4 bytes per pixel, `XXXXXXXX RRRRRRRR GGGGGGGG BBBBBBBB`
	#[default]
	Xrgb8888,
}

impl PixelFormat {
	/// Picks the format for a pixel depth in bytes.
	///
	/// # Errors
	///
	/// Returns [`RenderError::UnsupportedDepth`] for depths other than 1, 2 and 4.
	pub fn from_bytes_per_pixel(bpp: u8) -> Result<Self, RenderError> {
		match bpp {
			1 => Ok(Self::Rgb332),
			2 => Ok(Self::Rgb565),
			4 => Ok(Self::Xrgb8888),
			other => Err(RenderError::UnsupportedDepth(other)),
		}
	}

	/// Returns the number of bytes per pixel.
	pub fn bytes_per_pixel(self) -> usize {
		match self {
			Self::Rgb332 => 1,
			Self::Rgb565 => 2,
			Self::Xrgb8888 => 4,
		}
	}

	/// Maps a color to a pixel value, ignoring alpha.
	pub fn map_rgb(self, color: Color) -> u32 {
		let (r, g, b) = (u32::from(color.r), u32::from(color.g), u32::from(color.b));
		match self {
			Self::Rgb332 => (r & 0xe0) | ((g & 0xe0) >> 3) | (b >> 6),
			Self::Rgb565 => ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3),
			Self::Xrgb8888 => (r << 16) | (g << 8) | b,
		}
	}

	/// Expands a pixel value back into an opaque color.
	pub fn get_rgb(self, pixel: u32) -> Color {
		match self {
			Self::Rgb332 => {
				let r = (pixel >> 5) & 0x07;
				let g = (pixel >> 2) & 0x07;
				let b = pixel & 0x03;
				Color::rgb(expand3(r), expand3(g), (b * 0x55) as u8)
			}
			Self::Rgb565 => {
				let r = (pixel >> 11) & 0x1f;
				let g = (pixel >> 5) & 0x3f;
				let b = pixel & 0x1f;
				Color::rgb(((r << 3) | (r >> 2)) as u8, ((g << 2) | (g >> 4)) as u8, ((b << 3) | (b >> 2)) as u8)
			}
			Self::Xrgb8888 => Color::rgb((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8),
		}
	}
}

fn expand3(value: u32) -> u8 {
	((value << 5) | (value << 2) | (value >> 1)) as u8
}

/// Pixel buffer with an optional transparent color key.
///
/// Rows are padded to a multiple of 4 bytes. Pixels are stored little-endian.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Surface {
	width: u32,
	height: u32,
	format: PixelFormat,
	pitch: usize,
	pixels: Vec<u8>,
	color_key: Option<u32>,
}

impl Surface {
	/// Creates a surface with every pixel zero.
	pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
		let pitch = (width as usize * format.bytes_per_pixel()).next_multiple_of(4);
		Self {
			width,
			height,
			format,
			pitch,
			pixels: vec![0; pitch * height as usize],
			color_key: None,
		}
	}

	/// Returns the width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the pixel format.
	pub fn format(&self) -> PixelFormat {
		self.format
	}

	/// Returns the length of a row in bytes.
	pub fn pitch(&self) -> usize {
		self.pitch
	}

	/// Returns the raw pixel bytes.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Returns the transparent pixel value, if any.
	pub fn color_key(&self) -> Option<u32> {
		self.color_key
	}

	/// Sets or clears the transparent color.
	pub fn set_color_key(&mut self, color: Option<Color>) {
		self.color_key = color.map(|color| self.format.map_rgb(color));
	}

	/// Fills the whole surface with `color`.
	pub fn fill(&mut self, color: Color) {
		let value = self.format.map_rgb(color);
		for y in 0..self.height {
			for x in 0..self.width {
				self.write(x, y, value);
			}
		}
	}

	/// Returns the pixel value at (x, y), or `None` outside of the surface.
	pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
		let offset = self.offset(x, y)?;
		let bpp = self.format.bytes_per_pixel();
		let mut bytes = [0u8; 4];
		bytes[..bpp].copy_from_slice(&self.pixels[offset..offset + bpp]);
		Some(u32::from_le_bytes(bytes))
	}

	/// Returns true if the pixel at (x, y) differs from the color key.
	pub fn is_opaque(&self, x: u32, y: u32) -> bool {
		self.pixel(x, y).is_some_and(|pixel| Some(pixel) != self.color_key)
	}

	/// Converts the surface to tightly packed RGBA bytes, with color-keyed pixels transparent.
	pub fn to_rgba8(&self) -> Vec<u8> {
		let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * 4);
		for y in 0..self.height {
			for x in 0..self.width {
				let pixel = self.pixel(x, y).unwrap_or_default();
				let color = self.format.get_rgb(pixel);
				let alpha = if Some(pixel) == self.color_key {
					0
				} else {
					255
				};
				rgba.extend_from_slice(&[color.r, color.g, color.b, alpha]);
			}
		}
		rgba
	}

	fn offset(&self, x: u32, y: u32) -> Option<usize> {
		(x < self.width && y < self.height)
			.then(|| y as usize * self.pitch + x as usize * self.format.bytes_per_pixel())
	}

	fn write(&mut self, x: u32, y: u32, value: u32) {
		let Some(offset) = self.offset(x, y) else {
			return;
		};
		let bpp = self.format.bytes_per_pixel();
		self.pixels[offset..offset + bpp].copy_from_slice(&value.to_le_bytes()[..bpp]);
	}
}

impl PixelSink for Surface {
	fn bounds(&self) -> (i32, i32) {
		(
			i32::try_from(self.width).unwrap_or(i32::MAX),
			i32::try_from(self.height).unwrap_or(i32::MAX),
		)
	}

	fn put_pixel(&mut self, x: i32, y: i32, _sub: SubPixel, color: Color) {
		let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
			return;
		};
		let value = self.format.map_rgb(color);
		self.write(x, y, value);
	}
}
