//! Horizontal and vertical text layout.

use super::{Color, PixelFormat, PixelSink, Point, SubPixel, Surface, Unit, Units, terminated};
use crate::font::Font;

/// Horizontal offset, and upward offset, of nudged punctuation in cells
const NUDGE: f64 = 0.6;

/// Row advance after nudged punctuation in cells, measured from the nudged position
const NUDGE_ADVANCE: f64 = 1.6;

/// Draws one glyph cell at `at`, clipped against the sink bounds.
///
/// Bit `width - 1 - x` of row `y` is pixel `(x, y)` of the cell.
fn blit<S: PixelSink + ?Sized>(
	dst: &mut S,
	rows: &[u32],
	width: i32,
	height: i32,
	at: Point,
	sub: SubPixel,
	fg: Color,
) {
	let (dw, dh) = dst.bounds();
	let min_x = at.x.saturating_neg().max(0);
	let min_y = at.y.saturating_neg().max(0);
	let max_x = width.min(dw.saturating_sub(at.x));
	let max_y = height.min(dh.saturating_sub(at.y));

	for y in min_y..max_y {
		let Some(&row) = rows.get(y as usize) else {
			break;
		};
		for x in min_x..max_x {
			if (row >> (width - 1 - x)) & 1 != 0 {
				dst.put_pixel(at.x + x, at.y + y, sub, fg);
			}
		}
	}
}

/// Moves a coordinate by a fraction of a cell, truncating toward zero.
fn nudge(value: i32, cell: i32, by: f64) -> i32 {
	(f64::from(value) + f64::from(cell) * by) as i32
}

/// Draws `text` left to right starting at `origin`, and returns the final pen position.
///
/// `\n` moves the pen one line down and back to `origin.x`. Characters
/// without a glyph advance the pen without drawing.
pub fn put_text<S: PixelSink + ?Sized>(
	font: &Font,
	dst: &mut S,
	origin: Point,
	sub: SubPixel,
	text: &[u8],
	fg: Color,
) -> Point {
	let cell = font.height() as i32;
	let half = font.half_width() as i32;
	let mut pen = origin;

	for unit in Units::new(text, font.coding_system(), true) {
		match unit {
			Unit::Newline => {
				pen.x = origin.x;
				pen.y = pen.y.saturating_add(cell);
			}
			Unit::Single(code) => {
				if let Some(glyph) = font.single(code) {
					blit(dst, glyph.rows(), half, cell, pen, sub, fg);
				}
				pen.x = pen.x.saturating_add(half);
			}
			Unit::Double(high, low) => {
				let (high, low) = font.coding_system().to_jis(high, low);
				if let Some(glyph) = font.double(high, low) {
					blit(dst, glyph.rows(), cell, cell, pen, sub, fg);
				}
				pen.x = pen.x.saturating_add(cell);
			}
		}
	}

	pen
}

/// Draws `text` top to bottom starting at `origin`, and returns the final pen position.
///
/// Only double-byte characters are drawn; single-byte characters are skipped
/// without moving the pen, and `\n` has no special meaning. Glyphs selected
/// by the font's [`PunctuationNudge`](super::PunctuationNudge) are drawn
/// 0.6 cells right and up of the pen.
pub fn put_text_vertical<S: PixelSink + ?Sized>(
	font: &Font,
	dst: &mut S,
	origin: Point,
	sub: SubPixel,
	text: &[u8],
	fg: Color,
) -> Point {
	let cell = font.height() as i32;
	let mut pen = origin;

	for unit in Units::new(text, font.coding_system(), false) {
		let Unit::Double(high, low) = unit else {
			continue;
		};

		let (high, low) = font.coding_system().to_jis(high, low);
		let Some(glyph) = font.double(high, low) else {
			pen.y = pen.y.saturating_add(cell);
			continue;
		};

		if font.punctuation().applies(high, low) {
			pen.x = nudge(pen.x, cell, NUDGE);
			pen.y = nudge(pen.y, cell, -NUDGE);
			blit(dst, glyph.rows(), cell, cell, pen, sub, fg);
			pen.x = nudge(pen.x, cell, -NUDGE);
			pen.y = nudge(pen.y, cell, NUDGE_ADVANCE);
		} else {
			blit(dst, glyph.rows(), cell, cell, pen, sub, fg);
			pen.y = pen.y.saturating_add(cell);
		}
	}

	pen
}

/// Renders horizontal text onto a new surface sized one half-width cell per byte.
///
/// The background is the complement of `fg` and is set as the color key.
/// Returns `None` for empty text.
pub fn create_surface(font: &Font, text: &[u8], fg: Color, format: PixelFormat) -> Option<Surface> {
	let text = terminated(text);
	if text.is_empty() {
		return None;
	}

	let length = font.width(Some(text));
	let mut surface = keyed_surface(length, font.height(), fg, format);
	put_text(font, &mut surface, Point::ORIGIN, SubPixel::default(), text, fg);
	Some(surface)
}

/// Renders vertical text onto a new surface one cell wide and one half-width cell per byte high.
///
/// The background is the complement of `fg` and is set as the color key.
/// Returns `None` for empty text.
pub fn create_surface_vertical(font: &Font, text: &[u8], fg: Color, format: PixelFormat) -> Option<Surface> {
	let text = terminated(text);
	if text.is_empty() {
		return None;
	}

	let length = font.width(Some(text));
	let mut surface = keyed_surface(font.height(), length, fg, format);
	put_text_vertical(font, &mut surface, Point::ORIGIN, SubPixel::default(), text, fg);
	Some(surface)
}

fn keyed_surface(width: u32, height: u32, fg: Color, format: PixelFormat) -> Surface {
	let background = fg.complement();
	let mut surface = Surface::new(width, height, format);
	surface.fill(background);
	surface.set_color_key(Some(background));
	surface
}

impl Font {
	/// Draws horizontal text, see [`put_text`].
	pub fn put_text<S: PixelSink + ?Sized>(
		&self,
		dst: &mut S,
		origin: Point,
		sub: SubPixel,
		text: &[u8],
		fg: Color,
	) -> Point {
		put_text(self, dst, origin, sub, text, fg)
	}

	/// Draws vertical text, see [`put_text_vertical`].
	pub fn put_text_vertical<S: PixelSink + ?Sized>(
		&self,
		dst: &mut S,
		origin: Point,
		sub: SubPixel,
		text: &[u8],
		fg: Color,
	) -> Point {
		put_text_vertical(self, dst, origin, sub, text, fg)
	}
}
