//! Benchmark helper utilities for kanji-rs
//!
//! This module generates synthetic font definitions and encoded text so the
//! benchmarks do not depend on font files being present.

use kanji_types::encoding::{JIS_KANJI_IN, JIS_KANJI_OUT};

/// Generates a font definition with every printable ASCII glyph and the
/// first `rows` JIS rows fully populated.
///
/// Glyph bitmaps follow a diagonal pattern so that blitting touches a
/// realistic share of pixels.
pub fn generate_test_font(size: u32, rows: u8) -> Vec<u8> {
	let mut data = String::from("STARTFONT 2.1\nCHARSET_ENCODING \"JISX0208\"\n");

	for code in 0x20u32..0x7f {
		push_glyph(&mut data, code, size, size / 2);
	}
	for high in 0x21u32..0x21 + u32::from(rows).min(94) {
		for low in 0x21u32..=0x7e {
			push_glyph(&mut data, (high << 8) | low, size, size);
		}
	}

	data.push_str("ENDFONT\n");
	data.into_bytes()
}

fn push_glyph(data: &mut String, code: u32, size: u32, width: u32) {
	let digits = (width.div_ceil(8).max(1) * 2) as usize;
	let shift = width.div_ceil(8).max(1) * 8 - width;

	data.push_str(&format!("STARTCHAR {code:04x}\nENCODING {code}\nBITMAP\n"));
	for y in 0..size {
		let row = (1u64 << ((y + code) % width)) | 1u64 << (width - 1);
		data.push_str(&format!("{:0digits$X}\n", row << shift));
	}
	data.push_str("ENDCHAR\n");
}

/// Generates `count` characters of JIS text cycling through the first `rows`
/// JIS rows, with a line break every `per_line` characters.
pub fn generate_jis_text(count: usize, rows: u8, per_line: usize) -> Vec<u8> {
	let mut text = Vec::with_capacity(count * 2 + count / per_line.max(1) * 7);
	let rows = usize::from(rows.clamp(1, 94));

	text.extend_from_slice(&JIS_KANJI_IN);
	for i in 0..count {
		if per_line > 0 && i > 0 && i % per_line == 0 {
			text.extend_from_slice(&JIS_KANJI_OUT);
			text.push(b'\n');
			text.extend_from_slice(&JIS_KANJI_IN);
		}
		text.push(0x21 + ((i / 94) % rows) as u8);
		text.push(0x21 + (i % 94) as u8);
	}
	text.extend_from_slice(&JIS_KANJI_OUT);
	text
}

/// Common benchmark font sizes
pub mod sizes {
	/// Small font: 12 pixel cells
	pub const SMALL: u32 = 12;
	/// Default font: 16 pixel cells
	pub const DEFAULT: u32 = 16;
	/// Large font: 24 pixel cells
	pub const LARGE: u32 = 24;
	/// Largest supported font: 32 pixel cells
	pub const MAX: u32 = 32;
}

#[cfg(test)]
mod tests {
	use super::*;
	use kanji_types::font::Font;

	#[test]
	fn test_generated_font_loads() {
		for size in [sizes::SMALL, sizes::DEFAULT, sizes::LARGE, sizes::MAX] {
			let font = Font::from_bytes(&generate_test_font(size, 2), size).unwrap();
			assert_eq!(font.glyph_count(), 95 + 2 * 94, "size {size}");
			assert!(font.double(0x22, 0x7e).is_some());
		}
	}

	#[test]
	fn test_generated_text() {
		let text = generate_jis_text(4, 1, 2);
		assert_eq!(text, b"\x1b$B\x21\x21\x21\x22\x1b(B\n\x1b$B\x21\x23\x21\x24\x1b(B");
	}
}
