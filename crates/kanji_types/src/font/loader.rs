//! Parser for hex bitmap font definitions.
//!
//! The format is the glyph part of BDF:
//!
//! ```text
//! STARTCHAR 2422
//! ENCODING 9250
//! SWIDTH 1000 0
//! BITMAP
//! 0000
//! 3C00
//! ...            (one hex row per scanline)
//! ENDCHAR
//! ```
//!
//! Only the `ENCODING` and `BITMAP` words are significant. Everything between
//! them is skipped, and exactly one row per scanline follows `BITMAP`.

use log::{debug, trace, warn};

use super::{
	constants::GLYPH_MAX,
	glyph::{Glyph, GlyphClass},
	lines::Lines,
	store::{GlyphStore, double_byte_index},
};
use crate::error::FontError;

const ENCODING: &[u8] = b"ENCODING";
const BITMAP: &[u8] = b"BITMAP";

/// Right shift that aligns a row padded to whole bytes to a cell `width` pixels wide.
pub fn row_shift(width: u32) -> u32 {
	width.div_ceil(8).max(1) * 8 - width
}

/// Returns true if `word` appears in `line` as a whitespace-delimited word.
fn has_word(line: &[u8], word: &[u8]) -> bool {
	words(line).any(|w| w == word)
}

fn words(line: &[u8]) -> impl Iterator<Item = &[u8]> {
	line.split(u8::is_ascii_whitespace).filter(|w| !w.is_empty())
}

/// Parses the decimal codepoint following the `ENCODING` word.
fn parse_codepoint(line: &[u8]) -> Option<i64> {
	let word = words(line).skip_while(|&w| w != ENCODING).nth(1)?;
	std::str::from_utf8(word).ok()?.parse().ok()
}

/// Parses one hexadecimal bitmap row.
fn parse_row(line: &[u8]) -> Option<u32> {
	let text = std::str::from_utf8(line).ok()?.trim();
	let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return None;
	}
	u32::from_str_radix(digits, 16).ok()
}

/// Counters reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
	/// Glyphs stored into previously empty slots
	pub stored: usize,
	/// Records whose slot was already occupied
	pub duplicates: usize,
	/// Records with a negative codepoint
	pub unencoded: usize,
}

/// Single pass over a font definition, filling a glyph store.
pub(crate) struct Parser<'a, 's> {
	lines: Lines<'a>,
	store: &'s mut GlyphStore,
	cell_height: usize,
	double_shift: u32,
	single_shift: u32,
	summary: LoadSummary,
}

impl<'a, 's> Parser<'a, 's> {
	/// Creates a parser for cells `cell_height` pixels high.
	pub(crate) fn new(data: &'a [u8], store: &'s mut GlyphStore, cell_height: u32) -> Self {
		let double_shift = row_shift(cell_height);
		let single_shift = row_shift(cell_height / 2);
		debug!(
			"Parsing {} bytes of font data, cell {cell_height}px, row shifts {double_shift}/{single_shift}",
			data.len()
		);

		Self {
			lines: Lines::new(data),
			store,
			cell_height: cell_height as usize,
			double_shift,
			single_shift,
			summary: LoadSummary::default(),
		}
	}

	/// Parses every glyph record.
	///
	/// # Errors
	///
	/// Returns an error on the first malformed record. Glyphs stored before
	/// the failure stay in the store; the caller discards it.
	pub(crate) fn run(mut self) -> Result<LoadSummary, FontError> {
		while let Some(line) = self.lines.next() {
			if has_word(line, ENCODING) {
				self.parse_record(line)?;
			}
		}

		debug!(
			"Loaded {} glyphs ({} duplicates, {} unencoded records skipped)",
			self.summary.stored, self.summary.duplicates, self.summary.unencoded
		);
		Ok(self.summary)
	}

	fn parse_record(&mut self, encoding_line: &[u8]) -> Result<(), FontError> {
		let line = self.lines.line_number();
		let codepoint = parse_codepoint(encoding_line).ok_or(FontError::MissingCodepoint {
			line,
		})?;

		// The ENCODING line itself is checked first
		let mut current = encoding_line;
		while !has_word(current, BITMAP) {
			current = self.lines.next().ok_or(FontError::MissingBitmap {
				line,
				codepoint,
			})?;
		}

		if codepoint < 0 {
			warn!("Line {line}: skipping unencoded glyph {codepoint}");
			self.summary.unencoded += 1;
			return self.skip_rows(codepoint);
		}

		let (index, class, shift) = if codepoint > 0xff {
			let high = ((codepoint >> 8) & 0xff) as u8;
			let low = (codepoint & 0xff) as u8;
			(double_byte_index(high, low), GlyphClass::Double, self.double_shift)
		} else {
			(codepoint, GlyphClass::Single, self.single_shift)
		};

		let index = usize::try_from(index).ok().filter(|&index| index < GLYPH_MAX).ok_or(
			FontError::IndexOutOfRange {
				codepoint,
				index,
				max: GLYPH_MAX,
			},
		)?;

		if class == GlyphClass::Double && index <= 0xff {
			warn!("Line {line}: double-byte glyph {codepoint:#06X} lands in single-byte slot {index}");
		}

		if self.store.contains(index) {
			trace!("Line {line}: glyph {codepoint:#06X} already loaded, skipping");
			self.summary.duplicates += 1;
			return self.skip_rows(codepoint);
		}

		let rows = self.read_rows(codepoint, shift)?;
		let glyph = Glyph::new(codepoint as u32, class, rows);
		// Index was bounds-checked above
		if let Ok(true) = self.store.insert_vacant(index, glyph) {
			self.summary.stored += 1;
		}
		Ok(())
	}

	fn read_rows(&mut self, codepoint: i64, shift: u32) -> Result<Vec<u32>, FontError> {
		let mut rows = Vec::new();
		rows.try_reserve_exact(self.cell_height).map_err(|_| FontError::Allocation {
			what: "glyph rows",
			bytes: self.cell_height * size_of::<u32>(),
		})?;

		for _ in 0..self.cell_height {
			let value = self.parse_next_row(codepoint, rows.len())?;
			rows.push(value >> shift);
		}
		Ok(rows)
	}

	/// Consumes the rows of a record that is not stored. They must still be valid.
	fn skip_rows(&mut self, codepoint: i64) -> Result<(), FontError> {
		for read in 0..self.cell_height {
			self.parse_next_row(codepoint, read)?;
		}
		Ok(())
	}

	fn parse_next_row(&mut self, codepoint: i64, read: usize) -> Result<u32, FontError> {
		let line = self.next_row(codepoint, read)?;
		parse_row(line).ok_or_else(|| FontError::InvalidRow {
			line: self.lines.line_number(),
			text: String::from_utf8_lossy(line).into_owned(),
		})
	}

	fn next_row(&mut self, codepoint: i64, read: usize) -> Result<&'a [u8], FontError> {
		self.lines.next().ok_or(FontError::TruncatedBitmap {
			codepoint,
			expected: self.cell_height,
			actual: read,
		})
	}
}
