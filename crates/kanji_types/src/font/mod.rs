//! Bitmap kanji font support.

use std::path::Path;

use log::debug;

use crate::{
	encoding::CodingSystem,
	error::FontError,
	font::{
		glyph::Glyph,
		loader::{LoadSummary, Parser},
		source::FontSource,
		store::{GlyphIter, GlyphStore, glyph_index},
	},
	render::PunctuationNudge,
	settings::FontSettings,
};

pub mod glyph;
pub mod lines;
pub mod loader;
pub mod source;
pub mod store;

/// Font constants.
pub mod constants {
	/// First glyph index of the double-byte plane
	pub const DOUBLE_BYTE_BASE: i64 = 0xff;

	/// Byte value mapped to row/cell zero of the double-byte plane
	pub const DOUBLE_BYTE_ORIGIN: i64 = 0x20;

	/// Number of cells per row of the double-byte plane
	pub const ROW_STRIDE: i64 = 96;

	/// Glyph table capacity: single-byte codes plus 96 rows of 96 cells
	pub const GLYPH_MAX: usize = 255 + 96 * 96;

	/// Largest supported cell height, rows are stored as `u32`
	pub const MAX_CELL_SIZE: u32 = u32::BITS;
}

/// Bitmap font with half-width single-byte glyphs and full-width double-byte glyphs.
///
/// Glyph data is immutable after loading; the coding system and the vertical
/// punctuation rule only affect how text is interpreted and can be changed at
/// any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
	/// Full-width cell size in pixels, also the line height
	cell_height: u32,

	/// Coding system of text passed to the blit engine
	coding_system: CodingSystem,

	/// Which glyphs are nudged in vertical layout
	punctuation: PunctuationNudge,

	/// Glyph table
	glyphs: GlyphStore,
}

impl Font {
	/// Creates a font without glyphs.
	///
	/// # Errors
	///
	/// Returns [`FontError::InvalidSize`] if `size` is not in `1..=32`.
	pub fn empty(size: u32) -> Result<Self, FontError> {
		if size == 0 || size > constants::MAX_CELL_SIZE {
			return Err(FontError::InvalidSize(size));
		}

		Ok(Self {
			cell_height: size,
			coding_system: CodingSystem::default(),
			punctuation: PunctuationNudge::default(),
			glyphs: GlyphStore::new(),
		})
	}

	/// Opens a font definition file.
	///
	/// # Arguments
	///
	/// * `path` - Path to the font file.
	/// * `size` - Cell height in pixels.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The file cannot be opened or read, or is empty
	/// - The size is not in `1..=32`
	/// - The definition is malformed
	pub fn open(path: impl AsRef<Path>, size: u32) -> Result<Self, FontError> {
		let path = path.as_ref();
		debug!("Opening font {}", path.display());
		let mut file = std::fs::File::open(path)?;
		Self::from_source(&mut file, size)
	}

	/// Loads a font from any sizeable, readable source.
	///
	/// # Errors
	///
	/// See [`Font::open`].
	pub fn from_source(src: &mut impl FontSource, size: u32) -> Result<Self, FontError> {
		let mut font = Self::empty(size)?;
		let data = src.read_all()?;
		font.add_glyphs(&data)?;
		Ok(font)
	}

	/// Loads a font from an in-memory definition.
	///
	/// # Errors
	///
	/// See [`Font::open`].
	pub fn from_bytes(data: &[u8], size: u32) -> Result<Self, FontError> {
		if data.is_empty() {
			return Err(FontError::EmptySource);
		}
		let mut font = Self::empty(size)?;
		font.add_glyphs(data)?;
		Ok(font)
	}

	/// Loads a font and applies the text interpretation options of `settings`.
	///
	/// # Errors
	///
	/// See [`Font::open`].
	pub fn with_settings(src: &mut impl FontSource, settings: &FontSettings) -> Result<Self, FontError> {
		let mut font = Self::from_source(src, settings.size)?;
		font.set_coding_system(settings.coding_system);
		font.set_punctuation(settings.punctuation);
		Ok(font)
	}

	/// Parses a further definition into this font. Glyphs already present are kept.
	///
	/// On failure the font is left unchanged.
	///
	/// # Errors
	///
	/// Returns an error if the definition is malformed or memory runs out.
	pub fn add_glyphs(&mut self, data: &[u8]) -> Result<LoadSummary, FontError> {
		let mut glyphs = self.glyphs.clone();
		let summary = Parser::new(data, &mut glyphs, self.cell_height).run()?;
		self.glyphs = glyphs;
		Ok(summary)
	}

	/// Returns the full-width cell size, which is also the line height.
	pub fn height(&self) -> u32 {
		self.cell_height
	}

	/// Returns the half-width cell size.
	pub fn half_width(&self) -> u32 {
		self.cell_height / 2
	}

	/// Estimates the width of `text`, counting every byte as a half-width cell.
	///
	/// Without text, returns the width of one half-width cell. Double-byte
	/// characters are counted as two cells, escape sequences as three.
	pub fn width(&self, text: Option<&[u8]>) -> u32 {
		match text {
			None => self.half_width(),
			Some(text) => byte_span(crate::render::terminated(text).len(), self.half_width()),
		}
	}

	/// Returns the coding system used to interpret text.
	pub fn coding_system(&self) -> CodingSystem {
		self.coding_system
	}

	/// Sets the coding system used to interpret text.
	pub fn set_coding_system(&mut self, coding_system: CodingSystem) {
		self.coding_system = coding_system;
	}

	/// Returns the vertical punctuation rule.
	pub fn punctuation(&self) -> PunctuationNudge {
		self.punctuation
	}

	/// Sets the vertical punctuation rule.
	pub fn set_punctuation(&mut self, punctuation: PunctuationNudge) {
		self.punctuation = punctuation;
	}

	/// Returns the number of glyph slots, loaded or not.
	pub fn capacity(&self) -> usize {
		self.glyphs.capacity()
	}

	/// Returns the number of loaded glyphs.
	pub fn glyph_count(&self) -> usize {
		self.glyphs.len()
	}

	/// Looks up a glyph by table index.
	pub fn glyph(&self, index: usize) -> Option<&Glyph> {
		self.glyphs.get(index)
	}

	/// Looks up the glyph drawn for a single-byte code.
	pub fn single(&self, code: u8) -> Option<&Glyph> {
		self.glyphs.get(code as usize)
	}

	/// Looks up the glyph drawn for a JIS double-byte pair.
	pub fn double(&self, high: u8, low: u8) -> Option<&Glyph> {
		glyph_index(high, low).and_then(|index| self.glyphs.get(index))
	}

	/// Returns an iterator over loaded glyphs and their table indices.
	pub fn iter(&self) -> GlyphIter<'_> {
		self.glyphs.iter()
	}
}

/// Width of `len` cells `cell` pixels wide, saturating at `u32::MAX`.
fn byte_span(len: usize, cell: u32) -> u32 {
	u32::try_from(len).unwrap_or(u32::MAX).saturating_mul(cell)
}

impl<'a> IntoIterator for &'a Font {
	type Item = (usize, &'a Glyph);
	type IntoIter = GlyphIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl TryFrom<&[u8]> for Font {
	type Error = FontError;

	/// Loads a 16 pixel font.
	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value, FontSettings::default().size)
	}
}
