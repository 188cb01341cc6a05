//! Glyph structure for bitmap fonts.

/// Glyph class, deciding the cell width and the row alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
	/// Half-width glyph addressed by a single byte
	Single,

	/// Full-width glyph addressed by a JIS double-byte pair
	Double,
}

impl std::fmt::Display for GlyphClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Single => write!(f, "single-byte"),
			Self::Double => write!(f, "double-byte"),
		}
	}
}

/// Glyph structure, representing a single character bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
	/// Codepoint from the `ENCODING` line of the font source
	code: u32,

	/// Glyph class
	class: GlyphClass,

	/// One bitmask per scanline, most significant used bit is the leftmost pixel
	rows: Box<[u32]>,
}

impl Glyph {
	/// Creates a new Glyph instance.
	///
	/// # Arguments
	///
	/// * `code` - Codepoint of the glyph, JIS pair packed as `hi << 8 | lo` for double-byte glyphs.
	/// * `class` - Glyph class.
	/// * `rows` - Row bitmasks, one per scanline.
	pub fn new(code: u32, class: GlyphClass, rows: impl Into<Box<[u32]>>) -> Self {
		Self {
			code,
			class,
			rows: rows.into(),
		}
	}

	/// Returns the codepoint of the glyph.
	pub fn code(&self) -> u32 {
		self.code
	}

	/// Returns the glyph class.
	pub fn class(&self) -> GlyphClass {
		self.class
	}

	/// Returns the row bitmasks.
	pub fn rows(&self) -> &[u32] {
		&self.rows
	}

	/// Returns the number of scanlines.
	pub fn height(&self) -> usize {
		self.rows.len()
	}

	/// Gets the pixel value at (x, y) for a cell `width` pixels wide.
	/// Coordinates outside of the cell are off.
	pub fn get_pixel(&self, width: u32, x: u32, y: usize) -> bool {
		if x >= width || width > u32::BITS {
			return false;
		}
		self.rows.get(y).is_some_and(|row| (row >> (width - 1 - x)) & 1 != 0)
	}

	/// Converts the glyph to an ASCII art representation for a cell `width` pixels wide.
	pub fn to_ascii_art(&self, width: u32, one: char, zero: char) -> String {
		let mut art = String::with_capacity((width as usize + 1) * self.rows.len());
		for y in 0..self.rows.len() {
			for x in 0..width {
				art.push(if self.get_pixel(width, x, y) {
					one
				} else {
					zero
				});
			}
			art.push('\n');
		}
		art
	}
}
