//! Error types for font loading and text rendering.

use thiserror::Error;

use crate::encoding::CodingSystem;

/// Errors that can occur when loading a bitmap font
#[derive(Debug, Error)]
pub enum FontError {
	/// Requested cell height cannot be represented by a row bitmask
	#[error("Invalid cell size {0}: expected 1..=32 pixels")]
	InvalidSize(u32),

	/// Font source has no data
	#[error("Font source is empty")]
	EmptySource,

	/// Buffer for the source data or a glyph could not be allocated
	#[error("Failed to allocate {bytes} bytes for {what}")]
	Allocation {
		/// What the buffer was for
		what: &'static str,
		/// Requested size in bytes
		bytes: usize,
	},

	/// `ENCODING` line without a decimal codepoint after it
	#[error("Line {line}: ENCODING record has no codepoint")]
	MissingCodepoint {
		/// 1-based line number
		line: usize,
	},

	/// Input ended before the `BITMAP` marker of a glyph record
	#[error("Line {line}: glyph {codepoint} has no BITMAP marker before end of input")]
	MissingBitmap {
		/// 1-based line number of the `ENCODING` line
		line: usize,
		/// Raw codepoint of the record
		codepoint: i64,
	},

	/// Input ended in the middle of a glyph's rows
	#[error("Glyph {codepoint} bitmap truncated: expected {expected} rows, got {actual}")]
	TruncatedBitmap {
		/// Raw codepoint of the record
		codepoint: i64,
		/// Number of rows required by the cell height
		expected: usize,
		/// Number of rows found
		actual: usize,
	},

	/// Bitmap row that is not a hexadecimal integer
	#[error("Line {line}: invalid bitmap row {text:?}")]
	InvalidRow {
		/// 1-based line number
		line: usize,
		/// Offending line, lossily decoded
		text: String,
	},

	/// Codepoint maps outside of the glyph table
	#[error("Codepoint {codepoint:#06X} maps to glyph index {index}, outside of 0..{max}")]
	IndexOutOfRange {
		/// Raw codepoint of the record
		codepoint: i64,
		/// Computed glyph index
		index: i64,
		/// Glyph table capacity
		max: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when preparing text or render targets
#[derive(Debug, Error)]
pub enum RenderError {
	/// Pixel depth other than 1, 2 or 4 bytes
	#[error("Unsupported pixel depth: {0} bytes per pixel")]
	UnsupportedDepth(u8),

	/// Text contains characters the coding system cannot express
	#[error("Text {text:?} cannot be encoded as {coding_system}")]
	Unmappable {
		/// Source text
		text: String,
		/// Target coding system
		coding_system: CodingSystem,
	},

	/// Name that does not denote a known coding system
	#[error("Unknown coding system: {0:?}")]
	UnknownCodingSystem(String),
}
