//! Text coding systems and conversion of double-byte pairs into canonical JIS.
//!
//! Glyphs are indexed by their JIS X 0208 row/cell pair. Text written in
//! Shift-JIS or EUC-JP is converted pair by pair before lookup.

use std::{borrow::Cow, fmt::Formatter, str::FromStr};

use encoding_rs::{EUC_JP, Encoding, ISO_2022_JP, SHIFT_JIS};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Escape byte that starts a JIS designation sequence
pub const ESC: u8 = 0x1b;

/// `ESC $ B`, switches JIS text into double-byte mode
pub const JIS_KANJI_IN: [u8; 3] = [ESC, 0x24, 0x42];

/// `ESC ( B`, switches JIS text back into single-byte mode
pub const JIS_KANJI_OUT: [u8; 3] = [ESC, 0x28, 0x42];

/// Byte-level encoding of text handed to the blit engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CodingSystem {
	/// 7-bit JIS with `ESC $ B` / `ESC ( B` mode switches
	#[default]
	#[serde(rename = "jis", alias = "iso-2022-jp")]
	Jis,

	/// Shift-JIS
	#[serde(rename = "sjis", alias = "shift_jis", alias = "shift-jis")]
	ShiftJis,

	/// EUC-JP
	#[serde(rename = "euc", alias = "euc-jp")]
	Euc,
}

impl CodingSystem {
	/// Converts a double-byte pair of this coding system into its JIS pair.
	pub fn to_jis(self, high: u8, low: u8) -> (u8, u8) {
		match self {
			Self::Jis => (high, low),
			Self::ShiftJis => sjis_to_jis(high, low),
			Self::Euc => euc_to_jis(high, low),
		}
	}

	/// Returns the `encoding_rs` encoding producing bytes in this coding system.
	pub fn encoding(self) -> &'static Encoding {
		match self {
			Self::Jis => ISO_2022_JP,
			Self::ShiftJis => SHIFT_JIS,
			Self::Euc => EUC_JP,
		}
	}

	/// Encodes UTF-8 text into the byte form expected by the blit engine.
	///
	/// # Errors
	///
	/// Returns [`RenderError::Unmappable`] if the text contains characters
	/// outside of this coding system.
	pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>, RenderError> {
		let (bytes, _, had_errors) = self.encoding().encode(text);
		if had_errors {
			return Err(RenderError::Unmappable {
				text: text.to_string(),
				coding_system: self,
			});
		}
		Ok(bytes)
	}
}

impl std::fmt::Display for CodingSystem {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Jis => write!(f, "JIS"),
			Self::ShiftJis => write!(f, "Shift-JIS"),
			Self::Euc => write!(f, "EUC-JP"),
		}
	}
}

impl FromStr for CodingSystem {
	type Err = RenderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"jis" | "iso-2022-jp" => Ok(Self::Jis),
			"sjis" | "shift_jis" | "shift-jis" => Ok(Self::ShiftJis),
			"euc" | "euc-jp" => Ok(Self::Euc),
			_ => Err(RenderError::UnknownCodingSystem(s.to_string())),
		}
	}
}

/// Converts an EUC-JP pair into JIS by clearing the high bit of both bytes.
pub fn euc_to_jis(high: u8, low: u8) -> (u8, u8) {
	(high & 0x7f, low & 0x7f)
}

/// Converts a Shift-JIS pair into JIS.
///
/// Arithmetic is done on bytes with wrapping, so pairs outside of the
/// JIS X 0208 area (half-width katakana, user-defined rows) yield pairs that
/// land outside of the glyph table instead of panicking.
pub fn sjis_to_jis(high: u8, low: u8) -> (u8, u8) {
	// Odd rows take the low trail bytes, even rows the high ones
	let odd_row = low < 0x9f;
	let base = if high < 0xa0 {
		high.wrapping_sub(0x81).wrapping_mul(2).wrapping_add(0x21)
	} else {
		high.wrapping_sub(0xe0).wrapping_mul(2).wrapping_add(0x5f)
	};

	if odd_row {
		let low = if low > 0x7f {
			low - 1
		} else {
			low
		};
		(base, low.wrapping_sub(0x1f))
	} else {
		(base.wrapping_add(1), low.wrapping_sub(0x7e))
	}
}

/// Returns true for bytes the blit engine draws as standalone single-byte glyphs
/// in Shift-JIS and EUC-JP text.
pub fn is_printable(byte: u8) -> bool {
	(0x20..=0x7e).contains(&byte)
}
