//! Splitting encoded text into single-byte and double-byte units.

use crate::encoding::{CodingSystem, ESC, JIS_KANJI_IN, JIS_KANJI_OUT, is_printable};

/// One logical character of encoded text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
	/// Line break, only produced when newlines are recognised
	Newline,

	/// Half-width character
	Single(u8),

	/// Full-width character, still in the text's coding system
	Double(u8, u8),
}

/// Iterator over the units of encoded text.
///
/// In JIS text the current mode is switched by `ESC $ B` and `ESC ( B`; any
/// other three-byte escape is dropped. In Shift-JIS and EUC-JP text a byte that
/// is not printable ASCII starts a double-byte pair. Iteration stops at the
/// first NUL byte, and at a truncated escape or pair.
#[derive(Debug, Clone)]
pub struct Units<'a> {
	text: &'a [u8],
	pos: usize,
	coding_system: CodingSystem,
	newlines: bool,
	double_byte: bool,
}

impl<'a> Units<'a> {
	/// Creates an iterator over `text`.
	///
	/// With `newlines` set, `\n` is reported as [`Unit::Newline`] before any
	/// other classification.
	pub fn new(text: &'a [u8], coding_system: CodingSystem, newlines: bool) -> Self {
		Self {
			text: super::terminated(text),
			pos: 0,
			coding_system,
			newlines,
			double_byte: false,
		}
	}

	fn stop(&mut self) -> Option<Unit> {
		self.pos = self.text.len();
		None
	}
}

impl Iterator for Units<'_> {
	type Item = Unit;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let &byte = self.text.get(self.pos)?;

			if self.newlines && byte == b'\n' {
				self.pos += 1;
				return Some(Unit::Newline);
			}

			if self.coding_system == CodingSystem::Jis && byte == ESC {
				let Some(sequence) = self.text.get(self.pos..self.pos + 3) else {
					return self.stop();
				};
				if sequence == JIS_KANJI_IN {
					self.double_byte = true;
				} else if sequence == JIS_KANJI_OUT {
					self.double_byte = false;
				}
				self.pos += 3;
				continue;
			}

			if self.coding_system != CodingSystem::Jis {
				self.double_byte = !is_printable(byte);
			}

			if !self.double_byte {
				self.pos += 1;
				return Some(Unit::Single(byte));
			}

			let Some(&low) = self.text.get(self.pos + 1) else {
				return self.stop();
			};
			self.pos += 2;
			return Some(Unit::Double(byte, low));
		}
	}
}

impl std::iter::FusedIterator for Units<'_> {}
