//! Fixed-capacity glyph table.

use super::{
	constants::{DOUBLE_BYTE_BASE, DOUBLE_BYTE_ORIGIN, GLYPH_MAX, ROW_STRIDE},
	glyph::Glyph,
};

/// Computes the glyph index of a JIS double-byte pair.
///
/// The result is signed because pairs below `0x20` produce negative indices;
/// callers bounds-check it against [`GLYPH_MAX`].
pub fn double_byte_index(high: u8, low: u8) -> i64 {
	(i64::from(high) - DOUBLE_BYTE_ORIGIN) * ROW_STRIDE + (i64::from(low) - DOUBLE_BYTE_ORIGIN)
		+ DOUBLE_BYTE_BASE
}

/// Returns the table index of a JIS double-byte pair, or `None` if the pair
/// falls outside of the table.
pub fn glyph_index(high: u8, low: u8) -> Option<usize> {
	usize::try_from(double_byte_index(high, low)).ok().filter(|&index| index < GLYPH_MAX)
}

/// Glyph table indexed by single-byte codes and JIS pairs.
///
/// Each slot holds at most one glyph. Once occupied, a slot is never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphStore {
	slots: Box<[Option<Glyph>]>,
	len: usize,
}

impl GlyphStore {
	/// Creates an empty store with [`GLYPH_MAX`] slots.
	pub fn new() -> Self {
		Self {
			slots: vec![None; GLYPH_MAX].into_boxed_slice(),
			len: 0,
		}
	}

	/// Returns the number of slots.
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Returns the number of occupied slots.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true if no glyph has been stored.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns true if `index` is inside the table and occupied.
	pub fn contains(&self, index: usize) -> bool {
		self.get(index).is_some()
	}

	/// Looks up a glyph by index. Out-of-range indices are treated as empty slots.
	pub fn get(&self, index: usize) -> Option<&Glyph> {
		self.slots.get(index).and_then(Option::as_ref)
	}

	/// Stores `glyph` at `index` unless the slot is occupied.
	///
	/// Returns `Ok(true)` if the glyph was stored and `Ok(false)` if the slot
	/// already held one. Returns the glyph back if `index` is out of range.
	pub fn insert_vacant(&mut self, index: usize, glyph: Glyph) -> Result<bool, Glyph> {
		let Some(slot) = self.slots.get_mut(index) else {
			return Err(glyph);
		};
		if slot.is_some() {
			return Ok(false);
		}
		*slot = Some(glyph);
		self.len += 1;
		Ok(true)
	}

	/// Returns an iterator over occupied slots in index order.
	pub fn iter(&self) -> GlyphIter<'_> {
		GlyphIter {
			slots: self.slots.iter().enumerate(),
		}
	}
}

impl Default for GlyphStore {
	fn default() -> Self {
		Self::new()
	}
}

/// Iterator over the occupied slots of a glyph store.
#[derive(Debug)]
pub struct GlyphIter<'a> {
	slots: std::iter::Enumerate<std::slice::Iter<'a, Option<Glyph>>>,
}

impl<'a> Iterator for GlyphIter<'a> {
	type Item = (usize, &'a Glyph);

	fn next(&mut self) -> Option<Self::Item> {
		self.slots.by_ref().find_map(|(index, slot)| slot.as_ref().map(|glyph| (index, glyph)))
	}
}

impl<'a> IntoIterator for &'a GlyphStore {
	type Item = (usize, &'a Glyph);
	type IntoIter = GlyphIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
