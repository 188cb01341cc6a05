//! Line cursor over an in-memory font source.

/// Lazy producer of lines over a byte buffer.
///
/// A line ends at `\n` or `\r`, optionally followed by the other one of the
/// two, so `\r\n` and `\n\r` both count as a single terminator. The final line
/// is yielded even if it has no terminator. Lines are returned without their
/// terminator.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
	data: &'a [u8],
	pos: usize,
	line: usize,
}

impl<'a> Lines<'a> {
	/// Creates a cursor at the start of `data`.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
			line: 0,
		}
	}

	/// Returns the 1-based number of the line last returned by `next`,
	/// or 0 if nothing has been read yet.
	pub fn line_number(&self) -> usize {
		self.line
	}

	/// Returns true once every byte has been consumed.
	pub fn is_exhausted(&self) -> bool {
		self.pos >= self.data.len()
	}
}

impl<'a> Iterator for Lines<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		if self.is_exhausted() {
			return None;
		}

		let rest = &self.data[self.pos..];
		let Some(end) = rest.iter().position(|&b| b == b'\n' || b == b'\r') else {
			self.pos = self.data.len();
			self.line += 1;
			return Some(rest);
		};

		let mut consumed = end + 1;
		if let Some(&next) = rest.get(consumed)
			&& (next == b'\n' || next == b'\r')
			&& next != rest[end]
		{
			consumed += 1;
		}

		self.pos += consumed;
		self.line += 1;
		Some(&rest[..end])
	}
}
