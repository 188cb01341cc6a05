//! Byte sources a font can be loaded from.

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::FontError;

/// Sizeable, readable byte source holding a font definition.
pub trait FontSource {
	/// Returns the total size of the source in bytes.
	fn size(&mut self) -> io::Result<u64>;

	/// Reads the entire source into memory.
	fn read_all(&mut self) -> Result<Vec<u8>, FontError>;
}

impl<T: Read + Seek> FontSource for T {
	fn size(&mut self) -> io::Result<u64> {
		let current = self.stream_position()?;
		let end = self.seek(SeekFrom::End(0))?;
		self.seek(SeekFrom::Start(current))?;
		Ok(end)
	}

	fn read_all(&mut self) -> Result<Vec<u8>, FontError> {
		let size = usize::try_from(self.size()?).map_err(|_| FontError::Allocation {
			what: "font source",
			bytes: usize::MAX,
		})?;
		if size == 0 {
			return Err(FontError::EmptySource);
		}

		let mut data = Vec::new();
		data.try_reserve_exact(size).map_err(|_| FontError::Allocation {
			what: "font source",
			bytes: size,
		})?;

		self.seek(SeekFrom::Start(0))?;
		self.read_to_end(&mut data)?;
		if data.is_empty() {
			return Err(FontError::EmptySource);
		}
		Ok(data)
	}
}
