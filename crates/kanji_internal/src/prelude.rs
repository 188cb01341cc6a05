//! Prelude module for `kanji_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use kanji_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut font = Font::empty(16).unwrap();
//! font.set_coding_system(CodingSystem::Euc);
//!
//! let mut surface = Surface::new(64, 16, PixelFormat::Rgb565);
//! font.put_text(&mut surface, Point::ORIGIN, SubPixel::default(), b"abc", Color::WHITE);
//! ```

// Re-export everything from kanji_types::prelude
#[doc(inline)]
pub use kanji_types::prelude::*;

// Re-export the entire kanji_types module for advanced usage
#[doc(inline)]
pub use kanji_types;
