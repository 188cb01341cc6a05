//! This module is separated into its own crate to keep the public facade of `kanji-rs` thin, and should not be used directly.

/// `use kanji_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export kanji_types for convenience
pub use kanji_types;

// Re-export commonly used types at crate root
pub use kanji_types::{
	encoding::CodingSystem,
	error::{FontError, RenderError},
	font::Font,
	render::{Color, PixelFormat, PixelSink, Point, SubPixel, Surface},
	settings::FontSettings,
};
