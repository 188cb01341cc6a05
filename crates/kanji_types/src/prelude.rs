//! Prelude module for `kanji_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```no_run
//! use kanji_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let font = Font::empty(16).unwrap();
//! assert_eq!(font.width(None), 8);
//! ```

#[doc(inline)]
pub use crate::{
	encoding::CodingSystem,
	error::{FontError, RenderError},
	font::{
		Font,
		glyph::{Glyph, GlyphClass},
		loader::LoadSummary,
		source::FontSource,
	},
	render::{
		Color, ContextSink, DrawContext, FnSink, PixelFormat, PixelSink, Point, PunctuationNudge, SubPixel,
		Surface, create_surface, create_surface_vertical, put_text, put_text_vertical,
	},
	settings::FontSettings,
};

// Re-export constants for advanced usage
#[doc(inline)]
pub use crate::font::constants;
