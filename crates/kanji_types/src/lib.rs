//! This crate provides bitmap kanji font loading and text blitting for the `kanji-rs` project.
//!
//! # Components
//!
//! - **Font**: hex bitmap font definitions (the glyph part of BDF) parsed into a fixed glyph table
//! - **Encoding**: conversion of Shift-JIS and EUC-JP pairs into the JIS pairs glyphs are indexed by
//! - **Render**: horizontal and vertical layout of JIS, Shift-JIS or EUC-JP text onto a pixel sink
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use kanji_types::prelude::*;
//!
//! let mut font = Font::open("jiskan16.bdf", 16)?;
//! font.set_coding_system(CodingSystem::ShiftJis);
//!
//! let text = font.coding_system().encode("こんにちは")?;
//! let surface = create_surface(&font, &text, Color::WHITE, PixelFormat::Xrgb8888);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod encoding;
pub mod error;
pub mod font;
pub mod render;
pub mod settings;

/// `use kanji_types::prelude::*;` to import commonly used items.
pub mod prelude;
