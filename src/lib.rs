#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `kanji-rs` loads bitmap kanji fonts and draws JIS, Shift-JIS or EUC-JP encoded text with them.
//!
//! Fonts are hex bitmap definitions in the glyph format of BDF. Text is drawn
//! horizontally or vertically onto any [`PixelSink`], such as an owned
//! [`Surface`] or a point-drawing renderer wrapped in a
//! [`ContextSink`](prelude::ContextSink).

pub use kanji_internal::*;
