//! Integration tests for font loading and text rendering in `kanji-rs`

mod loading;
mod surface;
