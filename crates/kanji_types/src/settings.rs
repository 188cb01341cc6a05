//! Font loading settings.

use serde::{Deserialize, Serialize};

use crate::{encoding::CodingSystem, render::PunctuationNudge};

/// Settings used by [`Font::with_settings`](crate::font::Font::with_settings).
///
/// Missing fields fall back to a 16 pixel JIS font with the corrected
/// punctuation rule, so a partial TOML table is enough:
///
/// ```toml
/// size = 24
/// coding_system = "sjis"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
	/// Cell height in pixels
	pub size: u32,

	/// Coding system of text passed to the blit engine
	pub coding_system: CodingSystem,

	/// Which glyphs are nudged in vertical layout
	pub punctuation: PunctuationNudge,
}

impl Default for FontSettings {
	fn default() -> Self {
		Self {
			size: 16,
			coding_system: CodingSystem::Jis,
			punctuation: PunctuationNudge::Range,
		}
	}
}
