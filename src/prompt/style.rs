//! Style presets for the cover art.

use std::fmt;

/// One of the fixed art styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreset {
    #[default]
    Fantasy,
    Retro,
    Cyberpunk,
    Vaporwave,
    Minimal,
}

impl StylePreset {
    pub const ALL: [StylePreset; 5] = [
        StylePreset::Fantasy,
        StylePreset::Retro,
        StylePreset::Cyberpunk,
        StylePreset::Vaporwave,
        StylePreset::Minimal,
    ];

    /// Key used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            StylePreset::Fantasy => "fantasy",
            StylePreset::Retro => "retro",
            StylePreset::Cyberpunk => "cyberpunk",
            StylePreset::Vaporwave => "vaporwave",
            StylePreset::Minimal => "minimal",
        }
    }

    /// Prompt phrase describing the style
    pub fn phrase(self) -> &'static str {
        match self {
            StylePreset::Fantasy => {
                "fantasy rpg pixel art, 16-bit style, magical atmosphere, glowing runes"
            }
            StylePreset::Retro => "retro 8-bit pixel art, nes era palette, chiptune aesthetic",
            StylePreset::Cyberpunk => {
                "cyberpunk pixel art, neon lights, rainy megacity, dark futuristic mood"
            }
            StylePreset::Vaporwave => {
                "vaporwave pixel art, pastel pink and teal, 80s aesthetic, glitch effects"
            }
            StylePreset::Minimal => {
                "minimalist pixel art, limited palette, clean shapes, negative space"
            }
        }
    }

    /// Exact (case-insensitive) lookup. Returns `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.key().eq_ignore_ascii_case(key))
    }

    /// Lookup that falls back to [`StylePreset::Fantasy`] for unknown keys.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
