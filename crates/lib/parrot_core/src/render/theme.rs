//! Light and dark colour palettes.

use crate::preference::Preference;

/// Colours used by rendered transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub bot_bubble: &'static str,
    pub code_background: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#FFFFFF",
        paper: "#FFFFFF",
        text_primary: "#1A1A1A",
        text_secondary: "#666666",
        primary: "#7B66FF",
        bot_bubble: "#F5F5FF",
        code_background: "rgba(0, 0, 0, 0.04)",
    };

    pub const DARK: Palette = Palette {
        background: "#1A1A1A",
        paper: "#2D2D2D",
        text_primary: "#FFFFFF",
        text_secondary: "#A0A0A0",
        primary: "#7B66FF",
        bot_bubble: "rgba(255, 255, 255, 0.05)",
        code_background: "rgba(0, 0, 0, 0.2)",
    };

    pub fn for_preference(preference: Preference) -> Self {
        if preference.dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
