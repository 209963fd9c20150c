//! Chat palette: the semantic color roles the chat view draws with.

use super::Appearance;
use super::rgb::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatPalette {
    pub background: Rgb,
    pub border: Rgb,
    pub border_focused: Rgb,

    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    /// Background of tool chips and the user bubble border.
    pub chip_background: Rgb,
}

impl ChatPalette {
    pub fn dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            border: Rgb(28, 30, 42),
            border_focused: Rgb(99, 148, 255),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            text_disabled: Rgb(61, 65, 102),
            accent: Rgb(99, 148, 255),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
            warning: Rgb(240, 185, 100),
            chip_background: Rgb(26, 27, 38),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            border: Rgb(229, 229, 229),
            border_focused: Rgb(122, 162, 247),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            text_disabled: Rgb(161, 161, 170),
            accent: Rgb(122, 162, 247),
            danger: Rgb(247, 118, 142),
            success: Rgb(158, 206, 106),
            warning: Rgb(224, 175, 104),
            chip_background: Rgb(240, 240, 240),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

impl Default for ChatPalette {
    fn default() -> Self {
        Self::dark()
    }
}
