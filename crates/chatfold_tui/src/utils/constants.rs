//! Spacing and sizing constants for the chat view.

/// Left indent for continuation lines and tool chips (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Height of the composer box, borders included.
pub const COMPOSER_HEIGHT: u16 = 3;

/// Lines scrolled per PageUp/PageDown.
pub const PAGE_SCROLL_LINES: usize = 5;
