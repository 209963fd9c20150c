//! Chat theme: semantic color palette for the chat view.
//!
//! ```ignore
//! use chatfold_tui::theme::{Appearance, ChatPalette};
//!
//! let palette = ChatPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::ChatPalette;
pub use rgb::Rgb;
