//! chatfold-tui: terminal chat view over collapsed messages.
//!
//! Theming in `theme`; per-message rendering in `messages`; state and view in [state] and [view].
//! Run with [run_viewer].

pub mod messages;
pub mod run;
pub mod state;
pub mod style;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{handle_key, run_viewer, KeyOutcome};
pub use state::{ChatView, ViewEvent};
pub use view::{collapsed_lines, draw as draw_view, plain_lines};
