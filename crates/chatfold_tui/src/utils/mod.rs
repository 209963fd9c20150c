//! Shared utilities for the chat view.
//!
//! - **[constants]**: Spacing and padding constants.
//! - **[format]**: Word wrapping and truncation.

mod constants;
mod format;

pub use constants::*;
pub use format::{truncate_ellipsis, wrap_lines};
