//! Dialog components for TUI

mod base;
mod confirm_dialog;

pub use confirm_dialog::render_reset_dialog;
