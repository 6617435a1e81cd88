//! Dialog components for TUI

mod base;
mod error_dialog;
mod summary_dialog;

pub use error_dialog::render_error_dialog;
pub use summary_dialog::render_summary_dialog;
