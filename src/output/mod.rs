//! Output formatting module
//!
//! Renders the extraction summary as text or JSON.

pub mod summary;

pub use summary::{print_report, render_json, summary_line};
