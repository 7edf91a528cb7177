//! TUI widgets for segshuf
//!
//! Reusable pieces of the panel.

pub mod segment_list;

pub use segment_list::{build_segment_items, segment_row_text};
