//! TUI (Text User Interface) module for segshuf
//!
//! The terminal stands in for the host page: [`App`] mounts the panel and
//! [`PanelApp`] renders the segment list and turns key presses into intents.

pub mod app;
pub mod panel;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use panel::{InputResult, PanelApp};
pub use theme::{current_theme, set_theme, Theme};
