//! Segment Shuffler
//!
//! Jump between the named time segments of a video, in list order or
//! shuffled, with automatic advance when a segment ends.
//!
//! The core is [`navigator::SegmentNavigator`]; [`session`] binds it to a
//! [`player::PlayerHandle`] and a [`segment::SegmentSource`], and [`tui`]
//! presents it as a terminal panel.

pub mod cli;
pub mod config;
pub mod logging;
pub mod navigator;
pub mod player;
pub mod poller;
pub mod segment;
pub mod session;
pub mod tui;

pub use config::Config;
pub use navigator::{NavError, SegmentNavigator};
pub use segment::Segment;
pub use tui::theme;
