//! Command-line interface definitions
//!
//! Kept in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string with the git SHA on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SEGSHUF_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SEGSHUF_BUILD_DATE"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "segshuf",
    version = VERSION,
    about = "Segment Shuffler - jump between named segments of a video, in order or shuffled",
    long_about = "Segment Shuffler - jump between named segments of a video, \
        in order or shuffled.\n\n\
        Segments come from a JSON dataset keyed by video id, with per-video\n\
        override files taking precedence. `segshuf play` opens an interactive\n\
        panel that seeks a simulated player between segments."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the segment panel for a video
    #[command(long_about = "Open the segment panel for a video.\n\n\
        VIDEO is a video id or a watch URL. Press ? inside the panel for keys.")]
    Play {
        /// Video id or URL
        #[arg(value_name = "VIDEO")]
        video: String,
        /// Dataset file to use instead of the configured one
        #[arg(long, value_name = "FILE")]
        segments: Option<PathBuf>,
        /// Seed for shuffle order (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Start in shuffle mode
        #[arg(long)]
        shuffle: bool,
    },

    /// List the segments of a video
    List {
        /// Video id or URL
        #[arg(value_name = "VIDEO")]
        video: String,
        /// Dataset file to use instead of the configured one
        #[arg(long, value_name = "FILE")]
        segments: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List video ids that have segments
    Videos {
        /// Dataset file to use instead of the configured one
        #[arg(long, value_name = "FILE")]
        segments: Option<PathBuf>,
    },

    /// Manage per-video segment overrides
    #[command(subcommand)]
    Override(OverrideCommands),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum OverrideCommands {
    /// Store segments for a video from a JSON file (an array of segments)
    Set {
        /// Video id or URL
        #[arg(value_name = "VIDEO")]
        video: String,
        /// JSON file with `[{"title", "startTime", "endTime"}, ...]`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Delete the override for a video
    Remove {
        /// Video id or URL
        #[arg(value_name = "VIDEO")]
        video: String,
    },
    /// List videos with an override
    List,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}
