//! segshuf - Segment Shuffler CLI

mod commands;

use anyhow::Result;
use clap::Parser;

use segshuf::cli::{Cli, Commands, ConfigCommands, OverrideCommands};
use segshuf::tui::set_theme;
use segshuf::Config;

fn main() -> Result<()> {
    segshuf::logging::init();
    let cli = Cli::parse();

    // A broken config file must not block `config edit`
    match Config::load() {
        Ok(config) => set_theme(config.theme()),
        Err(e) => tracing::warn!(error = %e, "could not load config for theme"),
    }

    match cli.command {
        Commands::Play {
            video,
            segments,
            seed,
            shuffle,
        } => commands::play::handle(&video, segments.as_deref(), seed, shuffle),
        Commands::List {
            video,
            segments,
            json,
        } => commands::list::handle(&video, segments.as_deref(), json),
        Commands::Videos { segments } => commands::videos::handle(segments.as_deref()),
        Commands::Override(cmd) => match cmd {
            OverrideCommands::Set { video, file } => commands::overrides::handle_set(&video, &file),
            OverrideCommands::Remove { video } => commands::overrides::handle_remove(&video),
            OverrideCommands::List => commands::overrides::handle_list(),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
