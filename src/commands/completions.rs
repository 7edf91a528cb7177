//! Shell completions

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use segshuf::cli::Cli;

/// Write the completion script for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "segshuf", &mut io::stdout());
    Ok(())
}
