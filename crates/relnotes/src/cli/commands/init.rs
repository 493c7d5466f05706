//! Init command

use clap::Args;
use console::style;
use tracing::info;

use relnotes_core::config::write_default_config;

use crate::cli::{output, Cli};

/// Write a default relnotes configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;

        let path = write_default_config(&cwd, self.force)?;

        if !cli.quiet {
            output::success(&format!(
                "Configuration written to {}",
                style(path.display()).cyan()
            ));
        }

        Ok(())
    }
}
