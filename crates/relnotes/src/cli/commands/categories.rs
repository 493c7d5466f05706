//! Categories command

use clap::Args;
use console::style;

use relnotes_changelog::CONVENTIONAL_CATEGORIES;

use crate::cli::{Cli, OutputFormat};

/// List the commit categories in priority order
#[derive(Debug, Args)]
pub struct CategoriesCommand {}

impl CategoriesCommand {
    /// Execute the categories command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&CONVENTIONAL_CATEGORIES)?);
            }
            OutputFormat::Text => {
                for category in CONVENTIONAL_CATEGORIES.iter() {
                    println!(
                        "{:>2}. {:<10} {}",
                        category.order() + 1,
                        style(category.token()).cyan(),
                        category.title()
                    );
                }
            }
        }

        Ok(())
    }
}
