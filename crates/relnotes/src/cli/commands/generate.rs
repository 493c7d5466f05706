//! Generate command

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use relnotes_changelog::{ChangelogGenerator, CommitRecord};
use relnotes_core::config::{load_config_or_default, ChangelogConfig, Config};
use relnotes_core::workflow::write_changelog;
use relnotes_core::{ChangelogError, ChangelogKind, RelnotesError};
use relnotes_git::GitRepo;

use crate::cli::{output, Cli, OutputFormat};

/// Generate a changelog
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Title of the changelog, usually the release tag
    #[arg(long)]
    pub title: Option<String>,

    /// Prefix for commit links (the commit hash is appended)
    #[arg(long, value_name = "URL")]
    pub link_prefix: Option<String>,

    /// Changelog kind: standard, conventional, 0 or 1
    #[arg(long)]
    pub kind: Option<ChangelogKind>,

    /// Take commits since this revision instead of the latest release
    #[arg(long, value_name = "REV", conflicts_with = "input")]
    pub since: Option<String>,

    /// Read commits from a JSON file (`-` for stdin) instead of git
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write to file (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Output file (defaults to configured changelog file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            since = ?self.since,
            input = ?self.input,
            write = self.write,
            "executing generate command"
        );
        let cwd = std::env::current_dir()?;
        let (mut config, config_path) = load_config_or_default(&cwd)?;
        if let Some(path) = &config_path {
            debug!(path = %path.display(), "using config file");
        }
        config.apply_env();
        self.apply_overrides(&mut config.changelog);

        let commits = match &self.input {
            Some(path) => read_commits(path)?,
            None => self.git_commits(cli, &cwd, &mut config)?,
        };

        if commits.is_empty() {
            if !cli.quiet {
                output::warning("No commits found since last release.");
            }
            return Ok(());
        }

        let generator = ChangelogGenerator::new(config.changelog.clone());
        let changelog = generator.generate(&commits);

        if self.write {
            let output_path = self
                .output
                .clone()
                .unwrap_or_else(|| cwd.join(&config.changelog.file));

            write_changelog(&output_path, &generator.format(&changelog), true)?;

            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {}",
                    style(output_path.display()).cyan()
                ));
            }
        } else {
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&changelog)?);
                }
                OutputFormat::Text => {
                    println!("{}", generator.format(&changelog));
                }
            }
        }

        Ok(())
    }

    /// Command-line flags win over the config file and environment
    fn apply_overrides(&self, changelog: &mut ChangelogConfig) {
        if let Some(title) = &self.title {
            changelog.title = Some(title.clone());
        }
        if let Some(prefix) = &self.link_prefix {
            changelog.commit_link_prefix = Some(prefix.clone());
        }
        if let Some(kind) = self.kind {
            changelog.kind = kind;
        }
    }

    fn git_commits(
        &self,
        cli: &Cli,
        cwd: &Path,
        config: &mut Config,
    ) -> anyhow::Result<Vec<CommitRecord>> {
        let repo = GitRepo::discover(cwd)?;

        if config.changelog.repository.is_none() {
            config.changelog.repository =
                repo.github_repository(&config.git.remote).ok().flatten();
        }

        let commits = match &self.since {
            Some(rev) => repo.commits_since(rev)?,
            None => {
                let (release, commits) =
                    repo.release_commits(config.git.tag_pattern.as_deref())?;
                if cli.verbose {
                    match &release {
                        Some(tag) => output::info(&format!("Latest release: {}", tag.name)),
                        None => output::info("No release found, using HEAD only"),
                    }
                }
                commits
            }
        };

        Ok(commits.iter().map(CommitRecord::from).collect())
    }
}

/// Read a JSON array of commit records from `path`, or stdin for `-`
pub fn read_commits(path: &Path) -> Result<Vec<CommitRecord>, RelnotesError> {
    let input_failed = |reason: String| ChangelogError::InputFailed {
        path: path.to_path_buf(),
        reason,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| input_failed(e.to_string()))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| input_failed(e.to_string()))?
    };

    let commits: Vec<CommitRecord> =
        serde_json::from_str(&content).map_err(|e| input_failed(e.to_string()))?;
    debug!(count = commits.len(), path = %path.display(), "read commits from input");
    Ok(commits)
}
