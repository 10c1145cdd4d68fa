// SPDX-FileCopyrightText: The verstr authors
// SPDX-License-Identifier: MPL-2.0

//! Print the version string of a repository.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use verstr::conf::DocsConfig;

#[derive(Debug, Parser)]
#[command(name = "verstr", version)]
#[command(about = "Derive a version string from the tags and commits of a Git repository")]
struct Cli {
    /// Path inside the repository
    #[arg(long, env = "VERSTR_REPO", default_value = ".")]
    repo: PathBuf,

    /// Omit the `dev_<short-id>` suffix
    #[arg(long)]
    no_prerelease: bool,

    /// Omit the commit date
    #[arg(long)]
    no_date: bool,

    /// Bind the version to this documentation config and print it instead
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");
    run(&cli, &mut io::stdout().lock())
}

/// Resolve the version and write it, or the config with the version bound.
///
/// Nothing is written if resolution fails.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let version = verstr::resolve_repository(&cli.repo, !cli.no_prerelease, !cli.no_date)
        .with_context(|| format!("failed to resolve version of '{}'", cli.repo.display()))?;

    let output = if let Some(path) = &cli.config {
        let mut conf = DocsConfig::load(path)?;
        conf.bind_version(&version);
        conf.to_toml_string()?
    } else {
        version
    };

    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
