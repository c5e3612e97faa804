//! Folio - content pipeline for a personal portfolio and blog.

mod build;
mod cli;
mod config;
mod generator;
mod init;
mod logger;
mod query;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{ContentSource, SiteConfig};
use folio_content::Content;
use init::new_site;
use query::run_query;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    logger::init(cli.verbose);
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Init { .. } => new_site(config),
        Commands::Build { .. } => build_site(config, &load_content(config)?),
        Commands::Query { target } => run_query(&load_content(config)?, target),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Open the configured content source.
fn load_content(config: &SiteConfig) -> Result<Content> {
    match config.content.source {
        ContentSource::Files => {
            let dir = &config.content.dir;
            if !dir.is_dir() {
                log!("warn"; "content directory `{}` not found, using defaults", dir.display());
            }
            Ok(Content::from_files(dir))
        }
        ContentSource::Snapshot => {
            let path = &config.content.snapshot;
            log!("content"; "snapshot {}", path.display());
            Content::from_snapshot(path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))
        }
    }
}
