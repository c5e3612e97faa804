//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Show debug output, including skipped records
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// enable sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example:
    ///   folio build --base-url "https://jacob.example.com"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Export content data, render published posts and write the sitemap
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print content as JSON
    Query {
        #[command(subcommand)]
        target: QueryTarget,
    },
}

/// What `folio query` prints
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Hero section
    Hero,
    /// About page
    About,
    /// Experience timeline, by sort order
    Experiences,
    /// Projects, by sort order
    Projects,
    /// Published posts, newest first
    Posts,
    /// Distinct tags of published posts
    Tags,
    /// One published post with its body
    Post { slug: String },
    /// Older and newer neighbours of a post
    Adjacent { slug: String },
    /// Table of contents of a post
    Toc { slug: String },
    /// Published posts carrying a tag
    Tag { tag: String },
    /// Published posts matching a query
    Search { query: String },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
