use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotfixers - browse website packages and build a priced quote
#[derive(Parser, Debug)]
#[command(name = "hotfixers")]
#[command(about = "Browse Hotfixers website packages and configure a quote")]
#[command(version)]
pub struct Cli {
    /// Load packages and add-ons from a JSON catalog instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file (the TUI otherwise only logs warnings to stderr)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the configurator directly
    Configure {
        /// Package to preselect; unknown ids fall back to the first package
        #[arg(short, long)]
        package: Option<String>,
    },
    /// Open the details page of one package
    Details {
        /// Package id (e.g. brand-starter)
        package: String,
    },
    /// Print a quote without starting the TUI
    Quote {
        /// Base package id
        #[arg(short, long)]
        package: String,

        /// Add-on id; may repeat, and naming an id twice removes it again
        #[arg(short, long = "addon")]
        addons: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the catalog
    Catalog {
        /// Emit the catalog document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a catalog JSON file
    Validate {
        /// Path to the catalog file
        file: PathBuf,
    },
    /// Write the built-in catalog to a JSON file
    ExportCatalog {
        /// Destination path
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
