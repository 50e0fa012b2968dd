use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use compliance_markup::ProjectionMode;

/// Compliance Markup - resolve parameters from compliance profiles
#[derive(Parser, Debug)]
#[command(name = "compliance-markup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./compliance_markup.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output JSON instead of YAML
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where documents, facts and modules come from; overrides the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Active profile, repeatable; earlier profiles take precedence
    #[arg(short, long = "profile")]
    pub profiles: Vec<String>,

    /// YAML or JSON file of node facts
    #[arg(long)]
    pub facts: Option<PathBuf>,

    /// Compliance data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory of installed modules, repeatable
    #[arg(long = "module-path")]
    pub module_paths: Vec<PathBuf>,

    /// Additional document file or directory, repeatable
    #[arg(long = "extra-path")]
    pub extra_paths: Vec<PathBuf>,

    /// Lookup projection: value or metadata
    #[arg(long)]
    pub mode: Option<ProjectionMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a single key for the active profiles
    Lookup {
        /// Parameter or debug key
        key: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List every profile in the merged catalog
    Profiles {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the merged catalog
    Dump {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print every parameter the active profiles resolve
    Params {
        #[command(flatten)]
        source: SourceArgs,
    },
}
