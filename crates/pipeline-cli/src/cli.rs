//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pipeline - Resolve layered configuration and load pipeline plugins
#[derive(Parser, Debug)]
#[command(name = "pipeline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where configuration layers come from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Configuration files (YAML, JSON or TOML), merged in order
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Override a value, e.g. --set outputs.path=/tmp (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Only refine keys that earlier layers already define
    #[arg(long)]
    pub no_new_keys: bool,

    /// Skip the per-user configuration file
    #[arg(long)]
    pub no_user_config: bool,

    /// Directory holding the per-user configuration file
    #[arg(long, env = "PIPELINE_CONFIG_DIR", value_name = "DIR")]
    pub user_config_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the merged configuration
    ///
    /// Examples:
    ///   pipeline resolve -c base.yaml -c site.yaml
    ///   pipeline resolve -c base.yaml --set outputs.format=json --json
    Resolve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Print one dotted key of the merged configuration
    Get {
        /// Dotted key, e.g. outputs.path
        key: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Load a plugin section and list the plugins in order
    ///
    /// Examples:
    ///   pipeline plugins extractors -c pipeline.yaml
    ///   pipeline plugins steps --category pre_processors -c pipeline.yaml
    Plugins {
        /// Name of the configuration section
        section: String,

        /// Plugin category to resolve names in (defaults to the section name)
        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List available plugins
    List {
        /// Only show one category
        #[arg(long)]
        category: Option<String>,
    },

    /// List YAML description files under a directory
    Files {
        /// Root directory to search
        dir: PathBuf,
    },
}
