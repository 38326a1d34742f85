use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lab_core::{CategoryFilter, DifficultyFilter};

#[derive(Parser)]
#[command(name = "lab")]
#[command(about = "Browse the UI state primitives lab catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "LAB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search, filter and page through the catalog
    Query(QueryArgs),

    /// Show a single topic
    Show {
        /// Topic id (e.g. use-state)
        id: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the difficulty and category filter values
    Labels {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Serve the catalog as a JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(clap::Args)]
pub struct QueryArgs {
    /// Free-text search over titles, descriptions and tags
    #[arg(long, short)]
    pub search: Option<String>,

    /// Difficulty: all or 1-5
    #[arg(long, short, default_value = "all")]
    pub difficulty: DifficultyFilter,

    /// Category: all, hooks, apis or patterns
    #[arg(long, short, default_value = "all")]
    pub category: CategoryFilter,

    /// Page number (1-based)
    #[arg(long, short, default_value = "1")]
    pub page: u32,

    /// Cards per page (default from config: 6)
    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
