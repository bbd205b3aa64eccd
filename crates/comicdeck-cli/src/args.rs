use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "comicdeck")]
#[command(about = "Browse a comic catalog from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (config.toml, comicdeck.log). Defaults to COMICDECK_PATH or the XDG data dir
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Catalog backend base address. Defaults to COMICDECK_API_URL, then config.toml
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive catalog browser (default)
    Browse,

    /// Fetch the catalog once and print it
    List {
        #[arg(long, short)]
        query: Option<String>,

        #[arg(long, short)]
        genre: Option<String>,
    },

    /// Print the genre facets of the (optionally filtered) catalog
    Genres {
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Print the full detail of one comic
    Show {
        /// Comic identifier as sent by the catalog
        id: String,

        #[arg(long, short)]
        query: Option<String>,

        #[arg(long, short)]
        genre: Option<String>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Write a default config.toml into the data directory
    Init {
        #[arg(long)]
        force: bool,
    },
}
