use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(author, version, about = "Cats, people and hello demo HTTP services")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Listener overrides shared by every service command.
#[derive(clap::Args, Debug, Clone)]
pub struct ListenArgs {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the cats service
    Cats {
        #[command(flatten)]
        listen: ListenArgs,

        /// SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Run the people service
    People {
        #[command(flatten)]
        listen: ListenArgs,

        /// SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,

        /// Do not insert the example people into an empty table
        #[arg(long)]
        no_seed: bool,
    },

    /// Run the hello service
    Hello {
        #[command(flatten)]
        listen: ListenArgs,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
