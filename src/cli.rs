use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wharf")]
#[command(about = "A CLI app store for Windows", long_about = None)]
pub struct Cli {
    /// No subcommand prints the banner.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the catalog API URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download and run an app's installers
    Install {
        /// App entry name in the catalog
        name: String,
    },
    /// Search the catalog by name
    Search {
        /// Search query
        query: String,
    },
    /// Show an app's catalog metadata
    About {
        /// App entry name in the catalog
        name: String,
    },
    /// Delete and recreate the local setups folder
    ClearSetups,
}
