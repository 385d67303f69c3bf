pub mod about;
pub mod catalog;
pub mod cli;
pub mod downloader;
pub mod installer;
pub mod logger;
pub mod panel;
pub mod runner;
pub mod search;
pub mod walker;

use clap::Parser;
use cli::{Cli, Commands};
use logger::Logger;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        Logger::banner();
        return;
    };

    let client = catalog::CatalogClient::new(cli.api_url.as_deref());

    let result = match command {
        Commands::Install { name } => installer::install(&client, name).await,
        Commands::Search { query } => search::search(&client, query).await,
        Commands::About { name } => {
            let folder = format!("{}/{}", catalog::DATABASE_FOLDER, name);
            about::present(&client, client.http(), &folder).await
        }
        Commands::ClearSetups => installer::clear_setups(),
    };

    // Every collaborator failure lands here as one uniform line; no raw
    // backtraces, no special exit codes.
    if let Err(err) = result {
        Logger::error(format!("{err:#}"));
    }
}
