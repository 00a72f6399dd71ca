//! Run-once administrative jobs for the Invictus fantasy-football backend.

mod api;
mod cli;
mod config;
mod import;
mod services;

use anyhow::Result;
use clap::Parser;

use crate::api::{Credentials, FirestoreClient, IdentityClient};
use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let credentials = Credentials::from_env()?;
    let client = FirestoreClient::new(credentials.clone());

    match cli.command {
        Commands::ImportLineups { file, league } => {
            cli::commands::import::handle_import_lineups(&client, &file, &league).await
        }
        Commands::CreateLogins { file } => {
            let identity = IdentityClient::new(credentials);
            cli::commands::logins::handle_create_logins(&client, &identity, &file).await
        }
        Commands::BackfillMembers => {
            cli::commands::backfill::handle_backfill_members(&client).await
        }
    }
}
