//! `create-logins`: provision login identities plus root user documents.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use colored::*;
use serde_json::json;

use crate::api::{FirestoreClient, IdentityClient, NewLogin, Operation, ProvisionOutcome};
use crate::config;
use crate::import::grid::CellGrid;
use crate::import::members::member_columns;
use crate::services::ident;

pub async fn handle_create_logins(
    client: &FirestoreClient,
    identity: &IdentityClient,
    file: &Path,
) -> Result<()> {
    println!("Reading {}...", file.display());
    let grid = CellGrid::from_csv_path(file)?;

    let mut created = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for (_, display_name) in member_columns(&grid) {
        let uid = ident::normalize(&display_name);
        let email = format!("{}@{}", uid, config::EMAIL_DOMAIN);
        println!("Processing: {} ({})...", display_name, email.dimmed());

        let login = NewLogin {
            uid: &uid,
            email: &email,
            password: config::DEFAULT_PASSWORD,
            display_name: &display_name,
        };
        match identity.create_login(&login).await? {
            ProvisionOutcome::Created => {
                // Root user document mirrors the login identity.
                let fields = json!({
                    "email": email,
                    "displayName": display_name,
                    "createdAt": Utc::now().to_rfc3339(),
                });
                let path = format!("{}/{}", config::USERS_COLLECTION, uid);
                client.commit(&[Operation::set_merge(path, fields)]).await?;
                println!("   {} created login {}", "ok:".bright_green(), uid);
                created += 1;
            }
            ProvisionOutcome::AlreadyExists => {
                println!("   {} login {} already exists", "skip:".yellow(), uid);
                skipped += 1;
            }
            ProvisionOutcome::Failed(reason) => {
                log::error!("could not provision '{}': {}", display_name, reason);
                failed += 1;
            }
        }
    }

    println!(
        "\nFinished: {} created, {} skipped, {} failed.",
        created, skipped, failed
    );
    Ok(())
}
