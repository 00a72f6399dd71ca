//! `import-lineups`: spreadsheet export -> member documents with lineups.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use colored::*;

use crate::api::{FirestoreClient, Operation, Operations};
use crate::config;
use crate::import::grid::CellGrid;
use crate::import::lineup::verify_layout;
use crate::import::members::{build_member, member_columns};
use crate::services::players::PlayerLookup;

pub async fn handle_import_lineups(
    client: &FirestoreClient,
    file: &Path,
    league_id: &str,
) -> Result<()> {
    println!("Fetching player database...");
    let players = PlayerLookup::load(client).await?;
    println!("   Mapped {} player names.", players.len().to_string().cyan());

    println!("Reading {}...", file.display());
    let grid = CellGrid::from_csv_path(file)?;
    verify_layout(&grid)?;

    // One join timestamp for the whole run, so a rerun with an unchanged
    // sheet differs only in this field.
    let joined_at = Utc::now().to_rfc3339();

    let mut operations = Operations::new();
    for (column, display_name) in member_columns(&grid) {
        let member = build_member(&grid, column, &display_name, &players, &joined_at);
        log::debug!("queued member '{}' -> {}", member.username, member.member_id);
        let path = format!(
            "{}/{}/{}/{}",
            config::LEAGUES_COLLECTION,
            league_id,
            config::MEMBERS_SUBCOLLECTION,
            member.member_id
        );
        operations.push(Operation::set_merge(path, member.fields));
    }

    if operations.is_empty() {
        println!("{}", "No members found in the sheet; nothing to import.".yellow());
        return Ok(());
    }

    let committed = client.commit_all(&operations).await?;
    println!(
        "\n{} Imported {} members into league {}.",
        "SUCCESS:".bright_green().bold(),
        committed,
        league_id
    );
    Ok(())
}
