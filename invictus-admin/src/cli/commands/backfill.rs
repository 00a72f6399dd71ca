//! `backfill-members`: recompute each league's denormalized member list.

use anyhow::Result;
use colored::*;
use serde_json::json;

use crate::api::{FirestoreClient, Operation};
use crate::config;

/// Masked update recomputing a league's membership fields, or `None` when
/// the league has no members and must be left untouched.
///
/// Member IDs are written in listing order, so unchanged membership always
/// produces an identical update.
pub fn league_update(league_id: &str, member_ids: &[String]) -> Option<Operation> {
    if member_ids.is_empty() {
        return None;
    }
    let path = format!("{}/{}", config::LEAGUES_COLLECTION, league_id);
    Some(Operation::update_fields(
        path,
        json!({ "memberIDs": member_ids, "memberCount": member_ids.len() }),
    ))
}

pub async fn handle_backfill_members(client: &FirestoreClient) -> Result<()> {
    println!("Scanning all leagues...");
    let leagues = client.list_document_ids(config::LEAGUES_COLLECTION).await?;

    let mut updated = 0usize;
    let mut skipped = 0usize;

    for league_id in &leagues {
        let members_path = format!(
            "{}/{}/{}",
            config::LEAGUES_COLLECTION,
            league_id,
            config::MEMBERS_SUBCOLLECTION
        );
        let member_ids = client.list_document_ids(&members_path).await?;

        match league_update(league_id, &member_ids) {
            Some(update) => {
                client.commit(&[update]).await?;
                println!(
                    "   {} {}: {} member IDs",
                    "updated".bright_green(),
                    league_id,
                    member_ids.len()
                );
                updated += 1;
            }
            None => {
                println!("   {} {}: no members found", "skipped".yellow(), league_id);
                skipped += 1;
            }
        }
    }

    println!(
        "\nFinished: updated {} leagues, skipped {} empty.",
        updated, skipped
    );
    Ok(())
}
