//! Player reference data and free-text name resolution.
//!
//! The import job fetches the `players` collection once at startup and
//! builds a name -> document ID lookup consulted for every lineup cell.

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;

use crate::api::FirestoreClient;
use crate::config;

/// Sheet value meaning a slot was deliberately left open.
const NO_PLAYER_SENTINEL: &str = "no player selected";

/// Roster position of a player record. The store holds free-form strings;
/// only `DEF` changes how lookup keys are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    #[serde(other)]
    Other,
}

/// One record of the `players` collection, as read from the store.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "longName", default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Immutable name -> player ID lookup built once per run.
#[derive(Debug, Default)]
pub struct PlayerLookup {
    keys: HashMap<String, String>,
}

/// Lowercased, trimmed form used for every lookup key and query.
fn clean(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Defense lookup key: last word of the team name, with the literal
/// `" Defense"` suffix stripped first ("Houston Texans Defense" -> "texans").
fn defense_team_key(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let base = trimmed.strip_suffix(" Defense").unwrap_or(trimmed);
    base.split_whitespace().last().map(|word| word.to_lowercase())
}

/// Register every lookup key one player record contributes.
///
/// A record yields up to four keys: its name, its long name, and for
/// defenses the team abbreviation and the short team name. Insertion is
/// last-record-wins on key collisions; nothing detects them.
fn register(record: &PlayerRecord, id: &str, keys: &mut HashMap<String, String>) {
    if let Some(name) = &record.name {
        keys.insert(clean(name), id.to_string());
    }
    if let Some(long_name) = &record.long_name {
        keys.insert(clean(long_name), id.to_string());
    }
    if record.position == Some(Position::DEF) {
        if let Some(team) = &record.team {
            keys.insert(clean(team), id.to_string());
        }
        if let Some(name) = &record.name {
            if let Some(team_word) = defense_team_key(name) {
                keys.insert(team_word, id.to_string());
            }
        }
    }
}

impl PlayerLookup {
    /// Fetch the whole `players` collection and build the lookup.
    ///
    /// One logical pass; a fetch failure aborts the run.
    pub async fn load(client: &FirestoreClient) -> Result<Self> {
        let documents = client.list_collection(config::PLAYERS_COLLECTION).await?;

        let mut keys = HashMap::new();
        for document in &documents {
            let record: PlayerRecord = match serde_json::from_value(document.to_json()) {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("skipping malformed player record '{}': {}", document.id(), err);
                    continue;
                }
            };
            register(&record, document.id(), &mut keys);
        }

        log::info!("mapped {} player names from {} records", keys.len(), documents.len());
        Ok(Self { keys })
    }

    /// Build a lookup directly from key/ID pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            keys: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Resolve a raw sheet cell to a player document ID.
    ///
    /// Returns `None` for blank cells, the `"0"` sentinel, and the literal
    /// "No Player Selected". Otherwise tries an exact key match, then a
    /// ranked substring fallback: among keys that contain the query (or are
    /// contained by it), the shortest key wins, with ties broken by the
    /// lexicographically smallest key, so reruns resolve identically.
    /// A miss is logged and written as an explicitly empty slot upstream.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let cleaned = clean(raw);
        if cleaned.is_empty() || cleaned == "0" || cleaned == NO_PLAYER_SENTINEL {
            return None;
        }

        if let Some(id) = self.keys.get(&cleaned) {
            return Some(id);
        }

        let mut best: Option<&str> = None;
        for key in self.keys.keys() {
            if !key.contains(&cleaned) && !cleaned.contains(key.as_str()) {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => (key.len(), key.as_str()) < (current.len(), current),
            };
            if better {
                best = Some(key);
            }
        }
        if let Some(key) = best {
            return self.keys.get(key).map(String::as_str);
        }

        log::warn!("no player ID found for \"{}\"", raw.trim());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lookup() -> PlayerLookup {
        PlayerLookup::from_pairs([
            ("patrick mahomes".to_string(), "mahomes_p".to_string()),
            ("texans".to_string(), "hou_def".to_string()),
        ])
    }

    #[test]
    fn test_exact_match() {
        let lookup = sample_lookup();
        assert_eq!(lookup.resolve("Patrick Mahomes"), Some("mahomes_p"));
        assert_eq!(lookup.resolve("  patrick mahomes  "), Some("mahomes_p"));
    }

    #[test]
    fn test_defense_resolves_via_substring_fallback() {
        let lookup = sample_lookup();
        assert_eq!(lookup.resolve("Houston Texans Defense"), Some("hou_def"));
    }

    #[test]
    fn test_sentinels_are_absent() {
        let lookup = sample_lookup();
        assert_eq!(lookup.resolve("No Player Selected"), None);
        assert_eq!(lookup.resolve("0"), None);
        assert_eq!(lookup.resolve("   "), None);
    }

    #[test]
    fn test_unknown_name_is_absent() {
        let lookup = sample_lookup();
        assert_eq!(lookup.resolve("Nonexistent Player"), None);
    }

    #[test]
    fn test_fallback_prefers_shortest_key() {
        let lookup = PlayerLookup::from_pairs([
            ("josh allen".to_string(), "allen_j".to_string()),
            ("joshua allen qb".to_string(), "allen_j2".to_string()),
        ]);
        // Both keys contain "allen"; the shorter one wins.
        assert_eq!(lookup.resolve("Allen"), Some("allen_j"));
    }

    #[test]
    fn test_fallback_ties_break_lexicographically() {
        let lookup = PlayerLookup::from_pairs([
            ("ab".to_string(), "second".to_string()),
            ("aa".to_string(), "first".to_string()),
        ]);
        // Same length, so "aa" < "ab" decides.
        assert_eq!(lookup.resolve("a"), Some("first"));
    }

    #[test]
    fn test_defense_team_key() {
        assert_eq!(
            defense_team_key("Houston Texans Defense"),
            Some("texans".to_string())
        );
        assert_eq!(defense_team_key("Bears Defense"), Some("bears".to_string()));
        assert_eq!(defense_team_key("  "), None);
    }

    #[test]
    fn test_register_keys_for_defense_record() {
        let record = PlayerRecord {
            name: Some("Houston Texans Defense".to_string()),
            long_name: None,
            position: Some(Position::DEF),
            team: Some("HOU".to_string()),
        };
        let mut keys = HashMap::new();
        register(&record, "hou_def", &mut keys);

        assert_eq!(keys.get("houston texans defense").map(String::as_str), Some("hou_def"));
        assert_eq!(keys.get("hou").map(String::as_str), Some("hou_def"));
        assert_eq!(keys.get("texans").map(String::as_str), Some("hou_def"));
    }

    #[test]
    fn test_register_last_record_wins_on_collision() {
        let first = PlayerRecord {
            name: Some("Josh Allen".to_string()),
            long_name: None,
            position: Some(Position::QB),
            team: None,
        };
        let second = PlayerRecord {
            name: Some("Josh Allen".to_string()),
            long_name: None,
            position: Some(Position::WR),
            team: None,
        };
        let mut keys = HashMap::new();
        register(&first, "allen_qb", &mut keys);
        register(&second, "allen_wr", &mut keys);

        assert_eq!(keys.get("josh allen").map(String::as_str), Some("allen_wr"));
    }

    #[test]
    fn test_position_decoding() {
        let record: PlayerRecord =
            serde_json::from_value(serde_json::json!({ "name": "Someone", "position": "FB" }))
                .unwrap();
        assert_eq!(record.position, Some(Position::Other));

        let record: PlayerRecord =
            serde_json::from_value(serde_json::json!({ "name": "Someone", "position": "DEF" }))
                .unwrap();
        assert_eq!(record.position, Some(Position::DEF));
    }
}
