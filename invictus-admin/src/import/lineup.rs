//! Lineup block layout and extraction.
//!
//! Each member column carries one nine-row lineup block per scored round.
//! The row offsets are positional: nothing else in the sheet ties a row to
//! a slot, so the layout is verified against the label column before any
//! write intent is produced.

use anyhow::{Result, bail};
use serde_json::{Map, Value, json};

use super::grid::{CellGrid, is_empty_cell};
use crate::services::players::PlayerLookup;

/// Roster slots in block order, top row first.
pub const SLOT_ORDER: [&str; 9] = ["QB", "RB1", "RB2", "WR1", "WR2", "FLEX", "TE", "DEF", "K"];

/// Expected labels in the sheet's label column (column 0), one per slot
/// row. Numbered slots appear without their index ("RB", not "RB1").
const SLOT_LABELS: [&str; 9] = ["QB", "RB", "RB", "WR", "WR", "FLEX", "TE", "DEF", "K"];

/// One scored round with its own lineup block in the sheet.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPeriod {
    /// Member-document field the lineup is stored under.
    pub field: &'static str,
    /// First sheet row of the nine-row block.
    pub start_row: usize,
}

pub const SCORING_PERIODS: [ScoringPeriod; 2] = [
    ScoringPeriod {
        field: "Wild Card Lineup",
        start_row: 1,
    },
    ScoringPeriod {
        field: "Divisional Lineup",
        start_row: 13,
    },
];

/// Check that the sheet still has the layout the extractor assumes.
///
/// A layout shifted by even one row would silently misassign every slot
/// below the shift, so a mismatch is fatal before any write.
pub fn verify_layout(grid: &CellGrid) -> Result<()> {
    for period in SCORING_PERIODS {
        let end_row = period.start_row + SLOT_LABELS.len() - 1;
        if grid.row_count() <= end_row {
            bail!(
                "scoring sheet has {} rows but the \"{}\" block needs rows {}..={}",
                grid.row_count(),
                period.field,
                period.start_row,
                end_row
            );
        }
        for (offset, expected) in SLOT_LABELS.iter().enumerate() {
            let row = period.start_row + offset;
            let label = grid.get(row, 0).unwrap_or("").trim().to_uppercase();
            if !label.starts_with(expected) {
                bail!(
                    "row {} of the \"{}\" block is labelled \"{}\", expected a {} slot",
                    row,
                    period.field,
                    label,
                    expected
                );
            }
        }
    }
    Ok(())
}

/// Extract the nine-slot lineup of one member column, reading rows
/// `start_row..=start_row + 8` in [`SLOT_ORDER`].
///
/// Unresolved and intentionally empty cells become explicit nulls, so the
/// stored lineup always carries every slot.
pub fn extract_lineup(
    grid: &CellGrid,
    column: usize,
    start_row: usize,
    players: &PlayerLookup,
) -> Value {
    let mut lineup = Map::new();
    for (offset, slot) in SLOT_ORDER.iter().enumerate() {
        let cell = grid.get(start_row + offset, column);
        let player_id = if is_empty_cell(cell) {
            None
        } else {
            cell.and_then(|raw| players.resolve(raw))
        };
        let value = match player_id {
            Some(id) => json!(id),
            None => Value::Null,
        };
        lineup.insert((*slot).to_string(), value);
    }
    Value::Object(lineup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> PlayerLookup {
        PlayerLookup::from_pairs(
            [
                ("josh allen", "qb1"),
                ("saquon barkley", "rb1"),
                ("derrick henry", "rb2"),
                ("ja'marr chase", "wr1"),
                ("justin jefferson", "wr2"),
                ("travis kelce", "te1"),
                ("george kittle", "te2"),
                ("texans", "hou_def"),
                ("harrison butker", "k1"),
            ]
            .map(|(key, id)| (key.to_string(), id.to_string())),
        )
    }

    /// A single-period grid: label column 0, players in column 1.
    fn block_rows() -> Vec<Vec<String>> {
        let rows = [
            vec!["", "Bob Smith"],
            vec!["QB", "Josh Allen"],
            vec!["RB", "Saquon Barkley"],
            vec!["RB", "Derrick Henry"],
            vec!["WR", "Ja'Marr Chase"],
            vec!["WR", "Justin Jefferson"],
            vec!["FLEX", "George Kittle"],
            vec!["TE", "Travis Kelce"],
            vec!["DEF", "Houston Texans Defense"],
            vec!["K", "Harrison Butker"],
        ];
        rows.map(|row| row.into_iter().map(String::from).collect())
            .to_vec()
    }

    #[test]
    fn test_extracts_nine_slots_in_order() {
        let grid = CellGrid::from_rows(block_rows());
        let lineup = extract_lineup(&grid, 1, 1, &lookup());
        let lineup = lineup.as_object().unwrap();

        assert_eq!(lineup.len(), 9);
        assert_eq!(lineup["QB"], json!("qb1"));
        assert_eq!(lineup["RB1"], json!("rb1"));
        assert_eq!(lineup["RB2"], json!("rb2"));
        assert_eq!(lineup["WR1"], json!("wr1"));
        assert_eq!(lineup["WR2"], json!("wr2"));
        assert_eq!(lineup["FLEX"], json!("te2"));
        assert_eq!(lineup["TE"], json!("te1"));
        assert_eq!(lineup["DEF"], json!("hou_def"));
        assert_eq!(lineup["K"], json!("k1"));
    }

    #[test]
    fn test_altering_one_row_shifts_exactly_one_slot() {
        let baseline = extract_lineup(&CellGrid::from_rows(block_rows()), 1, 1, &lookup());

        let mut rows = block_rows();
        rows[5][1] = "No Player Selected".to_string(); // WR2 row
        let changed = extract_lineup(&CellGrid::from_rows(rows), 1, 1, &lookup());

        for slot in SLOT_ORDER {
            if slot == "WR2" {
                assert_eq!(changed[slot], Value::Null);
            } else {
                assert_eq!(changed[slot], baseline[slot], "slot {} moved", slot);
            }
        }
    }

    #[test]
    fn test_empty_and_unresolved_cells_become_explicit_nulls() {
        let mut rows = block_rows();
        rows[1][1] = "0".to_string();
        rows[9][1] = "Somebody Unknown".to_string();
        let lineup = extract_lineup(&CellGrid::from_rows(rows), 1, 1, &lookup());

        assert_eq!(lineup["QB"], Value::Null);
        assert_eq!(lineup["K"], Value::Null);
        assert_eq!(lineup.as_object().unwrap().len(), 9);
    }

    /// Full-height grid with both period blocks laid out at their row
    /// constants (rows 10-12 are filler, as in the real export).
    fn full_sheet() -> Vec<Vec<String>> {
        let mut rows = block_rows();
        rows.extend(
            [
                vec!["Total", "123.4"],
                vec!["", ""],
                vec!["", "Divisional"],
            ]
            .map(|row: Vec<&str>| row.into_iter().map(String::from).collect::<Vec<_>>()),
        );
        rows.extend(block_rows().into_iter().skip(1));
        rows
    }

    #[test]
    fn test_verify_layout_accepts_expected_sheet() {
        let grid = CellGrid::from_rows(full_sheet());
        assert!(verify_layout(&grid).is_ok());
    }

    #[test]
    fn test_verify_layout_rejects_truncated_sheet() {
        let grid = CellGrid::from_rows(block_rows());
        let err = verify_layout(&grid).unwrap_err();
        assert!(err.to_string().contains("Divisional"), "{}", err);
    }

    #[test]
    fn test_verify_layout_rejects_shifted_labels() {
        let mut rows = full_sheet();
        rows.remove(2); // drop the RB1 row, shifting everything below up
        let grid = CellGrid::from_rows(rows);
        assert!(verify_layout(&grid).is_err());
    }
}
