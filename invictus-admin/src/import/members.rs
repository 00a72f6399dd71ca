//! Member discovery and record assembly from the scoring sheet.

use serde_json::{Map, Value, json};

use super::grid::{CellGrid, is_empty_cell};
use super::lineup::{SCORING_PERIODS, extract_lineup};
use crate::services::ident;
use crate::services::players::PlayerLookup;

/// One member column resolved into a ready-to-write record.
#[derive(Debug, Clone)]
pub struct MemberRecord {
    /// Document ID derived from the display name.
    pub member_id: String,
    pub username: String,
    /// Full member document body, lineups included.
    pub fields: Value,
}

/// Display-name columns of the sheet: 1, 3, 5, ... The alternating columns
/// hold per-slot point values this importer does not consume.
///
/// Columns whose row-0 cell is blank or the `"0"` sentinel are skipped.
pub fn member_columns(grid: &CellGrid) -> Vec<(usize, String)> {
    let mut columns = Vec::new();
    for column in (1..grid.column_count()).step_by(2) {
        let cell = grid.get(0, column);
        if is_empty_cell(cell) {
            continue;
        }
        columns.push((column, cell.unwrap_or_default().trim().to_string()));
    }
    columns
}

/// Assemble the member record for one retained column: username, join
/// timestamp, zeroed running score, and one lineup per scoring period.
pub fn build_member(
    grid: &CellGrid,
    column: usize,
    display_name: &str,
    players: &PlayerLookup,
    joined_at: &str,
) -> MemberRecord {
    let member_id = ident::normalize(display_name);

    let mut fields = Map::new();
    fields.insert("username".to_string(), json!(display_name));
    fields.insert("joinedAt".to_string(), json!(joined_at));
    fields.insert("scores".to_string(), json!({ "Total": 0.0 }));
    for period in SCORING_PERIODS {
        fields.insert(
            period.field.to_string(),
            extract_lineup(grid, column, period.start_row, players),
        );
    }

    MemberRecord {
        member_id,
        username: display_name.to_string(),
        fields: Value::Object(fields),
    }
}
