//! Fixed run parameters.
//!
//! These are run-once administrative jobs: everything that is not a
//! deployment secret is a source constant, overridable per run only where
//! the CLI exposes a flag.

/// League the lineup import targets when `--league` is not given.
pub const DEFAULT_LEAGUE_ID: &str = "wtnd5Y0t5Tf4qFjc11DW";

/// Scoring-sheet export consumed when `--file` is not given.
pub const DEFAULT_CSV_FILE: &str =
    "Fantasy Football 2026 - Divisional Round - Results.xlsx - Scoring.csv";

/// Initial password for every provisioned login.
pub const DEFAULT_PASSWORD: &str = "Touchdown2026";

/// Domain of the synthesized login emails (`{member-id}@{domain}`).
pub const EMAIL_DOMAIN: &str = "invictus.com";

pub const PLAYERS_COLLECTION: &str = "players";
pub const USERS_COLLECTION: &str = "users";
pub const LEAGUES_COLLECTION: &str = "leagues";
pub const MEMBERS_SUBCOLLECTION: &str = "Members";
