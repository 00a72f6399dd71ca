//! Command-line interface definitions.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;

#[derive(Parser)]
#[command(
    name = "invictus-admin",
    about = "Administrative batch jobs for the Invictus fantasy-football backend",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import scored lineups from a spreadsheet export into a league
    ImportLineups {
        /// Scoring-sheet CSV export to read
        #[arg(long, default_value = config::DEFAULT_CSV_FILE)]
        file: PathBuf,
        /// League document ID to import into
        #[arg(long, default_value = config::DEFAULT_LEAGUE_ID)]
        league: String,
    },
    /// Provision login identities for every member in the spreadsheet
    CreateLogins {
        /// Scoring-sheet CSV export to read
        #[arg(long, default_value = config::DEFAULT_CSV_FILE)]
        file: PathBuf,
    },
    /// Recompute each league's denormalized member list from its subcollection
    BackfillMembers,
}
