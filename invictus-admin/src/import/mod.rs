//! Spreadsheet import pipeline: grid -> walker -> resolver -> write intents.

pub mod grid;
pub mod lineup;
pub mod members;
