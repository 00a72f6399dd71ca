//! Shared domain services used by more than one job.

pub mod ident;
pub mod players;
