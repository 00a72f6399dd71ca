//! One handler per subcommand.

pub mod backfill;
pub mod import;
pub mod logins;
