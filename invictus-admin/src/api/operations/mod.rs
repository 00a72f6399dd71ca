//! Write intents and batch planning.

pub mod batch;
pub mod operation;

pub use batch::{MAX_BATCH_WRITES, Operations};
pub use operation::Operation;
