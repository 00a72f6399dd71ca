//! Firestore and Identity Toolkit REST clients.
//!
//! Clients are constructed explicitly in `main` and passed into each job;
//! there is no process-wide connection state.

pub mod auth;
pub mod client;
pub mod identity;
pub mod models;
pub mod operations;

pub use auth::Credentials;
pub use client::FirestoreClient;
pub use identity::{IdentityClient, NewLogin, ProvisionOutcome};
pub use models::Document;
pub use operations::{MAX_BATCH_WRITES, Operation, Operations};
