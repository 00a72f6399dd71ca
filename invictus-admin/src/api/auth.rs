//! Store credentials.
//!
//! The admin jobs authenticate with a short-lived OAuth bearer token minted
//! outside the binary (`gcloud auth print-access-token`) and passed through
//! the environment together with the project ID. `.env` files are honored
//! by `main` before this module reads anything.

use anyhow::{Context, Result};

pub const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";
pub const ACCESS_TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";

/// Project identity and bearer token shared by every client.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub project_id: String,
    pub access_token: String,
}

impl Credentials {
    /// Read credentials from the environment.
    pub fn from_env() -> Result<Self> {
        let project_id = std::env::var(PROJECT_ID_VAR)
            .with_context(|| format!("{PROJECT_ID_VAR} is not set"))?;
        let access_token = std::env::var(ACCESS_TOKEN_VAR)
            .with_context(|| format!("{ACCESS_TOKEN_VAR} is not set"))?;
        Ok(Self {
            project_id,
            access_token,
        })
    }
}
