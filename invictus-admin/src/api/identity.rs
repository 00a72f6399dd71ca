//! Login identity provisioning via the Identity Toolkit API.

use anyhow::{Context, Result};
use serde_json::{Value, json};

use super::auth::Credentials;

const IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";

/// Outcome of provisioning one login identity.
///
/// `AlreadyExists` is an expected rerun condition, counted as a skip by the
/// caller; `Failed` carries the service's reason and does not abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Parameters for one new login.
#[derive(Debug, Clone)]
pub struct NewLogin<'a> {
    pub uid: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub display_name: &'a str,
}

#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl IdentityClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Create one login identity, pre-verified and enabled.
    ///
    /// API-level rejections are folded into the returned outcome; only
    /// transport failures surface as errors and abort the run.
    pub async fn create_login(&self, login: &NewLogin<'_>) -> Result<ProvisionOutcome> {
        let url = format!(
            "{IDENTITY_BASE}/projects/{}/accounts",
            self.credentials.project_id
        );
        let body = json!({
            "localId": login.uid,
            "email": login.email,
            "password": login.password,
            "displayName": login.display_name,
            "emailVerified": true,
            "disabled": false,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.credentials.access_token)
            .json(&body)
            .send()
            .await
            .context("Failed to reach the identity service")?;

        let status = response.status();
        if status.is_success() {
            return Ok(ProvisionOutcome::Created);
        }
        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(classify_failure(status.as_u16(), &body))
    }
}

/// Map an identity-service error response onto a provisioning outcome.
fn classify_failure(status: u16, body: &Value) -> ProvisionOutcome {
    let message = body
        .pointer("/error/message")
        .and_then(Value::as_str)
        .unwrap_or("");
    match message {
        "DUPLICATE_LOCAL_ID" | "EMAIL_EXISTS" => ProvisionOutcome::AlreadyExists,
        "" => ProvisionOutcome::Failed(format!("HTTP {status}")),
        reason => ProvisionOutcome::Failed(reason.to_string()),
    }
}
