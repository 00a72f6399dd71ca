//! Firestore REST client.
//!
//! One explicitly constructed client handle per process, passed by
//! reference into each job. All I/O is sequential awaits on the sole task;
//! any transport or API failure propagates and aborts the run.

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use super::auth::Credentials;
use super::models::{self, Document, ListDocumentsResponse};
use super::operations::{Operation, Operations};

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

/// Documents fetched per list request; listing loops until the server
/// stops returning a page token.
const PAGE_SIZE: usize = 300;

#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl FirestoreClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Root of the database's document tree in request URLs.
    fn documents_root(&self) -> String {
        format!(
            "{FIRESTORE_BASE}/projects/{}/databases/(default)/documents",
            self.credentials.project_id
        )
    }

    /// Full resource name of a document, as used inside request bodies.
    fn document_name(&self, path: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/{}",
            self.credentials.project_id, path
        )
    }

    /// Escape each path segment for use in a request URL.
    fn escaped_path(path: &str) -> String {
        path.split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Fetch every document of a collection: one logical pass, paginated
    /// under the hood.
    pub async fn list_collection(&self, path: &str) -> Result<Vec<Document>> {
        let url = format!("{}/{}", self.documents_root(), Self::escaped_path(path));

        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self
                .http
                .get(&url)
                .bearer_auth(&self.credentials.access_token)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request
                .send()
                .await
                .with_context(|| format!("Failed to list collection '{path}'"))?;
            let response = Self::check(response, &format!("list collection '{path}'")).await?;
            let page: ListDocumentsResponse = response
                .json()
                .await
                .with_context(|| format!("Failed to decode listing of collection '{path}'"))?;

            documents.extend(page.documents);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        log::debug!("listed {} documents from '{}'", documents.len(), path);
        Ok(documents)
    }

    /// Fetch only the document IDs of a collection, in listing order.
    pub async fn list_document_ids(&self, path: &str) -> Result<Vec<String>> {
        let documents = self.list_collection(path).await?;
        Ok(documents
            .iter()
            .map(|document| document.id().to_string())
            .collect())
    }

    /// Commit one batch of writes as a single atomic unit.
    pub async fn commit(&self, batch: &[Operation]) -> Result<()> {
        let writes: Vec<Value> = batch.iter().map(|op| self.encode_write(op)).collect();
        let url = format!("{}:commit", self.documents_root());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.credentials.access_token)
            .json(&json!({ "writes": writes }))
            .send()
            .await
            .context("Failed to commit write batch")?;
        Self::check(response, "commit write batch").await?;
        Ok(())
    }

    /// Commit all pending writes in bounded batches, reporting progress.
    ///
    /// Returns the number of committed writes. A failed batch aborts the
    /// loop; earlier batches stay durable.
    pub async fn commit_all(&self, operations: &Operations) -> Result<usize> {
        let mut committed = 0;
        for batch in operations.batches() {
            self.commit(batch).await?;
            committed += batch.len();
            log::info!("committed {}/{} writes", committed, operations.len());
        }
        Ok(committed)
    }

    /// Translate one write intent into the commit wire format: an `update`
    /// write whose mask lists exactly the fields present in the payload,
    /// which is what gives every write merge semantics.
    fn encode_write(&self, operation: &Operation) -> Value {
        let data = operation.data();
        let field_paths: Vec<String> = data
            .as_object()
            .map(|map| map.keys().map(|key| models::mask_path(key)).collect())
            .unwrap_or_default();

        let mut write = json!({
            "update": {
                "name": self.document_name(operation.path()),
                "fields": models::encode_fields(data),
            },
            "updateMask": { "fieldPaths": field_paths },
        });
        if operation.requires_existing() {
            write["currentDocument"] = json!({ "exists": true });
        }
        write
    }

    /// Turn a non-2xx response into a diagnostic error.
    async fn check(response: reqwest::Response, action: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        bail!("Failed to {action}: HTTP {status}: {body}");
    }
}
