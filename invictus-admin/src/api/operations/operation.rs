//! Core write-intent type for store operations.

use serde_json::Value;

/// A single pending write against the document store.
///
/// Both variants carry merge semantics on the wire (only the fields present
/// in `data` overwrite); they differ in whether the target document must
/// already exist.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Create-or-update with merge semantics. Fields absent from `data` but
    /// present on the stored document are preserved.
    SetMerge {
        /// Document path relative to the database root,
        /// e.g. `leagues/{id}/Members/{member}`.
        path: String,
        /// Plain-JSON document body.
        data: Value,
    },
    /// Overwrite specific top-level fields of an existing document; fails
    /// the batch if the document is missing.
    UpdateFields { path: String, data: Value },
}

impl Operation {
    pub fn set_merge(path: impl Into<String>, data: Value) -> Self {
        Self::SetMerge {
            path: path.into(),
            data,
        }
    }

    pub fn update_fields(path: impl Into<String>, data: Value) -> Self {
        Self::UpdateFields {
            path: path.into(),
            data,
        }
    }

    /// Document path relative to the database root.
    pub fn path(&self) -> &str {
        match self {
            Self::SetMerge { path, .. } => path,
            Self::UpdateFields { path, .. } => path,
        }
    }

    pub fn data(&self) -> &Value {
        match self {
            Self::SetMerge { data, .. } => data,
            Self::UpdateFields { data, .. } => data,
        }
    }

    /// Whether the write requires the target document to exist.
    pub fn requires_existing(&self) -> bool {
        matches!(self, Self::UpdateFields { .. })
    }
}
