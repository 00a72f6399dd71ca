//! Firestore REST wire types and typed-value mapping.

use serde::Deserialize;
use serde_json::{Map, Value, json};

/// A document as returned by the Firestore list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Full resource name:
    /// `projects/{project}/databases/(default)/documents/{path}`.
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Document ID: the last segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Decode the Firestore-typed fields into plain JSON.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), decode_value(value)))
                .collect(),
        )
    }
}

/// One page of a collection listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
}

/// Encode a plain JSON object into a Firestore `fields` map.
pub fn encode_fields(data: &Value) -> Map<String, Value> {
    match data.as_object() {
        Some(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), encode_value(value)))
            .collect(),
        None => Map::new(),
    }
}

/// Encode one plain JSON value into Firestore's typed-value envelope.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(number) => match number.as_i64() {
            // Firestore represents 64-bit integers as strings on the wire.
            Some(integer) => json!({ "integerValue": integer.to_string() }),
            None => json!({ "doubleValue": number.as_f64() }),
        },
        Value::String(text) => json!({ "stringValue": text }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(_) => json!({ "mapValue": { "fields": encode_fields(value) } }),
    }
}

/// Decode Firestore's typed-value envelope back into plain JSON.
pub fn decode_value(value: &Value) -> Value {
    let Some(envelope) = value.as_object() else {
        return Value::Null;
    };

    if let Some(text) = envelope.get("stringValue") {
        return text.clone();
    }
    if let Some(integer) = envelope.get("integerValue") {
        return integer
            .as_str()
            .and_then(|raw| raw.parse::<i64>().ok())
            .map(|parsed| json!(parsed))
            .unwrap_or(Value::Null);
    }
    if let Some(number) = envelope.get("doubleValue") {
        return number.clone();
    }
    if let Some(flag) = envelope.get("booleanValue") {
        return flag.clone();
    }
    if let Some(timestamp) = envelope.get("timestampValue") {
        return timestamp.clone();
    }
    if envelope.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(map) = envelope.get("mapValue") {
        let fields = map.get("fields").and_then(Value::as_object);
        return Value::Object(
            fields
                .map(|inner| {
                    inner
                        .iter()
                        .map(|(key, value)| (key.clone(), decode_value(value)))
                        .collect()
                })
                .unwrap_or_default(),
        );
    }
    if let Some(array) = envelope.get("arrayValue") {
        let values = array.get("values").and_then(Value::as_array);
        return Value::Array(
            values
                .map(|items| items.iter().map(decode_value).collect())
                .unwrap_or_default(),
        );
    }

    Value::Null
}

/// Quote a field name for a document-mask path.
///
/// Names outside the simple identifier class must be wrapped in backticks;
/// the lineup fields ("Wild Card Lineup") contain spaces.
pub fn mask_path(field: &str) -> String {
    let mut chars = field.chars();
    let simple = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if simple {
        field.to_string()
    } else {
        format!("`{}`", field.replace('\\', "\\\\").replace('`', "\\`"))
    }
}
