//! Core record types for transform-core.
//!
//! This module defines the two shapes that flow through the service: the
//! loosely-typed [`RawRecord`] accepted from callers and the canonical
//! [`NormalizedRecord`] produced by [`normalize`](crate::normalizer::normalize).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact record as submitted, before normalisation.
///
/// Every field is optional. `id` and the `tags` elements may be any JSON
/// scalar; they are coerced to text by the normalizer. Unknown keys are
/// dropped on input, and absent or `null` fields are omitted again on
/// serialisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
}

/// The canonical form of a [`RawRecord`].
///
/// `name_first` and `name_last` serialise as `null` when absent rather than
/// being skipped; clients rely on all six keys being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Trimmed text form of the raw `id`.
    pub id: String,
    /// Text before the first space of the trimmed name.
    pub name_first: Option<String>,
    /// Text after the first space of the trimmed name, verbatim.
    pub name_last: Option<String>,
    /// Trimmed, lower-cased email.
    pub email: String,
    /// Trimmed, lower-cased, deduplicated tags in code-point order.
    pub tags: Vec<String>,
    /// `true` iff `email` is non-empty and contains `@`.
    pub valid: bool,
}

impl From<&NormalizedRecord> for RawRecord {
    /// Re-synthesise an input record whose normalisation is `record` again.
    fn from(record: &NormalizedRecord) -> Self {
        let name = match (&record.name_first, &record.name_last) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, _) => None,
        };
        RawRecord {
            id: Some(Value::String(record.id.clone())),
            name,
            email: Some(record.email.clone()),
            tags: Some(record.tags.iter().cloned().map(Value::String).collect()),
        }
    }
}

/// Build the fixed sample served by `GET /demo/example`.
pub fn sample_record() -> RawRecord {
    RawRecord {
        id: Some(Value::from("123")),
        name: Some("  Alice Johnson  ".to_string()),
        email: Some("Alice@example.COM".to_string()),
        tags: Some(vec![
            Value::from("New"),
            Value::from("customer"),
            Value::from("BETA"),
        ]),
    }
}
