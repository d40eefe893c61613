//! Normalizer: maps a loosely-typed [`RawRecord`] onto its canonical
//! [`NormalizedRecord`].
//!
//! The transformation is pure: no I/O, no clock, no shared state. It cannot
//! fail; shape errors (e.g. `tags` not being a list) are rejected when the
//! record is deserialised, before it ever reaches this module.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::types::{NormalizedRecord, RawRecord};

/// Normalise a single record.
pub fn normalize(raw: &RawRecord) -> NormalizedRecord {
    let name = raw.name.as_deref().unwrap_or_default().trim();
    let (name_first, name_last) = split_name(name);

    let email = raw.email.as_deref().unwrap_or_default().trim().to_lowercase();

    // BTreeSet orders by byte value, which for UTF-8 is code-point order.
    let tags: BTreeSet<String> = raw
        .tags
        .iter()
        .flatten()
        .map(|tag| text_of(tag).trim().to_lowercase())
        .collect();

    let id = raw.id.as_ref().map(text_of).unwrap_or_default().trim().to_string();

    let valid = !email.is_empty() && email.contains('@');

    NormalizedRecord {
        id,
        name_first,
        name_last,
        email,
        tags: tags.into_iter().collect(),
        valid,
    }
}

/// Split an already-trimmed name on its first space.
fn split_name(name: &str) -> (Option<String>, Option<String>) {
    if name.is_empty() {
        return (None, None);
    }
    match name.split_once(' ') {
        Some((first, last)) => (Some(first.to_string()), Some(last.to_string())),
        None => (Some(name.to_string()), None),
    }
}

/// Generic text conversion for loosely-typed scalar fields.
///
/// `null` reads as empty text, the same as an absent field, and booleans keep
/// their JSON spelling (`true`, not `True`). Neither is capitalised or
/// rendered as a `None` literal.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
