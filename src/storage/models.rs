//! Wire formats for persisted, imported and exported entries.
//!
//! Persisted and exported data use the strict [`MoodEntry`] shape:
//!
//! ```json
//! [
//!   {
//!     "id": 1704067200000,
//!     "mood": "Good",
//!     "note": "x",
//!     "tags": ["work"],
//!     "timestamp": "2024-01-01T00:00:00Z"
//!   }
//! ]
//! ```
//!
//! Imports are read leniently through [`ImportCandidate`]: every element is
//! validated on its own, so one malformed element never sinks the batch.

use crate::domain::entry::normalize_note;
use crate::domain::error::{JournalError, Result};
use crate::domain::{Mood, MoodEntry, TagBuffer};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

/// File name offered for exports.
pub const EXPORT_FILE_NAME: &str = "mood_entries.json";

/// Decodes a persisted entries blob.
///
/// # Errors
///
/// Returns [`JournalError::Storage`] if the blob is not a JSON array of entries.
pub fn decode_entries(blob: &str) -> Result<Vec<MoodEntry>> {
    serde_json::from_str(blob).map_err(|e| JournalError::Storage(format!("failed to parse stored entries: {e}")))
}

/// Encodes entries as a JSON array, pretty-printed for exports.
///
/// # Errors
///
/// Returns [`JournalError::Storage`] if serialization fails.
pub fn encode_entries(entries: &[MoodEntry], pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    };
    encoded.map_err(|e| JournalError::Storage(format!("failed to serialize entries: {e}")))
}

/// One element of an import payload before validation.
///
/// Every field is optional and untyped so that validation can explain
/// exactly what is wrong with a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportCandidate {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub mood: Option<Value>,
    #[serde(default)]
    pub note: Option<Value>,
    #[serde(default)]
    pub tags: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

impl ImportCandidate {
    /// Validates the candidate and converts it into a normalized entry.
    ///
    /// # Rules
    ///
    /// - `timestamp` must parse (see [`parse_timestamp`])
    /// - `mood` must name one of the five moods (case-insensitive)
    /// - `note` defaults to empty and is trimmed and capped
    /// - `tags` go through the tag buffer; non-string tags are skipped
    /// - `id` defaults to the timestamp in milliseconds
    ///
    /// # Errors
    ///
    /// Returns the rejection reason as a string.
    pub fn validate(self) -> std::result::Result<MoodEntry, String> {
        let timestamp = self
            .timestamp
            .as_ref()
            .ok_or_else(|| "missing timestamp".to_string())
            .and_then(|raw| parse_timestamp(raw).ok_or_else(|| format!("unparseable timestamp: {raw}")))?;

        let mood = match &self.mood {
            Some(Value::String(name)) => name.parse::<Mood>().map_err(|e| e.to_string())?,
            Some(other) => return Err(format!("mood must be a string, got {other}")),
            None => return Err("missing mood".to_string()),
        };

        let note = match &self.note {
            Some(Value::String(text)) => normalize_note(text),
            Some(Value::Null) | None => String::new(),
            Some(other) => return Err(format!("note must be a string, got {other}")),
        };

        let tags = match &self.tags {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect::<TagBuffer>().into_vec(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => return Err(format!("tags must be an array, got {other}")),
        };

        let id = self
            .id
            .as_ref()
            .and_then(Value::as_i64)
            .unwrap_or_else(|| timestamp.timestamp_millis());

        Ok(MoodEntry {
            id,
            mood,
            note,
            tags,
            timestamp,
        })
    }
}

/// Parses a raw timestamp value.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DD`
/// (both read as local time), and integer epoch milliseconds.
///
/// # Examples
///
/// ```
/// use mood_journal::storage::models::parse_timestamp;
/// use serde_json::json;
///
/// assert!(parse_timestamp(&json!("2024-01-01T00:00:00Z")).is_some());
/// assert!(parse_timestamp(&json!(1704067200000_i64)).is_some());
/// assert!(parse_timestamp(&json!("yesterday")).is_none());
/// ```
#[must_use]
pub fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// A candidate that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the element in the payload array.
    pub index: usize,
    pub reason: String,
}

/// Result of parsing an import payload.
#[derive(Debug, Clone, Default)]
pub struct ImportBatch {
    /// Valid entries, in payload order.
    pub entries: Vec<MoodEntry>,
    pub rejected: Vec<Rejection>,
}

/// Parses an import payload into validated entries and rejections.
///
/// # Errors
///
/// Returns [`JournalError::Import`] if the payload is not valid JSON or not
/// an array. Individual malformed elements are reported in
/// [`ImportBatch::rejected`] instead.
pub fn parse_import(payload: &str) -> Result<ImportBatch> {
    let _span = tracing::debug_span!("parse_import", payload_len = payload.len()).entered();

    let value: Value = serde_json::from_str(payload).map_err(|e| JournalError::Import(format!("invalid JSON: {e}")))?;
    let Value::Array(items) = value else {
        return Err(JournalError::Import("expected a JSON array of entries".to_string()));
    };

    let mut batch = ImportBatch::default();
    for (index, item) in items.into_iter().enumerate() {
        let validated = serde_json::from_value::<ImportCandidate>(item)
            .map_err(|e| format!("not an entry object: {e}"))
            .and_then(ImportCandidate::validate);

        match validated {
            Ok(entry) => batch.entries.push(entry),
            Err(reason) => {
                tracing::warn!(index, reason = %reason, "rejecting import candidate");
                batch.rejected.push(Rejection { index, reason });
            }
        }
    }

    tracing::debug!(accepted = batch.entries.len(), rejected = batch.rejected.len(), "import parsed");
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_import_is_accepted() {
        let payload = r#"[{"id":1,"mood":"Good","note":"x","tags":[],"timestamp":"2024-01-01T00:00:00Z"}]"#;
        let batch = parse_import(payload).unwrap();

        assert!(batch.rejected.is_empty());
        assert_eq!(batch.entries.len(), 1);
        let entry = &batch.entries[0];
        assert_eq!(entry.id, 1);
        assert_eq!(entry.mood, Mood::Good);
        assert_eq!(entry.note, "x");
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn malformed_elements_are_rejected_individually() {
        let payload = r#"[
            {"mood":"Happy","timestamp":"2024-01-01T00:00:00Z"},
            {"mood":"good","timestamp":"2024-01-02"},
            {"mood":"Neutral"},
            42,
            {"mood":"Terrible","timestamp":1704067200000,"tags":["A","a",7,"b"]}
        ]"#;
        let batch = parse_import(payload).unwrap();

        assert_eq!(batch.entries.len(), 2);
        assert_eq!(batch.entries[0].mood, Mood::Good);
        assert_eq!(batch.entries[1].tags, vec!["a", "b"]);
        let rejected: Vec<usize> = batch.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![0, 2, 3]);
    }

    #[test]
    fn missing_id_falls_back_to_timestamp() {
        let payload = r#"[{"mood":"Amazing","timestamp":"2024-01-01T00:00:00Z"}]"#;
        let batch = parse_import(payload).unwrap();
        assert_eq!(batch.entries[0].id, 1_704_067_200_000);
        assert!(batch.entries[0].note.is_empty());
    }

    #[test]
    fn non_array_payload_is_an_error() {
        assert!(matches!(parse_import("{}"), Err(JournalError::Import(_))));
        assert!(matches!(parse_import("not json"), Err(JournalError::Import(_))));
    }

    #[test]
    fn stored_blob_round_trips() {
        let payload = r#"[{"id":7,"mood":"Stressed","note":"","tags":["work"],"timestamp":"2024-03-01T10:00:00Z"}]"#;
        let entries = parse_import(payload).unwrap().entries;
        let blob = encode_entries(&entries, true).unwrap();
        assert_eq!(decode_entries(&blob).unwrap(), entries);
        assert!(decode_entries("{\"nope\":1}").is_err());
    }
}
