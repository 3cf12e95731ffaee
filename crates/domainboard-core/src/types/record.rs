//! Record and partial-record types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single domain entry.
///
/// Every field is optional on the wire. Missing and `null` fields read as
/// `""`, and numbers or booleans are kept as their JSON text, so any object
/// a client posts (or an older file holds) is stored rather than rejected.
/// `date` in particular is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Lookup key for update and delete.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,

    /// Hostname, without any `http://` or `https://` prefix.
    #[serde(default, deserialize_with = "lenient_string")]
    pub domain: String,

    /// Optional IP, empty when the user gave none.
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: String,

    /// Creation timestamp, client supplied.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        domain: impl Into<String>,
        ip: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            domain: domain.into(),
            ip: ip.into(),
            date: date.into(),
        }
    }

    /// Shallow-merge `patch` over this record.
    ///
    /// Fields present in the patch replace ours. The result's id is always
    /// `id`, whatever the patch says.
    pub fn merged(&self, id: &str, patch: &RecordPatch) -> Record {
        Record {
            id: id.to_string(),
            domain: patch.domain.clone().unwrap_or_else(|| self.domain.clone()),
            ip: patch.ip.clone().unwrap_or_else(|| self.ip.clone()),
            date: patch.date.clone().unwrap_or_else(|| self.date.clone()),
        }
    }
}

/// A partial record, as sent in an update.
///
/// Absent and `null` fields leave the stored value untouched. Unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.domain.is_none() && self.ip.is_none() && self.date.is_none()
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl From<Record> for RecordPatch {
    fn from(record: Record) -> Self {
        Self {
            id: Some(record.id),
            domain: Some(record.domain),
            ip: Some(record.ip),
            date: Some(record.date),
        }
    }
}

const SCALAR: &str = "a string, number, boolean or null";

/// Read a scalar field as text. `null` becomes `None`; objects and arrays
/// are rejected.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(de::Error::invalid_type(de::Unexpected::Seq, &SCALAR)),
        Value::Object(_) => Err(de::Error::invalid_type(de::Unexpected::Map, &SCALAR)),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Render a timestamp the way browsers do for `Date` JSON values:
/// RFC 3339, millisecond precision, `Z` suffix.
pub fn format_date(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn base() -> Record {
        Record::new("A1", "old.com", "", "2024-01-01")
    }

    #[test]
    fn merge_overlays_present_fields() {
        let patch = RecordPatch::default().domain("new.com");
        let merged = base().merged("A1", &patch);
        assert_eq!(merged, Record::new("A1", "new.com", "", "2024-01-01"));
    }

    #[test]
    fn merge_keeps_url_id() {
        let patch = RecordPatch {
            id: Some("B2".to_string()),
            ip: Some("10.0.0.1".to_string()),
            ..Default::default()
        };
        let merged = base().merged("A1", &patch);
        assert_eq!(merged.id, "A1");
        assert_eq!(merged.ip, "10.0.0.1");
    }

    #[test]
    fn empty_patch_is_identity() {
        assert!(RecordPatch::default().is_empty());
        assert_eq!(base().merged("A1", &RecordPatch::default()), base());
    }

    #[test]
    fn record_defaults_missing_fields() {
        let record: Record = serde_json::from_value(json!({ "id": "x" })).unwrap();
        assert_eq!(record, Record::new("x", "", "", ""));
    }

    #[test]
    fn record_tolerates_missing_id_and_nulls() {
        let record: Record = serde_json::from_value(json!({ "domain": "a.com" })).unwrap();
        assert_eq!(record, Record::new("", "a.com", "", ""));

        let record: Record = serde_json::from_value(json!({
            "id": "A1",
            "domain": null,
            "ip": null,
            "date": "x"
        }))
        .unwrap();
        assert_eq!(record, Record::new("A1", "", "", "x"));
    }

    #[test]
    fn record_keeps_scalar_values_as_text() {
        let record: Record =
            serde_json::from_value(json!({ "id": 7, "domain": "a.com", "ip": true })).unwrap();
        assert_eq!(record, Record::new("7", "a.com", "true", ""));
    }

    #[test]
    fn record_rejects_nested_values() {
        assert!(serde_json::from_value::<Record>(json!({ "id": { "x": 1 } })).is_err());
        assert!(serde_json::from_value::<RecordPatch>(json!({ "ip": [1, 2] })).is_err());
    }

    #[test]
    fn patch_ignores_unknown_fields_and_nulls() {
        let patch: RecordPatch = serde_json::from_value(json!({
            "domain": "a.com",
            "ip": null,
            "isNew": false
        }))
        .unwrap();
        assert_eq!(patch, RecordPatch::default().domain("a.com"));
    }

    #[test]
    fn record_serializes_in_field_order() {
        let json = serde_json::to_string(&base()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"A1","domain":"old.com","ip":"","date":"2024-01-01"}"#
        );
    }

    #[test]
    fn date_matches_browser_format() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(format_date(t), "2024-03-05T07:08:09.000Z");
    }
}
