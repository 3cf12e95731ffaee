//! Client-generated record ids.

use std::fmt;

use chrono::{DateTime, Utc};

/// A timestamp-derived record id, e.g. `20240101T000000`.
///
/// Ids have one-second resolution: two records created within the same
/// second get the same id. Nothing here or in the store prevents that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// The ISO-8601 form of `t` with `-` and `:` removed and the fraction dropped.
    pub fn from_timestamp(t: DateTime<Utc>) -> Self {
        Self(t.format("%Y%m%dT%H%M%S").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn strips_separators_and_fraction() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(RecordId::from_timestamp(t).as_str(), "20240101T000000");
    }

    #[test]
    fn same_second_collides() {
        let a = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        let b = a + chrono::Duration::milliseconds(999);
        assert_eq!(RecordId::from_timestamp(a), RecordId::from_timestamp(b));
    }

    #[test]
    fn distinct_seconds_differ() {
        let a = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 58).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        assert!(RecordId::from_timestamp(a) < RecordId::from_timestamp(b));
    }
}
