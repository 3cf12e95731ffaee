//! The add form.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use domainboard_core::error::InvalidInputError;
use domainboard_core::types::format_date;
use domainboard_core::{Error, Record, RecordId, Result};

/// A parsed `domain[:ip]` entry.
///
/// ```
/// use domainboard_dashboard::DomainInput;
///
/// let input = DomainInput::parse("https://example.com:10.0.0.1").unwrap();
/// assert_eq!(input.domain, "example.com");
/// assert_eq!(input.ip, "10.0.0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInput {
    pub domain: String,
    pub ip: String,
}

impl DomainInput {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let text = text
            .strip_prefix("https://")
            .or_else(|| text.strip_prefix("http://"))
            .unwrap_or(text);

        let mut parts = text.split(':');
        let domain = parts.next().unwrap_or_default().trim();
        let ip = parts.next().unwrap_or_default().trim();

        if domain.is_empty() {
            return Err(Error::InvalidInput(InvalidInputError::EmptyDomain));
        }

        Ok(Self {
            domain: domain.to_string(),
            ip: ip.to_string(),
        })
    }

    /// Build the record to create at time `now`.
    pub fn into_record(self, now: DateTime<Utc>) -> Record {
        Record {
            id: RecordId::from_timestamp(now).into_string(),
            domain: self.domain,
            ip: self.ip,
            date: format_date(now),
        }
    }
}

impl FromStr for DomainInput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
