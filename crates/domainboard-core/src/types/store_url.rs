//! Store URL type.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Path segments of the records API, below the base URL.
pub const API_SEGMENTS: [&str; 2] = ["api", "orders-status"];

/// A validated location of a record store.
///
/// # Network URLs
///
/// `http://` and `https://` URLs point at a running domainboard server;
/// the records API lives under `/api/orders-status` below the base.
///
/// # File URLs
///
/// `file:///path/to/records.json` points straight at the JSON file, so
/// tools can work on a store without a server in between.
///
/// # Example
///
/// ```
/// use domainboard_core::StoreUrl;
///
/// let remote = StoreUrl::new("http://localhost:5000").unwrap();
/// assert_eq!(
///     remote.record_url("20240101T000000").as_str(),
///     "http://localhost:5000/api/orders-status/20240101T000000"
/// );
///
/// let local = StoreUrl::new("file:///tmp/ordersStatusData.json").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreUrl(Url);

impl StoreUrl {
    /// Create a new store URL from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::StoreUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// URL of the collection endpoint, `<base>/api/orders-status`.
    pub fn collection_url(&self) -> Url {
        self.with_segments(&[])
    }

    /// URL of one record, `<base>/api/orders-status/<id>`, with `id`
    /// percent-encoded as a single path segment.
    pub fn record_url(&self, id: &str) -> Url {
        self.with_segments(&[id])
    }

    fn with_segments(&self, extra: &[&str]) -> Url {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(API_SEGMENTS)
                .extend(extra.iter().copied());
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns true for a `file://` store.
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns true for an `http://` or `https://` store.
    pub fn is_network(&self) -> bool {
        let scheme = self.0.scheme();
        scheme == "http" || scheme == "https"
    }

    /// Returns the filesystem path for `file://` URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::StoreUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        match url.scheme() {
            "file" => {
                if url.path().is_empty() || url.path().ends_with('/') {
                    return Err(InvalidInputError::StoreUrl {
                        value: original.to_string(),
                        reason: "file:// URL must name a file".to_string(),
                    }
                    .into());
                }
                Ok(())
            }
            "http" | "https" => {
                if url.host_str().is_none() {
                    return Err(InvalidInputError::StoreUrl {
                        value: original.to_string(),
                        reason: "must have a host".to_string(),
                    }
                    .into());
                }
                Ok(())
            }
            other => Err(InvalidInputError::StoreUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }
            .into()),
        }
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoreUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_construction() {
        let store = StoreUrl::new("http://localhost:5000").unwrap();
        assert_eq!(
            store.collection_url().as_str(),
            "http://localhost:5000/api/orders-status"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let store = StoreUrl::new("https://admin.example.com/board/").unwrap();
        assert_eq!(
            store.collection_url().as_str(),
            "https://admin.example.com/board/api/orders-status"
        );
    }

    #[test]
    fn record_id_is_percent_encoded() {
        let store = StoreUrl::new("http://localhost:5000").unwrap();
        assert_eq!(
            store.record_url("a/b c").as_str(),
            "http://localhost:5000/api/orders-status/a%2Fb%20c"
        );
    }

    #[test]
    fn invalid_relative_url() {
        assert!(StoreUrl::new("/api/orders-status").is_err());
    }

    #[test]
    fn invalid_scheme() {
        assert!(StoreUrl::new("ftp://example.com").is_err());
    }

    #[test]
    fn file_url_must_name_a_file() {
        assert!(StoreUrl::new("file:///tmp/").is_err());
    }

    #[test]
    fn file_url_to_path() {
        #[cfg(unix)]
        {
            let store = StoreUrl::new("file:///tmp/records.json").unwrap();
            assert!(store.is_local());
            assert!(!store.is_network());
            assert_eq!(
                store.to_file_path().unwrap(),
                PathBuf::from("/tmp/records.json")
            );
        }
    }

    #[test]
    fn network_url_not_local() {
        let store = StoreUrl::new("http://10.0.0.5:5000").unwrap();
        assert!(store.is_network());
        assert!(store.to_file_path().is_none());
    }
}
