//! HTTP client for the orders-status API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use domainboard_core::error::{ProtocolError, TransportError};
use domainboard_core::{Error, Record, RecordPatch, RecordStore, Result, StoreUrl};

/// A [`RecordStore`] that talks to a domainboard server.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: reqwest::Client,
    base: StoreUrl,
}

impl HttpRecordStore {
    /// Create a store for the server at `base`.
    pub fn new(base: StoreUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("domainboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;

        Ok(Self::with_client(client, base))
    }

    /// Use a preconfigured reqwest client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client, base: StoreUrl) -> Self {
        Self { client, base }
    }

    /// Returns the server URL this store targets.
    pub fn base(&self) -> &StoreUrl {
        &self.base
    }

    /// Parse a successful response body, or turn the status into an error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<R, Error> {
        let response = check_status(response).await?;
        response.json::<R>().await.map_err(map_reqwest)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn list(&self) -> Result<Vec<Record>> {
        let url = self.base.collection_url();
        debug!(%url, "GET records");

        let response = self.client.get(url).send().await.map_err(map_reqwest)?;
        let records: Vec<Record> = self.handle_response(response).await?;

        trace!(count = records.len(), "records received");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(base = %self.base, id = %record.id))]
    async fn create(&self, record: Record) -> Result<Record> {
        let url = self.base.collection_url();
        debug!(%url, "POST record");

        let response = self
            .client
            .post(url)
            .json(&record)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await.map_err(|e| match e {
            Error::Protocol(p) if p.is_conflict() => Error::conflict(&record.id),
            other => other,
        })
    }

    #[instrument(skip(self, patch), fields(base = %self.base))]
    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Record> {
        let url = self.base.record_url(id);
        debug!(%url, "PUT record");

        let response = self
            .client
            .put(url)
            .json(&patch)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await.map_err(|e| not_found_for(e, id))
    }

    #[instrument(skip(self), fields(base = %self.base))]
    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.base.record_url(id);
        debug!(%url, "DELETE record");

        let response = self.client.delete(url).send().await.map_err(map_reqwest)?;

        // The body is a plain-text confirmation; only the status matters.
        check_status(response).await.map_err(|e| not_found_for(e, id))?;
        Ok(())
    }
}

async fn check_status(
    response: reqwest::Response,
) -> std::result::Result<reqwest::Response, Error> {
    let status = response.status();
    trace!(status = %status, "API response");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
    Err(ProtocolError::new(status.as_u16(), body).into())
}

fn not_found_for(err: Error, id: &str) -> Error {
    match err {
        Error::Protocol(p) if p.is_not_found() => Error::not_found(id),
        other => other,
    }
}

fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keeps_its_base() {
        let base = StoreUrl::new("http://localhost:5000").unwrap();
        let store = HttpRecordStore::new(base.clone()).unwrap();
        assert_eq!(store.base().as_str(), base.as_str());
    }

    #[test]
    fn only_protocol_404_becomes_not_found() {
        let err = not_found_for(ProtocolError::new(404, None).into(), "A1");
        assert!(matches!(err, Error::NotFound { ref id } if id == "A1"));

        let err = not_found_for(ProtocolError::new(500, None).into(), "A1");
        assert!(matches!(err, Error::Protocol(ref p) if p.status == 500));
    }
}
