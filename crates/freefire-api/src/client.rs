//! HTTP client for the account profile endpoint.
//!
//! One GET per lookup, no retry. Outcomes are classified into
//! [`Error`](crate::error::Error): non-2xx status, transport failure, or an
//! unparseable body. A 2xx response with valid JSON is returned as-is;
//! schema tolerance is the extractor's job.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use freefire_types::ProfileQuery;

/// Fixed endpoint of the remote profile service.
pub const API_URL: &str =
    "https://proapis.hlgamingofficial.com/main/games/freefire/account/api";

/// Bound on the one network suspension point in the pipeline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared outbound client for profile lookups.
///
/// Read-only after construction; safe for concurrent requests.
#[derive(Clone, Debug)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    /// Create a client against the production endpoint.
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    /// Create a client against an alternate endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the raw profile payload for `query`.
    pub async fn fetch(&self, query: &ProfileQuery) -> Result<Value> {
        debug!("Fetching profile for uid {} in region {}", query.uid, query.region);

        let response = self
            .client
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("sectionName", "AllData"),
                ("PlayerUid", query.uid.as_str()),
                ("region", query.region.as_str()),
                ("useruid", query.user_uid.as_str()),
                ("api", query.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        debug!("Profile fetch for uid {} succeeded", query.uid);
        Ok(value)
    }
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query() -> ProfileQuery {
        ProfileQuery::new("123456789", "bd", "svc-uid", "secret-key")
    }

    #[tokio::test]
    async fn fetch_returns_raw_payload_on_200() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .query_param("sectionName", "AllData")
                    .query_param("PlayerUid", "123456789")
                    .query_param("region", "bd")
                    .query_param("useruid", "svc-uid")
                    .query_param("api", "secret-key");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"result": {"AccountInfo": {"AccountName": "Player1"}}}));
            })
            .await;

        let client = ProfileClient::with_base_url(server.base_url());
        let value = client.fetch(&query()).await.expect("fetch");

        assert_eq!(value["result"]["AccountInfo"]["AccountName"], "Player1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_classifies_non_2xx_as_status_error() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET);
                then.status(503).body("upstream down");
            })
            .await;

        let client = ProfileClient::with_base_url(server.base_url());
        let err = client.fetch(&query()).await.unwrap_err();

        assert!(matches!(err, Error::Status(503)));
        // One attempt only, no retry.
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn fetch_classifies_non_json_body_as_body_error() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET);
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = ProfileClient::with_base_url(server.base_url());
        let err = client.fetch(&query()).await.unwrap_err();

        assert!(matches!(err, Error::Body(_)));
    }

    #[tokio::test]
    async fn fetch_classifies_connection_refused_as_transport_error() {
        // Port 1 is never listening.
        let client = ProfileClient::with_base_url("http://127.0.0.1:1/");
        let err = client.fetch(&query()).await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }
}
