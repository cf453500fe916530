//! HTTP client for the 2GIS Catalog API.
//!
//! Wraps `reqwest` with API key management and endpoint URLs. Failures are
//! surfaced as-is: there is no retry or backoff, a single failed call fails the
//! caller's request.

use std::time::Duration;

use parkfind_core::config::DEFAULT_DGIS_BASE_URL;
use parkfind_core::Coordinate;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::DgisError;
use crate::fields::SEARCH_FIELDS;
use crate::types::{RawCandidate, SearchPage};

/// Client for the catalog's `items` and `items/byid` endpoints.
///
/// Build it once per process and share it; the inner `reqwest::Client` pools
/// connections. Use [`DgisClient::with_base_url`] to point at a mock server in
/// tests.
pub struct DgisClient {
    client: Client,
    api_key: String,
    search_url: Url,
    by_id_url: Url,
}

impl DgisClient {
    /// Creates a client pointed at the production catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DgisError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, DgisError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_DGIS_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DgisError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`DgisError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, DgisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("parkfind/0.1 (parking-resolver)")
            .build()
            .map_err(DgisError::Http)?;

        // Exactly one trailing slash, so `join` appends to the path instead of
        // replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| DgisError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let search_url = base.join("items").map_err(|e| invalid(e.to_string()))?;
        let by_id_url = base.join("items/byid").map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
            by_id_url,
        })
    }

    /// Searches parkings within `radius_m` meters of `point`.
    ///
    /// # Errors
    ///
    /// - [`DgisError::Http`] on network failure or timeout.
    /// - [`DgisError::UnexpectedStatus`] on a non-2xx status.
    /// - [`DgisError::Deserialize`] if the body is not JSON.
    pub async fn search_near(
        &self,
        point: Coordinate,
        radius_m: u32,
        limit: u32,
    ) -> Result<SearchPage, DgisError> {
        let point_param = format!("{},{}", point.longitude(), point.latitude());
        let radius = radius_m.to_string();
        let page_size = limit.to_string();
        let fields = SEARCH_FIELDS.join(",");

        let url = self.build_url(
            &self.search_url,
            &[
                ("type", "parking"),
                ("point", &point_param),
                ("radius", &radius),
                ("page_size", &page_size),
                ("fields", &fields),
            ],
        );
        let body = self.request_json(&url).await?;
        Ok(SearchPage::from_envelope(&body))
    }

    /// Fetches a single item by catalog id.
    ///
    /// Returns `Ok(None)` when the catalog has no such item.
    ///
    /// # Errors
    ///
    /// - [`DgisError::Http`] on network failure or timeout.
    /// - [`DgisError::UnexpectedStatus`] on a non-2xx status.
    /// - [`DgisError::Deserialize`] if the body is not JSON.
    pub async fn get_by_id(
        &self,
        id: &str,
        fields: Option<&str>,
    ) -> Result<Option<RawCandidate>, DgisError> {
        let mut params = vec![("id", id)];
        if let Some(fields) = fields {
            params.push(("fields", fields));
        }

        let url = self.build_url(&self.by_id_url, &params);
        let body = self.request_json(&url).await?;
        let item = SearchPage::from_envelope(&body).items.into_iter().next();
        if item.is_none() {
            tracing::info!(item_id = id, "parking not found in catalog response");
        }
        Ok(item)
    }

    /// Appends `key` and the given parameters, percent-encoded.
    fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// Non-2xx responses are logged with the status and body. Errors carry
    /// only the URL path so the API key stays out of logs and messages.
    async fn request_json(&self, url: &Url) -> Result<Value, DgisError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(DgisError::transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                path = url.path(),
                response = %body,
                "2GIS API error"
            );
            return Err(DgisError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.path().to_string(),
                body,
            });
        }

        let body = response.text().await.map_err(DgisError::transport)?;
        serde_json::from_str(&body).map_err(|e| DgisError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
