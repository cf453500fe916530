use thiserror::Error;

/// Errors returned by the 2GIS catalog client.
#[derive(Debug, Error)]
pub enum DgisError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    ///
    /// Request failures are built through [`DgisError::transport`], which
    /// drops the URL and with it the `key` query parameter.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl DgisError {
    /// Wraps a request failure without its URL.
    #[must_use]
    pub fn transport(error: reqwest::Error) -> Self {
        Self::Http(error.without_url())
    }
}
