//! HTTP client wrapper: the endpoint probe

use crate::error::Result;
use crate::models::CheckConfig;
use reqwest::header::{CACHE_CONTROL, WWW_AUTHENTICATE};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Observable signals extracted from one probed endpoint
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// Numeric HTTP status code
    pub code: u16,
    /// Textual status line, e.g. `401 Unauthorized`
    pub status: String,
    /// Whether a `WWW-Authenticate` challenge header was present
    pub challenged: bool,
}

/// Thin wrapper around a shared reqwest client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HttpClient from the runtime configuration.
    ///
    /// The client follows redirects per reqwest's default policy. A timeout
    /// is applied only when the configuration carries one.
    pub fn from_config(config: &CheckConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Issues one unauthenticated GET against a fully-formed URL and
    /// extracts the signals needed for classification.
    ///
    /// A transport failure (DNS, connection refused, TLS, timeout) surfaces
    /// as the error variant; no status code is available in that case.
    pub async fn probe(&self, url: &str) -> Result<ProbeResponse> {
        debug!("probing {url}");

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {reason}", status.as_u16()),
            None => status.as_u16().to_string(),
        };
        let challenged = response.headers().contains_key(WWW_AUTHENTICATE);

        debug!("response {status_line} for {url}");

        Ok(ProbeResponse {
            code: status.as_u16(),
            status: status_line,
            challenged,
        })
    }
}
