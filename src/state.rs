//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest::Client` reused by every
//! proxied request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
#[error("HTTP client build failed: {0}")]
pub struct HttpClientBuildError(String);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an upstream client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, HttpClientBuildError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HttpClientBuildError(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
