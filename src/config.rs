//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_ORIGIN: &str = "https://backend.gaganahuja.com";
pub const DEFAULT_PROXY_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 25 MiB, enough for gallery and speaker photos.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 26_214_400;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// The backend origin is not an absolute http(s) URL.
    #[error("BACKEND_ORIGIN must start with http:// or https://, got {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Scheme and authority of the platform backend, without trailing `/`.
    pub backend_origin: String,
    pub timeouts: ProxyTimeouts,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional, all with defaults:
    /// - `PORT`: default 3000
    /// - `BACKEND_ORIGIN`: default `https://backend.gaganahuja.com`
    /// - `PROXY_REQUEST_TIMEOUT_SECS`: default 60
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 26214400
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable is malformed.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let backend_origin = parse_origin(get("BACKEND_ORIGIN").as_deref().unwrap_or(DEFAULT_BACKEND_ORIGIN))?;
        let timeouts = ProxyTimeouts {
            request_secs: parse_or(
                "PROXY_REQUEST_TIMEOUT_SECS",
                get("PROXY_REQUEST_TIMEOUT_SECS"),
                DEFAULT_PROXY_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "PROXY_CONNECT_TIMEOUT_SECS",
                get("PROXY_CONNECT_TIMEOUT_SECS"),
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", get("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self { port, backend_origin, timeouts, max_upload_bytes })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let origin = raw.trim_end_matches('/');
    let has_host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if has_host { Ok(origin.to_owned()) } else { Err(ConfigError::InvalidOrigin(raw.to_owned())) }
}
