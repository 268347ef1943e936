mod credentials;
mod storage;

pub use credentials::Credentials;
pub use storage::{load_credentials, store_credentials};

use crate::error::ConfigurationError;
use url::Url;

/// The production marketplace API.
pub const DEFAULT_BASE_URL: &str = "https://mp.knawat.io/api";

/// Environment variable holding the Basic auth username.
pub const USERNAME_VAR: &str = "BASIC_USER";
/// Environment variable holding the Basic auth password.
pub const PASSWORD_VAR: &str = "BASIC_PASS";
/// Optional override for [`DEFAULT_BASE_URL`].
pub const BASE_URL_VAR: &str = "KNAWAT_SUPPLIERS_URL";

/// Everything needed to talk to the suppliers API.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub base_url: Url,
}

impl Config {
    /// Creates a configuration against the given base URL.
    pub fn new(credentials: Credentials, base_url: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            credentials,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Reads credentials and the base URL from the process environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], but falls back to credentials saved in the
    /// OS keyring when the environment has none.
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::from_lookup_or(|key| std::env::var(key).ok(), load_credentials)
    }

    /// Builds a configuration out of an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_or(lookup, || Err(ConfigurationError::MissingCredentials))
    }

    /// Builds a configuration out of a key lookup, consulting `fallback` only
    /// if the lookup yields no usable credentials.
    pub fn from_lookup_or<F, C>(lookup: F, fallback: C) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
        C: FnOnce() -> Result<Credentials, ConfigurationError>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let from_lookup = Credentials::new(
            lookup(USERNAME_VAR).unwrap_or_default(),
            lookup(PASSWORD_VAR).unwrap_or_default(),
        );
        let credentials = match from_lookup {
            Ok(credentials) => credentials,
            Err(ConfigurationError::MissingCredentials) => fallback()?,
            Err(err) => return Err(err),
        };

        Self::new(credentials, &base_url)
    }
}

/// The base URL must be an absolute http(s) URL we can append paths to.
fn parse_base_url(base_url: &str) -> Result<Url, ConfigurationError> {
    let invalid = |reason: String| ConfigurationError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() || url.query().is_some() {
        return Err(invalid("must be a plain base path".to_string()));
    }
    Ok(url)
}
