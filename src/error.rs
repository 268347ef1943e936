use thiserror::Error;

/// Problems with the credentials or endpoint a client is built from.
/// A client cannot be constructed while any of these are present.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("No valid Username or Password")]
    MissingCredentials,
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("credential storage: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("stored credentials are not valid JSON: {0}")]
    CredentialFormat(#[from] serde_json::Error),
}

/// Anything that went wrong while performing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unable to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error("unable to parse response body: {0}")]
    Parse(serde_json::Error),
}

/// Top-level error returned by [`crate::SupplierClient`].
#[derive(Debug, Error)]
pub enum SupplierError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T, E = SupplierError> = std::result::Result<T, E>;
