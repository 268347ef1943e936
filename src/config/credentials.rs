use crate::error::ConfigurationError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The username and password used for HTTP Basic authentication.
///
/// Both values are validated on construction, so holding a `Credentials`
/// means it is usable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

/// On-disk shape of stored credentials.
#[derive(Deserialize, Serialize)]
struct StoredCredentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(ConfigurationError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The value of the `Authorization` header for these credentials.
    pub fn authorization_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigurationError> {
        let stored: StoredCredentials = serde_json::from_str(contents)?;
        Self::new(stored.username, stored.password)
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        let stored = StoredCredentials {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        Ok(serde_json::to_string(&stored)?)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
