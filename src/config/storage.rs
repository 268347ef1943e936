use super::Credentials;
use crate::error::ConfigurationError;
use keyring::Entry;

const KEYRING_SERVICE: &str = "knawat-suppliers";
const KEYRING_ENTRY: &str = "Basic Credentials";

fn credentials_entry() -> Result<Entry, ConfigurationError> {
    Ok(Entry::new(KEYRING_SERVICE, KEYRING_ENTRY)?)
}

/// Retrieves credentials previously saved with [`store_credentials`].
/// An empty keyring is reported the same way as missing environment variables.
pub fn load_credentials() -> Result<Credentials, ConfigurationError> {
    let contents = match credentials_entry()?.get_password() {
        Ok(contents) => contents,
        Err(keyring::Error::NoEntry) => return Err(ConfigurationError::MissingCredentials),
        Err(err) => return Err(err.into()),
    };

    Credentials::from_json(&contents)
}

/// Saves credentials within the user's keyring, replacing any existing ones.
pub fn store_credentials(credentials: &Credentials) -> Result<(), ConfigurationError> {
    credentials_entry()?.set_password(&credentials.to_json()?)?;
    Ok(())
}
