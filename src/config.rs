//! Credential loading from the environment and an optional `.env` file
//!
//! Missing values are kept as empty strings. They are reported as an
//! [`AuthError`](crate::error::AuthError) the first time the login link is
//! built or a code is exchanged.

use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "REDIRECT_URI";

const LEGACY_PREFIX: &str = "SPOTIPY_";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Load `.env` (if present) and read the three credential variables.
    pub fn load() -> Self {
        match dotenv::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(_) => tracing::debug!("No .env file found, using process environment"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve each variable, falling back to its `SPOTIPY_`-prefixed name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(&format!("{LEGACY_PREFIX}{key}")))
                .unwrap_or_default()
        };

        let credentials = Self {
            client_id: resolve(CLIENT_ID_VAR),
            client_secret: resolve(CLIENT_SECRET_VAR),
            redirect_uri: resolve(REDIRECT_URI_VAR),
        };

        for missing in credentials.missing() {
            tracing::warn!(var = missing, "Credential not set");
        }
        credentials
    }

    /// Names of the variables that resolved to an empty value.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (CLIENT_ID_VAR, &self.client_id),
            (CLIENT_SECRET_VAR, &self.client_secret),
            (REDIRECT_URI_VAR, &self.redirect_uri),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn require(&self, var: &'static str) -> Result<&str, ConfigError> {
        let value = match var {
            CLIENT_ID_VAR => &self.client_id,
            CLIENT_SECRET_VAR => &self.client_secret,
            REDIRECT_URI_VAR => &self.redirect_uri,
            _ => return Err(ConfigError::Missing(var)),
        };
        if value.is_empty() {
            Err(ConfigError::Missing(var))
        } else {
            Ok(value)
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_plain_names() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("REDIRECT_URI", "http://127.0.0.1:8888/callback"),
        ]));
        assert_eq!(creds, Credentials::new("id", "secret", "http://127.0.0.1:8888/callback"));
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn falls_back_to_prefixed_names() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("CLIENT_ID", ""),
            ("SPOTIPY_CLIENT_ID", "legacy-id"),
            ("SPOTIPY_REDIRECT_URI", "http://localhost/cb"),
        ]));
        assert_eq!(creds.client_id, "legacy-id");
        assert_eq!(creds.redirect_uri, "http://localhost/cb");
        assert_eq!(creds.missing(), vec!["CLIENT_SECRET"]);
    }

    #[test]
    fn missing_values_are_not_rejected_at_load() {
        let creds = Credentials::from_lookup(|_| None);
        assert_eq!(creds.missing().len(), 3);
        assert!(matches!(creds.require(CLIENT_ID_VAR), Err(ConfigError::Missing("CLIENT_ID"))));
    }

    #[test]
    fn debug_hides_the_secret() {
        let creds = Credentials::new("id", "super-secret", "uri");
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("super-secret"));
        assert!(shown.contains("<redacted>"));
    }
}
