//! Error types surfaced to the user as banners

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Failures while building the login link or exchanging an authorization code
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Provider(#[from] rspotify::ClientError),
    #[error("no access token was returned")]
    NoToken,
    #[error("could not store the access token in the client")]
    TokenStore,
    #[error("{0}")]
    Rejected(String),
}

/// Failures from any call made after authentication
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not authenticated, log in first")]
    NotAuthenticated,
    #[error(transparent)]
    Provider(#[from] rspotify::ClientError),
    #[error("invalid id: {0}")]
    InvalidId(#[from] rspotify::model::IdError),
    #[error("no playlist named '{0}'")]
    UnknownPlaylist(String),
    #[error("{0}")]
    Remote(String),
}
