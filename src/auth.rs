use std::collections::HashSet;

use chrono::Utc;
use rspotify::{prelude::*, AuthCodeSpotify, Config, OAuth};

use crate::config::{CLIENT_ID_VAR, CLIENT_SECRET_VAR, Credentials, REDIRECT_URI_VAR};
use crate::error::AuthError;
use crate::model::{SpotifyClient, Token};

pub const SCOPES: &str =
    "user-read-playback-state user-modify-playback-state playlist-modify-public playlist-modify-private";

const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// The authorization-code flow of a music service.
#[allow(async_fn_in_trait)]
pub trait Authorizer {
    type Client;

    fn login_url(&self) -> Result<String, AuthError>;

    async fn exchange_code(&self, code: &str) -> Result<Token, AuthError>;

    async fn connect(&self, token: Token) -> Result<Self::Client, AuthError>;
}

/// Pulls the authorization code out of user input, which may be the bare
/// code or the full redirect URL the browser landed on.
pub fn authorization_code(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let Some((_, query)) = input.split_once('?') else {
        return Some(input.to_string());
    };
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "code")
        .map(|(_, value)| value.to_string())
        .filter(|code| !code.is_empty())
}

fn scopes() -> HashSet<String> {
    SCOPES.split_whitespace().map(|s| s.to_string()).collect()
}

fn build_rspotify(credentials: &Credentials, config: Config) -> AuthCodeSpotify {
    let creds = rspotify::Credentials::new(&credentials.client_id, &credentials.client_secret);
    let oauth = OAuth {
        redirect_uri: credentials.redirect_uri.clone(),
        scopes: scopes(),
        ..Default::default()
    };
    AuthCodeSpotify::with_config(creds, oauth, config)
}

pub struct SpotifyAuth {
    credentials: Credentials,
    oauth_client: AuthCodeSpotify,
}

impl SpotifyAuth {
    pub fn new(credentials: Credentials) -> Self {
        let oauth_client = build_rspotify(
            &credentials,
            Config {
                token_cached: false,
                token_refreshing: false,
                ..Default::default()
            },
        );
        Self {
            credentials,
            oauth_client,
        }
    }
}

impl Authorizer for SpotifyAuth {
    type Client = SpotifyClient;

    fn login_url(&self) -> Result<String, AuthError> {
        self.credentials.require(CLIENT_ID_VAR)?;
        self.credentials.require(REDIRECT_URI_VAR)?;
        Ok(self.oauth_client.get_authorize_url(false)?)
    }

    async fn exchange_code(&self, code: &str) -> Result<Token, AuthError> {
        self.credentials.require(CLIENT_ID_VAR)?;
        self.credentials.require(CLIENT_SECRET_VAR)?;
        self.credentials.require(REDIRECT_URI_VAR)?;

        tracing::info!("Exchanging authorization code for access token");
        self.oauth_client.request_token(code).await?;

        let token = self
            .oauth_client
            .token
            .lock()
            .await
            .map_err(|_| AuthError::NoToken)?
            .clone()
            .ok_or(AuthError::NoToken)?;

        tracing::info!(expires_at = ?token.expires_at, "Access token received");
        Ok(Token {
            access_token: token.access_token,
            expires_at: token.expires_at,
            refresh_token: token.refresh_token,
        })
    }

    async fn connect(&self, token: Token) -> Result<SpotifyClient, AuthError> {
        // Refreshing keeps long sessions alive past the token's first expiry.
        let spotify = build_rspotify(
            &self.credentials,
            Config {
                token_cached: false,
                token_refreshing: true,
                ..Default::default()
            },
        );

        let expires_in = token
            .expires_at
            .map(|at| at - Utc::now())
            .unwrap_or_else(|| chrono::Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS));

        let rspotify_token = rspotify::Token {
            access_token: token.access_token,
            expires_in,
            expires_at: token.expires_at,
            refresh_token: token.refresh_token,
            scopes: scopes(),
        };

        *spotify
            .token
            .lock()
            .await
            .map_err(|_| AuthError::TokenStore)? = Some(rspotify_token);
        tracing::debug!("rspotify client initialized");
        Ok(SpotifyClient::new(spotify))
    }
}
