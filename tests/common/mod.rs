#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use spotify_deck::auth::Authorizer;
use spotify_deck::error::{ApiError, AuthError};
use spotify_deck::model::{MusicApi, PlaylistRef, Token, Track};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Search { query: String, limit: u32 },
    Playlists { limit: u32 },
    PlayUris(Vec<String>),
    PlayContext(String),
    AddItems { playlist_id: String, uris: Vec<String> },
    PlaylistTracks(String),
}

#[derive(Default)]
struct FakeState {
    search_results: Vec<Track>,
    playlists: Vec<PlaylistRef>,
    contents: HashMap<String, Vec<Track>>,
    failure: Option<String>,
    calls: Vec<Call>,
}

/// In-memory music service that records every call it receives.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_results(self, tracks: Vec<Track>) -> Self {
        self.state.lock().unwrap().search_results = tracks;
        self
    }

    pub fn with_playlist(self, id: &str, name: &str, tracks: Vec<Track>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.playlists.push(PlaylistRef {
                id: id.to_string(),
                name: name.to_string(),
            });
            state.contents.insert(id.to_string(), tracks);
        }
        self
    }

    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().failure = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match &state.failure {
            Some(message) => Err(ApiError::Remote(message.clone())),
            None => Ok(()),
        }
    }
}

impl MusicApi for FakeApi {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, ApiError> {
        self.record(Call::Search {
            query: query.to_string(),
            limit,
        })?;
        Ok(self.state.lock().unwrap().search_results.clone())
    }

    async fn current_user_playlists(&self, limit: u32) -> Result<Vec<PlaylistRef>, ApiError> {
        self.record(Call::Playlists { limit })?;
        Ok(self.state.lock().unwrap().playlists.clone())
    }

    async fn start_uris_playback(&self, uris: &[String]) -> Result<(), ApiError> {
        self.record(Call::PlayUris(uris.to_vec()))
    }

    async fn start_context_playback(&self, context_uri: &str) -> Result<(), ApiError> {
        self.record(Call::PlayContext(context_uri.to_string()))
    }

    async fn playlist_add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError> {
        self.record(Call::AddItems {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
        })?;
        let mut state = self.state.lock().unwrap();
        let added: Vec<Track> = uris
            .iter()
            .map(|uri| {
                let id = uri.rsplit(':').next().unwrap_or_default().to_string();
                Track {
                    name: format!("Track {}", id),
                    artist_name: "Unknown".to_string(),
                    uri: uri.clone(),
                    id,
                }
            })
            .collect();
        state
            .contents
            .entry(playlist_id.to_string())
            .or_default()
            .extend(added);
        Ok(())
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
        self.record(Call::PlaylistTracks(playlist_id.to_string()))?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .contents
            .get(playlist_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Accepts exactly one code and hands out the shared [`FakeApi`].
pub struct FakeAuth {
    pub valid_code: String,
    pub api: FakeApi,
    exchanges: Arc<Mutex<u32>>,
    connect_fails: bool,
}

impl FakeAuth {
    pub fn new(valid_code: &str, api: FakeApi) -> Self {
        Self {
            valid_code: valid_code.to_string(),
            api,
            exchanges: Arc::new(Mutex::new(0)),
            connect_fails: false,
        }
    }

    /// Accepts the code but fails to build a client from the token.
    pub fn failing_connect(mut self) -> Self {
        self.connect_fails = true;
        self
    }

    pub fn exchanges(&self) -> u32 {
        *self.exchanges.lock().unwrap()
    }
}

impl Authorizer for FakeAuth {
    type Client = FakeApi;

    fn login_url(&self) -> Result<String, AuthError> {
        Ok("https://accounts.spotify.com/authorize?client_id=test".to_string())
    }

    async fn exchange_code(&self, code: &str) -> Result<Token, AuthError> {
        *self.exchanges.lock().unwrap() += 1;
        if code == self.valid_code {
            Ok(Token {
                access_token: "access".to_string(),
                expires_at: Some(Utc::now() + Duration::seconds(3600)),
                refresh_token: Some("refresh".to_string()),
            })
        } else {
            Err(AuthError::Rejected("invalid_grant: Invalid authorization code".to_string()))
        }
    }

    async fn connect(&self, _token: Token) -> Result<FakeApi, AuthError> {
        if self.connect_fails {
            return Err(AuthError::TokenStore);
        }
        Ok(self.api.clone())
    }
}

pub fn track(id: &str, name: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artist_name: artist.to_string(),
        uri: format!("spotify:track:{}", id),
    }
}
