//! The remote calls the action handlers depend on

use crate::error::ApiError;

use super::types::{PlaylistRef, Track};

/// Remote music-service operations used after authentication.
///
/// [`SpotifyClient`](super::SpotifyClient) is the production implementation.
#[allow(async_fn_in_trait)]
pub trait MusicApi {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, ApiError>;

    async fn current_user_playlists(&self, limit: u32) -> Result<Vec<PlaylistRef>, ApiError>;

    async fn start_uris_playback(&self, uris: &[String]) -> Result<(), ApiError>;

    async fn start_context_playback(&self, context_uri: &str) -> Result<(), ApiError>;

    async fn playlist_add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError>;

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError>;
}
