//! Request/response handlers, one per user action
//!
//! Each handler makes its remote call through the session it is given and
//! returns the result untouched. Turning errors into banners is left to the
//! caller.

use crate::error::ApiError;
use crate::model::{MusicApi, PlaylistMap, Session, Track};

pub const SEARCH_LIMIT: u32 = 10;
pub const PLAYLIST_LIMIT: u32 = 10;

fn client<C>(session: &Session<C>) -> Result<&C, ApiError> {
    session.get().ok_or(ApiError::NotAuthenticated)
}

pub fn playlist_context_uri(playlist_id: &str) -> String {
    format!("spotify:playlist:{}", playlist_id)
}

pub async fn search<C: MusicApi>(session: &Session<C>, query: &str) -> Result<Vec<Track>, ApiError> {
    let mut tracks = client(session)?.search_tracks(query, SEARCH_LIMIT).await?;
    tracks.truncate(SEARCH_LIMIT as usize);
    Ok(tracks)
}

pub async fn list_playlists<C: MusicApi>(session: &Session<C>) -> Result<PlaylistMap, ApiError> {
    let playlists = client(session)?.current_user_playlists(PLAYLIST_LIMIT).await?;
    Ok(playlists
        .into_iter()
        .take(PLAYLIST_LIMIT as usize)
        .collect())
}

pub async fn play_track<C: MusicApi>(session: &Session<C>, track_uri: &str) -> Result<(), ApiError> {
    client(session)?
        .start_uris_playback(&[track_uri.to_string()])
        .await
}

pub async fn play_playlist<C: MusicApi>(session: &Session<C>, playlist_id: &str) -> Result<(), ApiError> {
    client(session)?
        .start_context_playback(&playlist_context_uri(playlist_id))
        .await
}

/// Appends `track_uri` to the playlist called `playlist_name` in `playlists`
/// and returns that name.
pub async fn add_to_playlist<C: MusicApi>(
    session: &Session<C>,
    playlists: &PlaylistMap,
    playlist_name: &str,
    track_uri: &str,
) -> Result<String, ApiError> {
    let api = client(session)?;
    let playlist_id = playlists
        .get(playlist_name)
        .ok_or_else(|| ApiError::UnknownPlaylist(playlist_name.to_string()))?;

    api.playlist_add_items(playlist_id, &[track_uri.to_string()])
        .await?;
    Ok(playlist_name.to_string())
}

pub async fn show_playlist<C: MusicApi>(session: &Session<C>, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
    client(session)?.playlist_tracks(playlist_id).await
}
