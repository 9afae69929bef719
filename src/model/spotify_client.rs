//! Spotify Web API client wrapper

use std::sync::Arc;

use rspotify::{
    model::{
        AlbumId, ArtistId, FullTrack, PlayContextId, PlayableId, PlayableItem, PlaylistId,
        SearchResult, SearchType, TrackId,
    },
    prelude::*,
    AuthCodeSpotify,
};

use crate::error::ApiError;

use super::api::MusicApi;
use super::types::{PlaylistRef, Track};

/// Authenticated rspotify client shared by all actions
#[derive(Clone)]
pub struct SpotifyClient {
    client: Arc<AuthCodeSpotify>,
}

impl SpotifyClient {
    pub const PLAYLIST_PAGE_SIZE: u32 = 100;

    pub fn new(client: AuthCodeSpotify) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn track_from_full(track: &FullTrack) -> Option<Track> {
    let id = track.id.as_ref()?;
    Some(Track {
        id: id.id().to_string(),
        name: track.name.clone(),
        artist_name: track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        uri: id.uri(),
    })
}

fn context_from_uri(context_uri: &str) -> Result<PlayContextId<'_>, ApiError> {
    let context = if context_uri.contains(":playlist:") {
        PlayContextId::Playlist(PlaylistId::from_uri(context_uri)?)
    } else if context_uri.contains(":album:") {
        PlayContextId::Album(AlbumId::from_uri(context_uri)?)
    } else if context_uri.contains(":artist:") {
        PlayContextId::Artist(ArtistId::from_uri(context_uri)?)
    } else {
        return Err(ApiError::Remote(format!(
            "unsupported playback context: {}",
            context_uri
        )));
    };
    Ok(context)
}

impl MusicApi for SpotifyClient {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, ApiError> {
        let result = self
            .client
            .search(query, SearchType::Track, None, None, Some(limit), None)
            .await?;

        let tracks = match result {
            SearchResult::Tracks(page) => page.items.iter().filter_map(track_from_full).collect(),
            _ => Vec::new(),
        };
        Ok(tracks)
    }

    async fn current_user_playlists(&self, limit: u32) -> Result<Vec<PlaylistRef>, ApiError> {
        let page = self
            .client
            .current_user_playlists_manual(Some(limit), None)
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|playlist| PlaylistRef {
                id: playlist.id.id().to_string(),
                name: playlist.name,
            })
            .collect())
    }

    async fn start_uris_playback(&self, uris: &[String]) -> Result<(), ApiError> {
        let ids = uris
            .iter()
            .map(|uri| TrackId::from_uri(uri).map(PlayableId::Track))
            .collect::<Result<Vec<_>, _>>()?;

        self.client.start_uris_playback(ids, None, None, None).await?;
        Ok(())
    }

    async fn start_context_playback(&self, context_uri: &str) -> Result<(), ApiError> {
        let context = context_from_uri(context_uri)?;
        self.client
            .start_context_playback(context, None, None, None)
            .await?;
        Ok(())
    }

    async fn playlist_add_items(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError> {
        let id = PlaylistId::from_id(playlist_id)?;
        let items = uris
            .iter()
            .map(|uri| TrackId::from_uri(uri).map(PlayableId::Track))
            .collect::<Result<Vec<_>, _>>()?;

        self.client.playlist_add_items(id, items, None).await?;
        Ok(())
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
        let id = PlaylistId::from_id(playlist_id)?;
        let page = self
            .client
            .playlist_items_manual(id, None, None, Some(Self::PLAYLIST_PAGE_SIZE), None)
            .await?;

        Ok(page
            .items
            .iter()
            .filter_map(|item| match &item.track {
                Some(PlayableItem::Track(track)) => track_from_full(track),
                _ => None,
            })
            .collect())
    }
}
