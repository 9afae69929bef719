//! Core type definitions for the application

use chrono::{DateTime, Utc};

/// A track as shown in search results and playlist listings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub uri: String,
}

impl Track {
    pub fn label(&self) -> String {
        if self.artist_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} by {}", self.name, self.artist_name)
        }
    }
}

/// A playlist as returned by the current-user listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
}

/// Playlist display name to id.
///
/// Names keep the position they were first seen at. When two playlists share
/// a name the later id replaces the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistMap {
    entries: Vec<(String, String)>,
}

impl PlaylistMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        let name = name.into();
        let id = id.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = id,
            None => self.entries.push((name, id)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| id.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(n, _)| n.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PlaylistRef> for PlaylistMap {
    fn from_iter<I: IntoIterator<Item = PlaylistRef>>(iter: I) -> Self {
        let mut map = PlaylistMap::new();
        for playlist in iter {
            map.insert(playlist.name, playlist.id);
        }
        map
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for PlaylistMap {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut map = PlaylistMap::new();
        for (name, id) in iter {
            map.insert(name, id);
        }
        map
    }
}

/// Access token held in memory for the current run
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("expires_at", &self.expires_at)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Warning(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Success(s) | Banner::Warning(s) | Banner::Error(s) => s,
        }
    }
}

/// Which part of the UI receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    CodeInput,
    Search,
    Results,
    Playlists,
    PlaylistTracks,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::CodeInput => Focus::CodeInput,
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Playlists,
            Focus::Playlists => Focus::PlaylistTracks,
            Focus::PlaylistTracks => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::CodeInput => Focus::CodeInput,
            Focus::Search => Focus::PlaylistTracks,
            Focus::Results => Focus::Search,
            Focus::Playlists => Focus::Results,
            Focus::PlaylistTracks => Focus::Playlists,
        }
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::CodeInput | Focus::Search)
    }
}
