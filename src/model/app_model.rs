//! Application state and the reducer applying action outcomes to it

use chrono::{DateTime, Utc};

use super::session::AuthState;
use super::types::{Banner, Focus, PlaylistMap, Track};

/// Something the user asked for. Produced by the input layer, executed by
/// the controller against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SubmitCode(String),
    Search(String),
    RefreshPlaylists,
    ShowPlaylist { playlist_id: String },
    PlayPlaylist { playlist_id: String },
    PlayTrack { uri: String },
    AddTrack { uri: String },
}

/// Result of executing an [`Action`]. Errors carry the rendered error text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Authenticated { expires_at: Option<DateTime<Utc>> },
    AuthFailed(String),
    SearchCompleted(Result<Vec<Track>, String>),
    PlaylistsLoaded(Result<PlaylistMap, String>),
    PlaylistShown {
        playlist_id: String,
        result: Result<Vec<Track>, String>,
    },
    TrackPlayed(Result<(), String>),
    PlaylistPlayed(Result<(), String>),
    TrackAdded(Result<String, String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownPlaylist {
    pub id: String,
    pub tracks: Vec<Track>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthState,
    /// The login link, or the error text from building it
    pub login_url: Result<String, String>,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub code_input: String,
    pub search_query: String,
    /// `None` until a search has completed
    pub search_results: Option<Vec<Track>>,
    pub result_selected: usize,
    pub playlists: PlaylistMap,
    pub selected_playlist: Option<String>,
    pub shown_playlist: Option<ShownPlaylist>,
    pub track_selected: usize,
    pub focus: Focus,
    pub auth_banner: Option<Banner>,
    pub banner: Option<Banner>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(login_url: Result<String, String>) -> Self {
        Self {
            auth: AuthState::Unauthenticated,
            login_url,
            token_expires_at: None,
            code_input: String::new(),
            search_query: String::new(),
            search_results: None,
            result_selected: 0,
            playlists: PlaylistMap::new(),
            selected_playlist: None,
            shown_playlist: None,
            track_selected: 0,
            focus: Focus::CodeInput,
            auth_banner: None,
            banner: None,
            should_quit: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthState::Authenticated
    }

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Authenticated { expires_at } => {
                self.auth = AuthState::Authenticated;
                self.token_expires_at = expires_at;
                self.code_input.clear();
                self.focus = Focus::Search;
                self.auth_banner = Some(Banner::Success("Authentication Successful!".to_string()));
            }
            Outcome::AuthFailed(error) => {
                self.auth_banner = Some(Banner::Error(format!("Error: {}", error)));
            }
            Outcome::SearchCompleted(Ok(tracks)) => {
                self.banner = if tracks.is_empty() {
                    Some(Banner::Warning("No tracks found. Try another search.".to_string()))
                } else {
                    self.focus = Focus::Results;
                    None
                };
                self.search_results = Some(tracks);
                self.result_selected = 0;
            }
            Outcome::SearchCompleted(Err(error)) => {
                self.search_results = None;
                self.result_selected = 0;
                self.banner = Some(Banner::Error(format!("Error during search: {}", error)));
            }
            Outcome::PlaylistsLoaded(Ok(playlists)) => {
                let keep = self
                    .selected_playlist
                    .take()
                    .filter(|name| playlists.get(name).is_some());
                self.selected_playlist = keep.or_else(|| playlists.name_at(0).map(str::to_string));
                self.playlists = playlists;
                self.banner = None;
            }
            Outcome::PlaylistsLoaded(Err(error)) => {
                self.playlists = PlaylistMap::new();
                self.selected_playlist = None;
                self.banner = Some(Banner::Error(format!("Error fetching playlists: {}", error)));
            }
            Outcome::PlaylistShown { playlist_id, result: Ok(tracks) } => {
                self.shown_playlist = Some(ShownPlaylist { id: playlist_id, tracks });
                self.track_selected = 0;
                self.banner = None;
            }
            Outcome::PlaylistShown { result: Err(error), .. } => {
                self.shown_playlist = None;
                self.track_selected = 0;
                self.banner = Some(Banner::Error(format!("Error showing playlist: {}", error)));
            }
            Outcome::TrackPlayed(result) => {
                self.banner = Some(match result {
                    Ok(()) => Banner::Success("Playing song!".to_string()),
                    Err(error) => Banner::Error(format!("Error playing song: {}", error)),
                });
            }
            Outcome::PlaylistPlayed(result) => {
                self.banner = Some(match result {
                    Ok(()) => Banner::Success("Playing playlist!".to_string()),
                    Err(error) => Banner::Error(format!("Error playing playlist: {}", error)),
                });
            }
            Outcome::TrackAdded(result) => {
                self.banner = Some(match result {
                    Ok(name) => Banner::Success(format!("Track added to playlist '{}'!", name)),
                    Err(error) => {
                        Banner::Error(format!("Error adding track to playlist: {}", error))
                    }
                });
            }
        }
    }

    // ========================================================================
    // Selection & Input
    // ========================================================================

    pub fn cycle_focus_forward(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_backward(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::CodeInput => self.code_input.push(c),
            Focus::Search => self.search_query.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::CodeInput => {
                self.code_input.pop();
            }
            Focus::Search => {
                self.search_query.pop();
            }
            _ => {}
        }
    }

    pub fn clear_input(&mut self) {
        match self.focus {
            Focus::CodeInput => self.code_input.clear(),
            Focus::Search => self.search_query.clear(),
            _ => {}
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.focus {
            Focus::Results => self.result_selected = self.result_selected.saturating_sub(1),
            Focus::PlaylistTracks => self.track_selected = self.track_selected.saturating_sub(1),
            Focus::Playlists => {
                let index = self.selected_playlist_index().unwrap_or(0).saturating_sub(1);
                self.select_playlist_at(index);
            }
            _ => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.focus {
            Focus::Results => {
                let len = self.search_results.as_ref().map_or(0, Vec::len);
                if self.result_selected + 1 < len {
                    self.result_selected += 1;
                }
            }
            Focus::PlaylistTracks => {
                let len = self.shown_playlist.as_ref().map_or(0, |p| p.tracks.len());
                if self.track_selected + 1 < len {
                    self.track_selected += 1;
                }
            }
            Focus::Playlists => {
                let index = self.selected_playlist_index().map_or(0, |i| i + 1);
                if index < self.playlists.len() {
                    self.select_playlist_at(index);
                }
            }
            _ => {}
        }
    }

    /// Selects a playlist by display name. Returns `false` if no such name.
    pub fn select_playlist(&mut self, name: &str) -> bool {
        if self.playlists.get(name).is_none() {
            return false;
        }
        self.selected_playlist = Some(name.to_string());
        true
    }

    fn select_playlist_at(&mut self, index: usize) {
        if let Some(name) = self.playlists.name_at(index) {
            self.selected_playlist = Some(name.to_string());
        }
    }

    pub fn selected_playlist_index(&self) -> Option<usize> {
        self.selected_playlist
            .as_deref()
            .and_then(|name| self.playlists.position(name))
    }

    pub fn selected_playlist_id(&self) -> Option<&str> {
        self.selected_playlist
            .as_deref()
            .and_then(|name| self.playlists.get(name))
    }

    pub fn selected_result(&self) -> Option<&Track> {
        self.search_results.as_ref()?.get(self.result_selected)
    }

    pub fn selected_playlist_track(&self) -> Option<&Track> {
        self.shown_playlist.as_ref()?.tracks.get(self.track_selected)
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
        self.auth_banner = None;
    }
}
