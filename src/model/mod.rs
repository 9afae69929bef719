//! Model module - Application state and data types
//!
//! - `types`: Core type definitions (tracks, playlist map, token, banners)
//! - `session`: The authenticated client handle
//! - `api`: The remote calls the action handlers need
//! - `spotify_client`: rspotify-backed implementation of those calls
//! - `app_model`: Application state, actions, outcomes and the reducer

mod types;
mod session;
mod api;
mod spotify_client;
mod app_model;

pub use types::{Banner, Focus, PlaylistMap, PlaylistRef, Token, Track};

pub use session::{AuthState, Session};

pub use api::MusicApi;

pub use spotify_client::SpotifyClient;

pub use app_model::{Action, AppState, Outcome, ShownPlaylist};
