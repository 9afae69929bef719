//! Terminal Spotify front-end: log in with the authorization-code flow, search
//! tracks, browse the first page of your playlists and start playback.

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod view;
