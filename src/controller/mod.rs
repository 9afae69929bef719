//! Controller module - Application logic and event handling
//!
//! - `actions`: One handler per user action
//! - `input`: Key event handling

pub mod actions;
mod input;

pub use input::{command_for_key, Command};

use chrono::{DateTime, Utc};

use crate::auth::{authorization_code, Authorizer};
use crate::error::AuthError;
use crate::model::{Action, AppState, MusicApi, Outcome, Session};

/// Owns the session and the UI state; runs one action at a time.
pub struct AppController<A: Authorizer> {
    authorizer: A,
    session: Session<A::Client>,
    state: AppState,
}

impl Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::SubmitCode(_) => "submit_code",
            Action::Search(_) => "search",
            Action::RefreshPlaylists => "list_playlists",
            Action::ShowPlaylist { .. } => "show_playlist",
            Action::PlayPlaylist { .. } => "play_playlist",
            Action::PlayTrack { .. } => "play_track",
            Action::AddTrack { .. } => "add_to_playlist",
        }
    }
}

impl<A> AppController<A>
where
    A: Authorizer,
    A::Client: MusicApi,
{
    pub fn new(authorizer: A) -> Self {
        let login_url = authorizer.login_url().map_err(|e| {
            tracing::warn!(error = %e, "Could not build login URL");
            e.to_string()
        });
        Self {
            authorizer,
            session: Session::new(),
            state: AppState::new(login_url),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn session(&self) -> &Session<A::Client> {
        &self.session
    }

    /// Runs `action` to completion and folds its outcome into the state.
    /// A successful login is followed by loading the playlist map.
    pub async fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        tracing::debug!(action = kind, "Dispatching action");

        let Some(outcome) = self.execute(action).await else {
            tracing::debug!(action = kind, "Action skipped");
            return;
        };
        let just_authenticated = matches!(outcome, Outcome::Authenticated { .. });
        log_outcome(kind, &outcome);
        self.state.apply(outcome);

        if just_authenticated {
            if let Some(outcome) = self.execute(Action::RefreshPlaylists).await {
                log_outcome("list_playlists", &outcome);
                self.state.apply(outcome);
            }
        }
    }

    pub async fn handle_command(&mut self, command: Command) {
        match command {
            Command::Dispatch(action) => self.dispatch(action).await,
            Command::OpenLoginUrl => {
                if let Ok(url) = &self.state.login_url {
                    if let Err(e) = webbrowser::open(url) {
                        tracing::warn!(error = %e, "Failed to open browser");
                    }
                }
            }
        }
    }

    async fn execute(&mut self, action: Action) -> Option<Outcome> {
        let outcome = match action {
            Action::SubmitCode(input) => {
                if self.session.is_authenticated() {
                    return None;
                }
                let code = authorization_code(&input)?;
                match self.login(&code).await {
                    Ok(expires_at) => Outcome::Authenticated { expires_at },
                    Err(e) => Outcome::AuthFailed(e.to_string()),
                }
            }
            Action::Search(query) => Outcome::SearchCompleted(
                actions::search(&self.session, &query)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            Action::RefreshPlaylists => Outcome::PlaylistsLoaded(
                actions::list_playlists(&self.session)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            Action::ShowPlaylist { playlist_id } => {
                let result = actions::show_playlist(&self.session, &playlist_id)
                    .await
                    .map_err(|e| e.to_string());
                Outcome::PlaylistShown { playlist_id, result }
            }
            Action::PlayPlaylist { playlist_id } => Outcome::PlaylistPlayed(
                actions::play_playlist(&self.session, &playlist_id)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            Action::PlayTrack { uri } => Outcome::TrackPlayed(
                actions::play_track(&self.session, &uri)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            Action::AddTrack { uri } => {
                let result = match self.state.selected_playlist.as_deref() {
                    Some(name) => {
                        actions::add_to_playlist(&self.session, &self.state.playlists, name, &uri)
                            .await
                            .map_err(|e| e.to_string())
                    }
                    None => Err("select a playlist first".to_string()),
                };
                Outcome::TrackAdded(result)
            }
        };
        Some(outcome)
    }

    /// Exchanges `code` and stores the resulting client. The session is
    /// only set once both steps succeed.
    async fn login(&mut self, code: &str) -> Result<Option<DateTime<Utc>>, AuthError> {
        let token = self.authorizer.exchange_code(code).await?;
        let expires_at = token.expires_at;
        let client = self.authorizer.connect(token).await?;
        self.session.set(client);
        Ok(expires_at)
    }
}

fn log_outcome(kind: &str, outcome: &Outcome) {
    let error = match outcome {
        Outcome::AuthFailed(e) => Some(e),
        Outcome::SearchCompleted(Err(e))
        | Outcome::PlaylistsLoaded(Err(e))
        | Outcome::PlaylistShown { result: Err(e), .. }
        | Outcome::TrackPlayed(Err(e))
        | Outcome::PlaylistPlayed(Err(e))
        | Outcome::TrackAdded(Err(e)) => Some(e),
        _ => None,
    };
    match error {
        Some(e) => tracing::error!(operation = kind, error = %e, "API request failed"),
        None => tracing::info!(operation = kind, "API request successful"),
    }
}
