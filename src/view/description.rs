//! Toolkit-independent description of what a frame shows
//!
//! `describe` is a pure function of [`AppState`]; the ratatui renderer only
//! draws what it returns.

use crate::model::{Action, AppState, Banner, Focus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub key: String,
    pub label: String,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRow {
    pub label: String,
    pub play: Button,
    pub add: Button,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsView {
    NotSearched,
    NoResults,
    Rows(Vec<TrackRow>),
}

impl ResultsView {
    pub fn rows(&self) -> &[TrackRow] {
        match self {
            ResultsView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthPanel {
    pub login_url: Result<String, String>,
    pub code_input: Option<String>,
    pub status: String,
    pub banner: Option<Banner>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainPanel {
    pub search_query: String,
    pub results: ResultsView,
    pub result_selected: usize,
    pub playlists: Vec<String>,
    pub playlist_selected: Option<usize>,
    pub playlist_tracks: Option<Vec<String>>,
    pub track_selected: usize,
    pub banner: Option<Banner>,
}

impl MainPanel {
    /// The action behind the button rendered with `key`, if any.
    pub fn press(&self, key: &str) -> Option<Action> {
        self.results
            .rows()
            .iter()
            .flat_map(|row| [&row.play, &row.add])
            .find(|button| button.key == key)
            .map(|button| button.action.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub focus: Focus,
    pub auth: AuthPanel,
    /// Only present once authenticated
    pub main: Option<MainPanel>,
}

pub fn describe(state: &AppState) -> View {
    let status = if state.is_authenticated() {
        match state.token_expires_at {
            Some(at) => format!("Logged in, token valid until {}", at.format("%H:%M UTC")),
            None => "Logged in".to_string(),
        }
    } else {
        "Not logged in".to_string()
    };

    let auth = AuthPanel {
        login_url: state.login_url.clone(),
        code_input: (!state.is_authenticated()).then(|| state.code_input.clone()),
        status,
        banner: state.auth_banner.clone(),
    };

    let main = state.is_authenticated().then(|| MainPanel {
        search_query: state.search_query.clone(),
        results: describe_results(state),
        result_selected: state.result_selected,
        playlists: state.playlists.names().map(str::to_string).collect(),
        playlist_selected: state.selected_playlist_index(),
        playlist_tracks: state
            .shown_playlist
            .as_ref()
            .map(|p| p.tracks.iter().map(|t| t.label()).collect()),
        track_selected: state.track_selected,
        banner: state.banner.clone(),
    });

    View {
        focus: state.focus,
        auth,
        main,
    }
}

fn describe_results(state: &AppState) -> ResultsView {
    match &state.search_results {
        None => ResultsView::NotSearched,
        Some(tracks) if tracks.is_empty() => ResultsView::NoResults,
        Some(tracks) => ResultsView::Rows(
            tracks
                .iter()
                .enumerate()
                .map(|(index, track)| TrackRow {
                    label: track.label(),
                    // Index first: ids alone may repeat within one result page.
                    play: Button {
                        key: format!("play_{}_{}", index, track.id),
                        label: format!("Play '{}'", track.name),
                        action: Action::PlayTrack { uri: track.uri.clone() },
                    },
                    add: Button {
                        key: format!("add_{}_{}", index, track.id),
                        label: "Add to Playlist".to_string(),
                        action: Action::AddTrack { uri: track.uri.clone() },
                    },
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Outcome, Track};
    use std::collections::HashSet;

    fn track(id: &str, name: &str) -> Track {
        Track {
            id: id.to_string(),
            name: name.to_string(),
            artist_name: "Someone".to_string(),
            uri: format!("spotify:track:{}", id),
        }
    }

    fn logged_in() -> AppState {
        let mut state = AppState::new(Ok("https://accounts.spotify.com/authorize?x".into()));
        state.apply(Outcome::Authenticated { expires_at: None });
        state
    }

    #[test]
    fn main_panel_hidden_before_login() {
        let state = AppState::new(Ok("https://accounts.spotify.com/authorize?x".into()));
        let view = describe(&state);
        assert!(view.main.is_none());
        assert_eq!(view.auth.code_input.as_deref(), Some(""));
        assert_eq!(view.auth.status, "Not logged in");
    }

    #[test]
    fn code_input_hidden_after_login() {
        let view = describe(&logged_in());
        assert!(view.auth.code_input.is_none());
        assert!(view.main.is_some());
    }

    #[test]
    fn zero_results_render_no_buttons() {
        let mut state = logged_in();
        state.apply(Outcome::SearchCompleted(Ok(vec![])));
        let main = describe(&state).main.unwrap();
        assert_eq!(main.results, ResultsView::NoResults);
        assert!(main.results.rows().is_empty());
        assert_eq!(main.press("play_0_x"), None);
    }

    #[test]
    fn one_row_per_track_with_unique_keys() {
        let tracks: Vec<Track> = (0..10)
            .map(|i| track(&format!("id{}", i % 5), "Same Name"))
            .collect();
        let mut state = logged_in();
        state.apply(Outcome::SearchCompleted(Ok(tracks)));

        let main = describe(&state).main.unwrap();
        let rows = main.results.rows();
        assert_eq!(rows.len(), 10);

        let keys: HashSet<&str> = rows
            .iter()
            .flat_map(|r| [r.play.key.as_str(), r.add.key.as_str()])
            .collect();
        assert_eq!(keys.len(), 20);
    }

    #[test]
    fn pressing_a_key_returns_its_action() {
        let mut state = logged_in();
        state.apply(Outcome::SearchCompleted(Ok(vec![track("a", "Alpha"), track("b", "Alpha")])));
        let main = describe(&state).main.unwrap();

        assert_eq!(
            main.press("add_1_b"),
            Some(Action::AddTrack { uri: "spotify:track:b".into() })
        );
        assert_eq!(main.results.rows()[0].label, "Alpha by Someone");
        assert_eq!(main.results.rows()[0].play.label, "Play 'Alpha'");
    }

    #[test]
    fn describe_is_stable_for_same_state() {
        let mut state = logged_in();
        state.apply(Outcome::PlaylistShown {
            playlist_id: "id2".into(),
            result: Ok(vec![track("a", "Alpha")]),
        });
        assert_eq!(describe(&state), describe(&state));
        assert_eq!(
            describe(&state).main.unwrap().playlist_tracks,
            Some(vec!["Alpha by Someone".to_string()])
        );
    }
}
