//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Action, AppState, Focus};
use crate::view::describe;

/// What a key press asks the controller to do after the local state update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    OpenLoginUrl,
}

/// Applies the purely local part of a key press (typing, focus, selection)
/// and returns the remote work it triggers, if any.
pub fn command_for_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                state.should_quit = true;
                None
            }
            KeyCode::Char('o') => Some(Command::OpenLoginUrl),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus_forward();
            return None;
        }
        KeyCode::BackTab => {
            state.cycle_focus_backward();
            return None;
        }
        KeyCode::Esc => {
            if state.banner.is_some() || state.auth_banner.is_some() {
                state.dismiss_banner();
            } else {
                state.clear_input();
            }
            return None;
        }
        _ => {}
    }

    if state.focus.is_text_input() {
        return text_input_key(state, key.code);
    }

    match (state.focus, key.code) {
        (_, KeyCode::Char('q')) => {
            state.should_quit = true;
            None
        }
        (_, KeyCode::Up) => {
            state.move_selection_up();
            None
        }
        (_, KeyCode::Down) => {
            state.move_selection_down();
            None
        }
        (_, KeyCode::Char('r')) => Some(Command::Dispatch(Action::RefreshPlaylists)),
        (_, KeyCode::Char('/')) => {
            state.focus = Focus::Search;
            None
        }
        (Focus::Results, KeyCode::Enter | KeyCode::Char('p')) => {
            press_selected_row(state, RowButton::Play)
        }
        (Focus::Results, KeyCode::Char('a')) => press_selected_row(state, RowButton::Add),
        (Focus::Playlists, KeyCode::Enter | KeyCode::Char('s')) => state
            .selected_playlist_id()
            .map(|id| Command::Dispatch(Action::ShowPlaylist { playlist_id: id.to_string() })),
        (Focus::Playlists, KeyCode::Char('p')) => state
            .selected_playlist_id()
            .map(|id| Command::Dispatch(Action::PlayPlaylist { playlist_id: id.to_string() })),
        (Focus::PlaylistTracks, KeyCode::Enter | KeyCode::Char('p')) => state
            .selected_playlist_track()
            .map(|track| Command::Dispatch(Action::PlayTrack { uri: track.uri.clone() })),
        _ => None,
    }
}

fn text_input_key(state: &mut AppState, code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Enter => match state.focus {
            Focus::CodeInput => Some(Command::Dispatch(Action::SubmitCode(state.code_input.clone()))),
            Focus::Search if !state.search_query.trim().is_empty() => {
                Some(Command::Dispatch(Action::Search(state.search_query.clone())))
            }
            _ => None,
        },
        KeyCode::Backspace => {
            state.backspace();
            None
        }
        KeyCode::Char(c) => {
            state.push_char(c);
            None
        }
        _ => None,
    }
}

enum RowButton {
    Play,
    Add,
}

/// Resolves the selected row's button through the rendered view so the
/// dispatched action is exactly the one the keyed button carries.
fn press_selected_row(state: &AppState, button: RowButton) -> Option<Command> {
    let view = describe(state);
    let main = view.main?;
    let row = main.results.rows().get(state.result_selected)?;
    let button = match button {
        RowButton::Play => &row.play,
        RowButton::Add => &row.add,
    };
    main.press(&button.key).map(Command::Dispatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Outcome, Track};

    fn press(state: &mut AppState, code: KeyCode) -> Option<Command> {
        command_for_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn logged_in() -> AppState {
        let mut state = AppState::new(Ok("https://accounts.spotify.com/authorize".into()));
        state.apply(Outcome::Authenticated { expires_at: None });
        state
    }

    #[test]
    fn enter_in_code_input_submits_code() {
        let mut state = AppState::new(Ok(String::new()));
        for c in "AQD1".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            Some(Command::Dispatch(Action::SubmitCode("AQD1".into())))
        );
    }

    #[test]
    fn ctrl_o_opens_login_link() {
        let mut state = AppState::new(Ok(String::new()));
        let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&mut state, ctrl_o), Some(Command::OpenLoginUrl));
        assert!(state.code_input.is_empty());
    }

    #[test]
    fn code_starting_with_o_is_typed_in_full() {
        let mut state = AppState::new(Ok(String::new()));
        for c in "oAQD".chars() {
            assert_eq!(press(&mut state, KeyCode::Char(c)), None);
        }
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            Some(Command::Dispatch(Action::SubmitCode("oAQD".into())))
        );
    }

    #[test]
    fn blank_search_does_nothing() {
        let mut state = logged_in();
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(press(&mut state, KeyCode::Enter), None);
    }

    #[test]
    fn add_on_result_row_dispatches_that_track() {
        let mut state = logged_in();
        state.apply(Outcome::SearchCompleted(Ok(vec![
            Track {
                id: "1".into(),
                name: "Song".into(),
                artist_name: "A".into(),
                uri: "spotify:track:1".into(),
            },
            Track {
                id: "2".into(),
                name: "Song".into(),
                artist_name: "B".into(),
                uri: "spotify:track:2".into(),
            },
        ])));
        press(&mut state, KeyCode::Down);
        assert_eq!(
            press(&mut state, KeyCode::Char('a')),
            Some(Command::Dispatch(Action::AddTrack { uri: "spotify:track:2".into() }))
        );
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            Some(Command::Dispatch(Action::PlayTrack { uri: "spotify:track:2".into() }))
        );
    }

    #[test]
    fn q_quits_outside_text_inputs() {
        let mut state = logged_in();
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.search_query, "q");

        state.focus = Focus::Playlists;
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }
}
