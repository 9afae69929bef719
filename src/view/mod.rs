//! View module - UI rendering
//!
//! - `description`: Pure state-to-view mapping, independent of ratatui
//! - `utils`: Shared utility functions (styles, scrollable lists)
//! - `layout`: Authentication sidebar and key hints
//! - `content`: Main content area rendering

mod description;
mod utils;
mod layout;
mod content;

pub use description::{describe, AuthPanel, Button, MainPanel, ResultsView, TrackRow, View};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, view: &View) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Sidebar + main content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Authentication sidebar
                Constraint::Percentage(70), // Main content
            ])
            .split(chunks[0]);

        layout::render_sidebar(frame, main_chunks[0], &view.auth, view.focus);

        match &view.main {
            Some(main) => content::render_main_content(frame, main_chunks[1], main, view.focus),
            None => {
                let welcome = Paragraph::new(
                    "Open the login link, authorize the app, then paste the code \
                     (or the whole redirect URL) into the sidebar and press Enter.",
                )
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Spotify Playlist Manager & Player ")
                        .padding(Padding::horizontal(1)),
                );
                frame.render_widget(welcome, main_chunks[1]);
            }
        }

        layout::render_key_hints(frame, chunks[1], view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppState, Outcome, Track};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_login_screen() {
        let state = AppState::new(Ok("https://accounts.spotify.com/authorize".into()));
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| AppView::render(f, &describe(&state)))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Spotify Authentication"));
        assert!(text.contains("Authorization Code"));
        assert!(!text.contains("Search for Tracks"));
    }

    #[test]
    fn draws_results_and_banner() {
        let mut state = AppState::new(Ok("https://accounts.spotify.com/authorize".into()));
        state.apply(Outcome::Authenticated { expires_at: None });
        state.apply(Outcome::SearchCompleted(Ok(vec![Track {
            id: "1".into(),
            name: "Roygbiv".into(),
            artist_name: "Boards of Canada".into(),
            uri: "spotify:track:1".into(),
        }])));
        state.apply(Outcome::TrackPlayed(Err("no active device".into())));

        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal
            .draw(|f| AppView::render(f, &describe(&state)))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Roygbiv by Boards of Canada"));
        assert!(text.contains("[Play]"));
        assert!(text.contains("Error playing song: no active device"));
    }
}
