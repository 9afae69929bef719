//! Layout rendering (authentication sidebar, key hints)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::Focus;
use super::description::{AuthPanel, View};
use super::utils::{banner_style, section_block};

pub fn render_sidebar(frame: &mut Frame, area: Rect, auth: &AuthPanel, focus: Focus) {
    let code_height = if auth.code_input.is_some() { 3 } else { 0 };
    let banner_height = if auth.banner.is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                // Login link + status
            Constraint::Length(code_height),   // Authorization code input
            Constraint::Length(banner_height), // Auth result
        ])
        .split(area);

    let mut lines = vec![Line::from(Span::styled(
        auth.status.clone(),
        Style::default().fg(Color::Cyan),
    ))];
    lines.push(Line::from(""));
    match &auth.login_url {
        Ok(url) => {
            lines.push(Line::from(Span::styled(
                "Login with Spotify (Ctrl+O to open):",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                url.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )));
        }
        Err(error) => {
            lines.push(Line::from(Span::styled(
                format!("Login unavailable: {}", error),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let login = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Spotify Authentication ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(login, chunks[0]);

    if let Some(code) = &auth.code_input {
        let focused = focus == Focus::CodeInput;
        let text = if code.is_empty() {
            "Paste code or redirect URL..."
        } else {
            code.as_str()
        };
        let input = Paragraph::new(text)
            .style(if focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            })
            .block(section_block(" Authorization Code ", focused));
        frame.render_widget(input, chunks[1]);
    }

    if let Some(banner) = &auth.banner {
        let widget = Paragraph::new(banner.text().to_string())
            .style(banner_style(banner))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(banner_style(banner)),
            );
        frame.render_widget(widget, chunks[2]);
    }
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, view: &View) {
    let hints = match view.focus {
        Focus::CodeInput => "Enter submit code | Ctrl+O open login link | Esc clear | Ctrl+Q quit",
        Focus::Search => "Enter search | Tab next section | Esc clear | Ctrl+Q quit",
        Focus::Results => "↑/↓ select | Enter/p play | a add to selected playlist | r reload playlists | q quit",
        Focus::Playlists => "↑/↓ select | Enter/s show | p play playlist | r reload | q quit",
        Focus::PlaylistTracks => "↑/↓ select | Enter/p play track | / search | q quit",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
