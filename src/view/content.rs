//! Main content area rendering (search, results, playlists)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::Focus;
use super::description::{MainPanel, ResultsView};
use super::utils::{banner_style, item_style, render_scrollable_list, section_block, truncate_string};

pub fn render_main_content(frame: &mut Frame, area: Rect, main: &MainPanel, focus: Focus) {
    let banner_height = if main.banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search bar
            Constraint::Length(banner_height), // Action result
            Constraint::Min(0),                // Results + playlists
        ])
        .split(area);

    render_search_bar(frame, chunks[0], &main.search_query, focus == Focus::Search);

    if let Some(banner) = &main.banner {
        let widget = Paragraph::new(banner.text().to_string())
            .style(banner_style(banner).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(banner_style(banner))
                    .title(" Esc to dismiss "),
            );
        frame.render_widget(widget, chunks[1]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Search results
            Constraint::Percentage(40), // Playlists + playlist contents
        ])
        .split(chunks[2]);

    render_results(frame, body[0], main, focus == Focus::Results);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // 10 playlists + borders
            Constraint::Min(0),
        ])
        .split(body[1]);

    render_playlists(frame, side[0], main, focus == Focus::Playlists);
    render_playlist_tracks(frame, side[1], main, focus == Focus::PlaylistTracks);
}

fn render_search_bar(frame: &mut Frame, area: Rect, query: &str, focused: bool) {
    let text = if query.is_empty() {
        "Enter a song, artist, or album..."
    } else {
        query
    };
    let search = Paragraph::new(text)
        .style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        })
        .block(section_block(" Search for Tracks ", focused));
    frame.render_widget(search, area);
}

fn render_results(frame: &mut Frame, area: Rect, main: &MainPanel, focused: bool) {
    let block = section_block(" Results ", focused);

    match &main.results {
        ResultsView::NotSearched => {
            let hint = Paragraph::new("Type in search and press Enter to find music")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
        }
        ResultsView::NoResults => {
            let empty = Paragraph::new("No tracks found.")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(empty, area);
        }
        ResultsView::Rows(rows) => {
            let inner_width = area.width.saturating_sub(4) as usize;
            let buttons_width = 20;
            let label_width = inner_width.saturating_sub(buttons_width).max(10);

            let items: Vec<ListItem> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let is_selected = i == main.result_selected;
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            truncate_string(&row.label, label_width),
                            item_style(is_selected, focused),
                        ),
                        Span::styled(" [Play] ", Style::default().fg(Color::Green)),
                        Span::styled("[Add] ", Style::default().fg(Color::Cyan)),
                    ]))
                })
                .collect();

            render_scrollable_list(frame, area, items, Some(main.result_selected), block);
        }
    }
}

fn render_playlists(frame: &mut Frame, area: Rect, main: &MainPanel, focused: bool) {
    let block = section_block(" Your Playlists ", focused);

    if main.playlists.is_empty() {
        let empty = Paragraph::new("No playlists (r to reload)")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = main
        .playlists
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let is_selected = Some(i) == main.playlist_selected;
            let marker = if is_selected { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, name)).style(item_style(is_selected, focused))
        })
        .collect();

    render_scrollable_list(frame, area, items, main.playlist_selected, block);
}

fn render_playlist_tracks(frame: &mut Frame, area: Rect, main: &MainPanel, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Playlist ")
        .padding(Padding::horizontal(1))
        .border_style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        });

    let Some(tracks) = &main.playlist_tracks else {
        let hint = Paragraph::new("Select a playlist and press Enter to show it")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, label)| {
            ListItem::new(label.clone()).style(item_style(i == main.track_selected, focused))
        })
        .collect();

    render_scrollable_list(frame, area, items, Some(main.track_selected), block);
}
