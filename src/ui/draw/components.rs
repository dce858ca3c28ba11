//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (catalog name, stats, contact, loading status)
//! - Footer (command help, credits)
//! - Search bar
//! - Toast line
//! - Loading spinners and empty states

use super::styling::{toast_color, SPINNER_FRAMES};
use crate::state::AppState;
use crate::types::{CatalogSource, InputMode, LoadingState, RequestEditMode, Toast, ViewMode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the application header with catalog info and loading status
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    server_url: &str,
    spinner_index: usize,
) {
    let settings = &state.data.settings;

    let status_text = match state.data.loading_state {
        LoadingState::Idle => "Idle".to_string(),
        LoadingState::Fetching => format!(
            "{} Fetching settings...",
            SPINNER_FRAMES[spinner_index % SPINNER_FRAMES.len()]
        ),
        LoadingState::Complete => match state.data.source {
            CatalogSource::Remote => "Loaded".to_string(),
            CatalogSource::Fallback => "Demo catalog".to_string(),
        },
    };

    let title = Line::from(vec![
        Span::styled(
            settings.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            settings.description.clone(),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let mut stats = vec![
        Span::styled(
            format!("{} endpoints", settings.total_endpoints()),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} categories", settings.total_categories()),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::raw(server_url.to_string()),
        Span::raw(" ["),
        Span::styled(status_text, Style::default().fg(Color::Yellow)),
        Span::raw("]"),
    ];
    if let Some(link) = settings.links.as_deref().filter(|l| !l.is_empty()) {
        stats.push(Span::raw(" | Contact: "));
        stats.push(Span::styled(
            link.to_string(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    let header = Paragraph::new(vec![title, Line::from(stats)])
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the search bar with active filter indication
pub fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_active = matches!(state.input.mode, InputMode::Searching);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if !state.search.query.is_empty() {
        Style::default().fg(Color::Green) // Show filter is active
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Show match count if filtering
    let title = if state.search.matches.is_filtering() {
        let count = state.search.matches.match_count();
        let total = state.data.settings.total_endpoints();
        format!(" Search [{count}/{total}] ")
    } else {
        " Search (/) ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let search_text = if is_active {
        format!("{}_", state.search.query) // Show cursor
    } else {
        state.search.query.clone()
    };

    let paragraph = Paragraph::new(search_text).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the footer with command help and catalog credits
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = if matches!(state.request.edit_mode, RequestEditMode::Editing(_)) {
        "Type to edit | Enter:Confirm Esc:Cancel Ctrl+U:Clear field"
    } else {
        match state.ui.view_mode {
            ViewMode::Flat => {
                "Tab:Panel j/k:Nav Space:Execute e:Edit c:Clear y/Y:Copy URL/Response | g:Group /:Search ,:Server F5:Reload q:Quit"
            }
            ViewMode::Grouped => {
                "Tab:Panel j/k:Nav Space:Execute/Toggle e:Edit c:Clear y/Y:Copy URL/Response | g:Flat /:Search ,:Server F5:Reload q:Quit"
            }
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Commands")
                .title_bottom(Line::from(format!(" {} ", state.data.settings.credits())).right_aligned()),
        );

    frame.render_widget(footer, area);
}

/// Render the current toast, or nothing
pub fn render_toast(frame: &mut Frame, area: Rect, toast: Option<&Toast>) {
    let Some(toast) = toast else {
        return;
    };

    let line = Line::from(Span::styled(
        format!(" {} ", toast.message),
        Style::default()
            .fg(Color::Black)
            .bg(toast_color(toast.kind))
            .add_modifier(Modifier::BOLD),
    ))
    .right_aligned();

    frame.render_widget(Paragraph::new(line), area);
}

/// Render loading spinner animation
pub fn render_loading_spinner(frame: &mut Frame, area: Rect, spinner_index: usize) {
    let loading_text = format!(
        "{} Fetching settings\n\nPlease wait...",
        SPINNER_FRAMES[spinner_index % SPINNER_FRAMES.len()]
    );

    let loading = Paragraph::new(loading_text)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("[1] Endpoints"),
        );

    frame.render_widget(loading, area);
}

/// Render empty state message
pub fn render_empty_message(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No endpoints found\n\nPress [,] to set the server URL or [F5] to reload")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("[1] Endpoints"),
        );

    frame.render_widget(empty, area);
}

/// Render no search results message
pub fn render_no_search_results(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No results found\n\nPress [Esc] or [Ctrl+L] to clear search")
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("[1] Search Results"),
        );

    frame.render_widget(empty, area);
}
