//! Main panel rendering
//!
//! This module contains rendering functions for the two main panels:
//! - Endpoints panel (left side) - flat or grouped list
//! - Details panel (right side) - tabs with the endpoint's panel

use super::components::{render_empty_message, render_loading_spinner, render_no_search_results};
use super::styling::{self, get_method_color, tone_color, METHOD_COLUMN_WIDTH};
use super::tabs::{render_endpoint_tab, render_headers_tab, render_request_tab, render_response_tab};
use crate::catalog::{category_icon, EndpointId};
use crate::state::AppState;
use crate::types::{DetailTab, LoadingState, PanelFocus, RenderItem, ViewMode};
use crate::view::{EndpointView, StatusBadge};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the left panel with endpoint list (flat or grouped)
pub fn render_endpoints_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
    list_state: &mut ListState,
) {
    if state.data.loading_state == LoadingState::Fetching {
        render_loading_spinner(frame, area, spinner_index);
        return;
    }

    let items = state.visible_items();
    if items.is_empty() {
        if state.search.matches.no_results() {
            render_no_search_results(frame, area);
        } else {
            render_empty_message(frame, area);
        }
        return;
    }

    let indent = state.ui.view_mode == ViewMode::Grouped;
    let list_items: Vec<ListItem> = items
        .iter()
        .filter_map(|item| match item {
            RenderItem::GroupHeader {
                name,
                count,
                expanded,
                ..
            } => Some(group_header_item(name, *count, *expanded)),
            RenderItem::Endpoint { id } => endpoint_item(state, *id, indent),
        })
        .collect();

    let title = match state.ui.view_mode {
        ViewMode::Flat => format!("[1] Endpoints ({})", list_items.len()),
        ViewMode::Grouped => {
            let groups = items
                .iter()
                .filter(|i| matches!(i, RenderItem::GroupHeader { .. }))
                .count();
            format!("[1] Endpoints - {groups} categories")
        }
    };

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(focus_border(state, PanelFocus::EndpointsList))),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render the right panel with endpoint details and tabs
pub fn render_details_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    selected_index: usize,
) {
    let block = Block::default()
        .title("[2] Details & Response")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(focus_border(state, PanelFocus::Details)));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if state.data.loading_state == LoadingState::Fetching {
        let loading =
            Paragraph::new("Loading endpoints...").style(Style::default().fg(Color::Yellow));
        frame.render_widget(loading, inner_area);
        return;
    }

    // Split into: Tab bar (1 line) + Content area (rest)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content area
        ])
        .split(inner_area);

    let view = match state.selected_item(selected_index) {
        Some(RenderItem::Endpoint { id }) => endpoint_view(state, id),
        Some(RenderItem::GroupHeader {
            category,
            name,
            count,
            ..
        }) => {
            render_category_summary(frame, inner_area, state, category, &name, count);
            return;
        }
        None => None,
    };

    let Some(view) = view else {
        let empty =
            Paragraph::new("No endpoint selected").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner_area);
        return;
    };

    render_tab_bar(frame, chunks[0], state, &view);

    match state.ui.active_detail_tab {
        DetailTab::Endpoint => render_endpoint_tab(frame, chunks[1], &view),
        DetailTab::Request => render_request_tab(frame, chunks[1], &view, state),
        DetailTab::Headers => render_headers_tab(frame, chunks[1], state, view.id),
        DetailTab::Response => render_response_tab(frame, chunks[1], &view, state),
    }
}

// ============================================================================
// Private Helper Functions
// ============================================================================

fn endpoint_view(state: &AppState, id: EndpointId) -> Option<EndpointView> {
    let endpoint = state.endpoint(id)?;
    let panel = state.panel(id)?;
    Some(EndpointView::build(
        id,
        endpoint,
        panel,
        &state.request.edit_mode,
        &state.request.param_edit_buffer,
    ))
}

fn focus_border(state: &AppState, panel: PanelFocus) -> Color {
    if state.ui.panel_focus == panel {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    }
}

fn group_header_item(name: &str, count: usize, expanded: bool) -> ListItem<'static> {
    let arrow = if expanded { "▼" } else { "▶" };
    let icon = category_icon(name);
    ListItem::new(Line::from(vec![Span::styled(
        format!("{arrow} {icon} {name} ({count})"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
}

fn endpoint_item(state: &AppState, id: EndpointId, indent: bool) -> Option<ListItem<'static>> {
    let endpoint = state.endpoint(id)?;
    let method = endpoint.method.to_uppercase();
    let badge = StatusBadge::for_status(&endpoint.status);

    let mut spans = Vec::new();
    if indent {
        spans.push(Span::raw("  "));
    }
    spans.extend([
        Span::styled(
            format!("{:width$}", method, width = METHOD_COLUMN_WIDTH),
            Style::default()
                .fg(get_method_color(&method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(endpoint.display_path().to_string()),
        Span::raw(" "),
        Span::styled(
            endpoint.name.clone(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", badge.label),
            Style::default().fg(tone_color(badge.tone)),
        ),
    ]);

    Some(ListItem::new(Line::from(spans)))
}

fn render_category_summary(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    category: usize,
    name: &str,
    visible: usize,
) {
    let total = state
        .data
        .settings
        .categories
        .get(category)
        .map(|c| c.items.len())
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {name}", category_icon(name)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if visible == total {
        lines.push(Line::from(format!("{total} endpoints")));
    } else {
        lines.push(Line::from(format!("{visible} of {total} endpoints match the search")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press [Space] to expand or collapse",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the tab bar showing [ Endpoint ] [ Request ] [ Headers ] [ Response ]
fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState, view: &EndpointView) {
    let active_tab = &state.ui.active_detail_tab;
    let is_executing = state.panel(view.id).is_some_and(|p| p.is_loading());

    let tab_style = |tab: DetailTab| {
        if *active_tab == tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(styling::default_fg())
        }
    };

    let request_label = if view.parameters.iter().any(|p| p.invalid) {
        "Request (!)"
    } else {
        "Request"
    };
    let response_label = if is_executing {
        "Response (...)".to_string()
    } else {
        match view.response.badge() {
            Some(badge) => format!("Response ({})", badge.label),
            None => "Response".to_string(),
        }
    };

    let separator = Style::default().fg(Color::DarkGray);
    let tabs = Line::from(vec![
        Span::styled("[ ", separator),
        Span::styled("Endpoint", tab_style(DetailTab::Endpoint)),
        Span::styled(" ] [ ", separator),
        Span::styled(request_label, tab_style(DetailTab::Request)),
        Span::styled(" ] [ ", separator),
        Span::styled("Headers", tab_style(DetailTab::Headers)),
        Span::styled(" ] [ ", separator),
        Span::styled(response_label, tab_style(DetailTab::Response)),
        Span::styled(" ]", separator),
    ]);

    frame.render_widget(Paragraph::new(tabs), area);
}
