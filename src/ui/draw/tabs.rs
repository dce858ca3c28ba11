//! Tab rendering for details panel
//!
//! This module contains rendering functions for the detail tabs:
//! - Endpoint tab (method, path, description, status)
//! - Request tab (parameter form with inline editing and the live request URL)
//! - Headers tab (response headers)
//! - Response tab (status badge, timing and the rendered body or error)

use super::styling::{get_method_color, tone_color};
use crate::catalog::EndpointId;
use crate::panel::PanelPhase;
use crate::state::AppState;
use crate::types::RequestEditMode;
use crate::view::{EndpointView, ParameterView, ResponseView, StatusBadge};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the Endpoint tab content
pub fn render_endpoint_tab(frame: &mut Frame, area: Rect, view: &EndpointView) {
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                view.method.clone(),
                Style::default()
                    .fg(get_method_color(&view.method))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(view.display_path.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Cyan)),
            Span::raw(view.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Cyan)),
            badge_span(&view.status),
        ]),
    ];

    if !view.desc.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Description: ", Style::default().fg(Color::Cyan)),
            Span::raw(view.desc.clone()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Parameters: ", Style::default().fg(Color::Cyan)),
        Span::raw(if view.parameters.is_empty() {
            "none".to_string()
        } else {
            view.parameters
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }),
    ]));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(content, area);
}

/// Render the Request tab content (parameters and the request URL)
pub fn render_request_tab(frame: &mut Frame, area: Rect, view: &EndpointView, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if view.parameters.is_empty() {
        lines.push(Line::from(Span::styled(
            "No parameters required for this endpoint",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Parameters:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (idx, param) in view.parameters.iter().enumerate() {
            let is_selected = state.ui.selected_param_index == idx;
            lines.push(build_param_line(param, is_selected));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Request URL:",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", view.method),
            Style::default().fg(get_method_color(&view.method)),
        ),
        Span::styled(view.request_url.clone(), Style::default().fg(Color::Yellow)),
    ]));

    lines.push(Line::from(""));
    let help_text = match &state.request.edit_mode {
        RequestEditMode::Viewing => {
            "j/k/↑/↓: Navigate  |  e: Edit parameter  |  Enter/Space: Execute  |  c: Clear"
        }
        RequestEditMode::Editing(_) => "Type to edit  |  Enter: Confirm  |  Esc: Cancel",
    };
    lines.push(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )));

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the Headers tab content
pub fn render_headers_tab(frame: &mut Frame, area: Rect, state: &AppState, id: EndpointId) {
    let mut lines: Vec<Line> = Vec::new();

    match state.panel(id).map(|p| &p.phase) {
        Some(PanelPhase::Success(execution)) if !execution.headers.is_empty() => {
            for (key, value) in &execution.headers {
                lines.push(Line::from(vec![
                    Span::styled(format!("{key}: "), Style::default().fg(Color::Cyan)),
                    Span::raw(value.clone()),
                ]));
            }
        }
        Some(PanelPhase::Success(_)) => {
            lines.push(Line::from(Span::styled(
                "No headers",
                Style::default().fg(Color::DarkGray),
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "No response yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.response_scroll as u16, 0));

    frame.render_widget(content, area);
}

/// Render the Response tab content
pub fn render_response_tab(frame: &mut Frame, area: Rect, view: &EndpointView, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    match &view.response {
        ResponseView::Idle => {
            lines.push(Line::from(Span::styled(
                "Press [Space] to execute request",
                Style::default().fg(Color::DarkGray),
            )));
        }
        ResponseView::Loading => {
            lines.push(Line::from(Span::styled(
                "⏳ Executing request...",
                Style::default().fg(Color::Cyan),
            )));
        }
        ResponseView::Success {
            badge,
            elapsed_ms,
            content_type,
            lines: body,
        } => {
            lines.push(Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Cyan)),
                badge_span(badge),
                Span::raw("  "),
                Span::styled("Duration: ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{elapsed_ms}ms")),
                Span::raw("  "),
                Span::styled("Type: ", Style::default().fg(Color::Cyan)),
                Span::raw(if content_type.is_empty() {
                    "unknown".to_string()
                } else {
                    content_type.clone()
                }),
            ]));
            lines.push(Line::from(""));
            lines.extend(body.iter().map(|l| Line::from(l.clone())));
        }
        ResponseView::Failure { badge, message } => {
            lines.push(Line::from(vec![
                Span::styled("❌ ", Style::default().fg(Color::Red)),
                badge_span(badge),
            ]));
            lines.push(Line::from(""));
            for line in message.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::Red),
                )));
            }
        }
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.response_scroll as u16, 0));

    frame.render_widget(content, area);
}

// ============================================================================
// Helper Functions
// ============================================================================

fn badge_span(badge: &StatusBadge) -> Span<'static> {
    Span::styled(
        format!(" {} ", badge.label),
        Style::default()
            .fg(Color::Black)
            .bg(tone_color(badge.tone))
            .add_modifier(Modifier::BOLD),
    )
}

/// Helper function to build a single parameter line with styling
fn build_param_line(param: &ParameterView, is_selected: bool) -> Line<'static> {
    let required_str = if param.required { "*" } else { "" };

    // Selection indicator
    let indicator = if is_selected { "→ " } else { "  " };

    // Value display - show cursor if editing, description as placeholder when empty
    let (value_display, placeholder) = if param.editing {
        (format!("[{}▊]", param.value), false)
    } else if param.value.is_empty() {
        (format!("[{}]", param.placeholder), true)
    } else {
        (format!("[{}]", param.value), false)
    };

    let indicator_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let name_style = if param.invalid {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let value_style = if param.editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if param.invalid {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::UNDERLINED)
    } else if placeholder {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    let meta_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(indicator, indicator_style),
        Span::styled(format!("{}{}: ", param.name, required_str), name_style),
        Span::styled(value_display, value_style),
        Span::raw("  "),
        Span::styled(format!("({})", param.type_label), meta_style),
    ];
    if param.invalid {
        spans.push(Span::styled(
            "  required",
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}
