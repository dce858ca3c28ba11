//! View models for the endpoint panel
//!
//! Built from an `Endpoint` and its `PanelState`; the draw layer only maps
//! them onto widgets.

use crate::catalog::{Endpoint, EndpointId, EndpointStatus};
use crate::error::RequestError;
use crate::panel::{PanelPhase, PanelState};
use crate::request::{Fragment, Media};
use crate::types::RequestEditMode;

/// Semantic color of a badge, resolved to a terminal color by the draw layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    /// Catalog status of an endpoint
    pub fn for_status(status: &EndpointStatus) -> Self {
        let tone = match status {
            EndpointStatus::Ready => Tone::Success,
            EndpointStatus::Update => Tone::Warning,
            EndpointStatus::Error => Tone::Error,
            EndpointStatus::Other(_) => Tone::Muted,
        };
        Self::new(status.as_str(), tone)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterView {
    pub name: String,
    pub required: bool,
    pub type_label: &'static str,
    pub placeholder: String,
    /// Edit buffer while editing, stored value otherwise
    pub value: String,
    pub editing: bool,
    pub invalid: bool,
}

#[derive(Debug, Clone)]
pub enum ResponseView {
    Idle,
    Loading,
    Success {
        badge: StatusBadge,
        elapsed_ms: u128,
        content_type: String,
        lines: Vec<String>,
    },
    Failure {
        badge: StatusBadge,
        message: String,
    },
}

impl ResponseView {
    pub fn badge(&self) -> Option<&StatusBadge> {
        match self {
            ResponseView::Success { badge, .. } | ResponseView::Failure { badge, .. } => {
                Some(badge)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EndpointView {
    pub id: EndpointId,
    pub name: String,
    pub method: String,
    pub display_path: String,
    pub desc: String,
    pub status: StatusBadge,
    pub parameters: Vec<ParameterView>,
    /// Request URL for the current field values (relative to the origin)
    pub request_url: String,
    pub response: ResponseView,
}

impl EndpointView {
    pub fn build(
        id: EndpointId,
        endpoint: &Endpoint,
        panel: &PanelState,
        edit_mode: &RequestEditMode,
        edit_buffer: &str,
    ) -> Self {
        let parameters = panel
            .template
            .parameters
            .iter()
            .map(|param| {
                let editing =
                    matches!(edit_mode, RequestEditMode::Editing(name) if name == &param.name);
                let value = if editing {
                    edit_buffer.to_string()
                } else {
                    panel.values.get(&param.name).unwrap_or("").to_string()
                };

                ParameterView {
                    name: param.name.clone(),
                    required: param.required,
                    type_label: param.param_type.as_str(),
                    placeholder: param.description.clone(),
                    value,
                    editing,
                    invalid: panel.is_invalid(&param.name),
                }
            })
            .collect();

        Self {
            id,
            name: endpoint.name.clone(),
            method: endpoint.method.to_uppercase(),
            display_path: endpoint.display_path().to_string(),
            desc: endpoint.desc.clone(),
            status: StatusBadge::for_status(&endpoint.status),
            parameters,
            request_url: live_url(panel, edit_mode, edit_buffer),
            response: response_view(&panel.phase),
        }
    }
}

/// Request URL with the field being edited taken from the edit buffer
fn live_url(panel: &PanelState, edit_mode: &RequestEditMode, edit_buffer: &str) -> String {
    match edit_mode {
        RequestEditMode::Editing(name) => {
            let mut values = panel.values.clone();
            values.set(name, edit_buffer.to_string());
            panel.template.build(&values).url
        }
        RequestEditMode::Viewing => panel.current_url().url,
    }
}

pub fn response_view(phase: &PanelPhase) -> ResponseView {
    match phase {
        PanelPhase::Idle => ResponseView::Idle,
        PanelPhase::Loading => ResponseView::Loading,
        PanelPhase::Success(execution) => ResponseView::Success {
            badge: StatusBadge::new(
                format!("{} {}", execution.status, execution.status_text),
                Tone::Success,
            ),
            elapsed_ms: execution.elapsed.as_millis(),
            content_type: execution.content_type.clone(),
            lines: fragment_lines(&execution.fragment),
        },
        PanelPhase::Failed(error) => error_view(error),
    }
}

fn error_view(error: &RequestError) -> ResponseView {
    ResponseView::Failure {
        badge: StatusBadge::new(error.badge(), Tone::Error),
        message: error.to_string(),
    }
}

/// Display lines for a rendered response body
pub fn fragment_lines(fragment: &Fragment) -> Vec<String> {
    match fragment {
        Fragment::Json { pretty } => pretty.lines().map(str::to_string).collect(),
        Fragment::Text { text } => text.lines().map(str::to_string).collect(),
        Fragment::Image(media) => media_lines("🖼  Image", media),
        Fragment::Audio(media) => media_lines("🎵 Audio", media),
        Fragment::Video(media) => media_lines("🎬 Video", media),
    }
}

fn media_lines(title: &str, media: &Media) -> Vec<String> {
    let mut lines = vec![
        format!("{title} ({}, {})", media.content_type, format_size(media.size)),
        format!("Saved to: {}", media.handle.path().display()),
    ];
    if media.playable {
        lines.push("Open the saved file in a media player to play it".to_string());
    }
    lines
}

fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{bytes} B")
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{:.1} MiB", bytes_f / (KIB * KIB))
    }
}
