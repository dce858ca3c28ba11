use crate::catalog::EndpointId;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Flat,
    Grouped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    Fetching,
    Complete,
}

/// Where the installed catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    GroupHeader {
        category: usize,
        name: String,
        count: usize,
        expanded: bool,
    },
    Endpoint {
        id: EndpointId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EnteringUrl,
    Searching,
}

#[derive(Debug, Clone)]
pub struct UrlSubmission {
    pub base_url: String,
}

/// Tracks which main panel has focus
#[derive(Debug, Clone, PartialEq)]
pub enum PanelFocus {
    EndpointsList, // Left panel
    Details,       // Right panel
}

/// Tracks which tab is active in the Details panel
#[derive(Debug, Clone, PartialEq)]
pub enum DetailTab {
    Endpoint,
    Request,
    Headers,
    Response,
}

// For tracking UI state in Request tab
#[derive(Debug, Clone, PartialEq)]
pub enum RequestEditMode {
    // Just navigating, not editing
    Viewing,

    // Editing parameter with this name
    Editing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Transient notification; a new toast replaces the current one
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= TOAST_TTL
    }
}
