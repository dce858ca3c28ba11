//! Yank (copy) handlers
//!
//! Copies the request URL (`y`) or the rendered response (`Y`) of the
//! selected endpoint to the system clipboard. Failures only raise a toast.

use super::helpers::{selected_endpoint_id, toast};
use crate::error::ClipboardError;
use crate::panel::{PanelPhase, PanelState};
use crate::request::qualify_url;
use crate::state::AppState;
use crate::types::ToastKind;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Copy the selected endpoint's request URL, qualified with the server origin
pub fn handle_yank_url(selected_index: usize, state: &Arc<RwLock<AppState>>, origin: &str) {
    let Some(id) = selected_endpoint_id(state, selected_index) else {
        return;
    };

    let url = state
        .read()
        .ok()
        .and_then(|s| s.panel(id).map(|panel| panel.current_url().url));

    let result = match url {
        Some(url) => copy_to_clipboard(&qualify_url(origin, &url)),
        None => Err(ClipboardError::Empty),
    };
    report(state, result, "URL copied!");
}

/// Copy the selected endpoint's rendered response (or its error message)
pub fn handle_yank_response(selected_index: usize, state: &Arc<RwLock<AppState>>) {
    let Some(id) = selected_endpoint_id(state, selected_index) else {
        return;
    };

    let text = state
        .read()
        .ok()
        .and_then(|s| s.panel(id).and_then(response_text));

    let result = match text {
        Some(text) => copy_to_clipboard(&text),
        None => Err(ClipboardError::Empty),
    };
    report(state, result, "Response copied!");
}

/// Text shown in the response area, if there is any
fn response_text(panel: &PanelState) -> Option<String> {
    match &panel.phase {
        PanelPhase::Success(execution) => Some(execution.fragment.copy_text()),
        PanelPhase::Failed(error) => Some(error.to_string()),
        PanelPhase::Idle | PanelPhase::Loading => None,
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }

    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard.set_text(text.to_string())?;
    debug!("copied {} bytes to clipboard", text.len());
    Ok(())
}

fn report(state: &Arc<RwLock<AppState>>, result: Result<(), ClipboardError>, success: &str) {
    match result {
        Ok(()) => toast(state, ToastKind::Success, success),
        Err(e) => {
            warn!("copy failed: {e}");
            toast(state, ToastKind::Error, format!("Copy failed: {e}"));
        }
    }
}
