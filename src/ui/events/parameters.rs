//! Parameter editing handlers
//!
//! This module handles editing of request parameters:
//! - Entering edit mode for a selected parameter
//! - Routing keys to the edit buffer while editing
//! - Confirming or cancelling the edit

use super::helpers::{apply, collect_paste_batch, selected_endpoint_id};
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::RequestEditMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Enter edit mode for the currently selected parameter
pub fn handle_request_param_edit(selected_index: usize, state: &Arc<RwLock<AppState>>) {
    let Some(id) = selected_endpoint_id(state, selected_index) else {
        return;
    };

    let param_name = {
        let Ok(s) = state.read() else {
            return;
        };

        // Only enter edit mode if currently in Viewing mode
        if !matches!(s.request.edit_mode, RequestEditMode::Viewing) {
            return;
        }

        s.panel(id).and_then(|panel| {
            panel
                .template
                .parameters
                .get(s.ui.selected_param_index)
                .map(|param| param.name.clone())
        })
    };

    if let Some(param_name) = param_name {
        debug!("editing parameter {param_name} of endpoint {id}");
        apply(state, AppAction::StartEditingParameter { id, param_name });
    }
}

/// Keys while a parameter is being edited. Every printable key goes to the buffer.
pub fn handle_param_input(key: KeyEvent, selected_index: usize, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Enter => handle_request_param_confirm(selected_index, state),
        KeyCode::Esc => apply(state, AppAction::CancelParameterEdit),
        KeyCode::Backspace => apply(state, AppAction::BackspaceParamBuffer),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearParamBuffer);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToParamBuffer(collect_paste_batch(c)));
        }
        _ => {}
    }
}

/// Confirm parameter edit and save the value
pub fn handle_request_param_confirm(selected_index: usize, state: &Arc<RwLock<AppState>>) {
    match selected_endpoint_id(state, selected_index) {
        Some(id) => apply(state, AppAction::ConfirmParameterEdit { id }),
        // the endpoint vanished (catalog reload); drop the edit
        None => apply(state, AppAction::CancelParameterEdit),
    }
}
