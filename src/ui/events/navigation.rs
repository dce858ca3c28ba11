//! Navigation handlers
//!
//! This module handles navigation through the UI:
//! - List navigation (up/down in endpoints list)
//! - Parameter navigation (j/k in request params)
//! - View mode toggling (flat vs grouped)

use super::helpers::{apply, apply_many, selected_endpoint_id};
use crate::actions::AppAction;
use crate::state::{count_visible_items, AppState};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Navigate up in endpoints list
pub fn handle_up(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    if *selected_index > 0 {
        *selected_index -= 1;
        list_state.select(Some(*selected_index));
        reset_panel_cursor(state);
    }
}

/// Navigate down in endpoints list
pub fn handle_down(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let Ok(max_index) = state
        .read()
        .map(|s| count_visible_items(&s).saturating_sub(1))
    else {
        return;
    };

    if *selected_index < max_index {
        *selected_index += 1;
        list_state.select(Some(*selected_index));
        reset_panel_cursor(state);
    }
}

/// Reset parameter selection and response scroll when changing endpoints
fn reset_panel_cursor(state: &Arc<RwLock<AppState>>) {
    apply_many(
        state,
        vec![AppAction::ResetParamIndex, AppAction::ResetResponseScroll],
    );
}

/// Navigate up in request parameters
pub fn handle_request_param_up(state: &Arc<RwLock<AppState>>) {
    apply(state, AppAction::NavigateParamUp);
}

/// Navigate down in request parameters
pub fn handle_request_param_down(selected_index: usize, state: &Arc<RwLock<AppState>>) {
    let Some(id) = selected_endpoint_id(state, selected_index) else {
        return;
    };

    let param_count = state
        .read()
        .ok()
        .and_then(|s| s.panel(id).map(|p| p.template.parameters.len()))
        .unwrap_or(0);

    apply(state, AppAction::NavigateParamDown { param_count });
}

/// Toggle between flat and grouped view modes
pub fn handle_toggle_view(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    apply(state, AppAction::ToggleViewMode);

    // Reset selection to top
    *selected_index = 0;
    list_state.select(Some(0));

    if let Ok(s) = state.read() {
        debug!("switched to {:?} mode", s.ui.view_mode);
    }
}

/// Keep the list cursor inside the visible rows after the list shrank
pub fn clamp_selection(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let visible = state.read().map(|s| count_visible_items(&s)).unwrap_or(0);
    if *selected_index >= visible {
        *selected_index = visible.saturating_sub(1);
        list_state.select(Some(*selected_index));
    }
}
