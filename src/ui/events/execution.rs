//! Request execution handlers
//!
//! This module handles:
//! - Executing HTTP requests (Space/Enter key)
//! - Expanding/collapsing groups in grouped mode
//! - Clearing an endpoint panel

use super::helpers::{apply, selected_endpoint_id, toast};
use super::navigation::clamp_selection;
use crate::actions::AppAction;
use crate::catalog::EndpointId;
use crate::request::{execute_request_background, Executor};
use crate::state::{AppState, ExecuteOutcome};
use crate::types::{DetailTab, RenderItem, ToastKind};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Handle Enter/Space key - execute request or expand/collapse group
pub fn handle_enter(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
    executor: &Executor,
) {
    let item = match state.read() {
        Ok(s) => s.selected_item(*selected_index),
        Err(_) => return,
    };

    match item {
        Some(RenderItem::GroupHeader { category, name, .. }) => {
            apply(state, AppAction::ToggleGroupExpanded(category));
            debug!("toggled group {name}");
            clamp_selection(selected_index, state, list_state);
        }
        Some(RenderItem::Endpoint { id }) => execute_endpoint(id, state, executor),
        None => {}
    }
}

/// Execute the endpoint under the cursor, if any
pub fn handle_execute_selected(
    selected_index: usize,
    state: &Arc<RwLock<AppState>>,
    executor: &Executor,
) {
    if let Some(id) = selected_endpoint_id(state, selected_index) {
        execute_endpoint(id, state, executor);
    }
}

/// Validate a panel and start its request in the background
pub fn execute_endpoint(id: EndpointId, state: &Arc<RwLock<AppState>>, executor: &Executor) {
    if executor.origin().is_empty() {
        toast(
            state,
            ToastKind::Error,
            "Server URL not configured (press , to set it)",
        );
        return;
    }

    let outcome = match state.write() {
        Ok(mut s) => s.begin_execution(id),
        Err(_) => return,
    };

    match outcome {
        ExecuteOutcome::Started {
            generation,
            method,
            url,
        } => {
            apply(state, AppAction::NavigateToTab(DetailTab::Response));
            execute_request_background(
                state.clone(),
                executor.clone(),
                id,
                generation,
                method,
                url,
            );
        }
        ExecuteOutcome::Invalid(err) => {
            // show the highlighted fields
            apply(state, AppAction::NavigateToTab(DetailTab::Request));
            debug!("endpoint {id} not executed: {err}");
        }
        ExecuteOutcome::AlreadyRunning => {
            debug!("request already in progress for endpoint {id}");
        }
        ExecuteOutcome::UnknownEndpoint => {
            debug!("no endpoint {id} in the current catalog");
        }
    }
}

/// Reset the selected endpoint's panel to Idle (`c`)
pub fn handle_clear_panel(selected_index: usize, state: &Arc<RwLock<AppState>>) {
    if let Some(id) = selected_endpoint_id(state, selected_index) {
        apply(state, AppAction::ClearPanel(id));
        debug!("cleared panel {id}");
    }
}
