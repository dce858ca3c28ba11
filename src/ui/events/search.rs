//! Search handlers
//!
//! This module handles searching/filtering endpoints:
//! - Activating search mode
//! - Handling search input
//! - Clearing search filters
//!
//! Every keystroke recomputes the visible set in full.

use super::helpers::{apply, apply_many, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Activate search mode
pub fn handle_search_activate(state: &Arc<RwLock<AppState>>) {
    apply(state, AppAction::EnterSearchMode);
}

/// Handle search input
pub fn handle_search_input(
    selected_index: &mut usize,
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            // Exit search mode and keep the filter active
            apply(state, AppAction::ExitSearchMode);
            debug!("exiting search mode (keeping filter)");
        }
        KeyCode::Esc => {
            // Exit search mode and clear the filter
            apply_many(
                state,
                vec![AppAction::ClearSearchQuery, AppAction::ExitSearchMode],
            );
            debug!("exiting search mode (cleared filter)");
            reset_selection(selected_index, list_state);
        }
        KeyCode::Backspace => {
            apply(state, AppAction::BackspaceSearchQuery);
            log_query(state);
            reset_selection(selected_index, list_state);
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Ctrl+L: Clear search (consistent with other inputs)
            apply(state, AppAction::ClearSearchQuery);
            reset_selection(selected_index, list_state);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToSearchQuery(collect_paste_batch(c)));
            log_query(state);
            // Reset selection to top when search changes
            reset_selection(selected_index, list_state);
        }
        _ => {}
    }
    Ok(())
}

/// Clear search filter
pub fn handle_search_clear(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let has_query = state
        .read()
        .map(|s| !s.search.query.is_empty())
        .unwrap_or(false);

    if has_query {
        apply(state, AppAction::ClearSearchQuery);
        debug!("cleared search filter");
        reset_selection(selected_index, list_state);
    }
}

fn reset_selection(selected_index: &mut usize, list_state: &mut ListState) {
    *selected_index = 0;
    list_state.select(Some(0));
}

fn log_query(state: &Arc<RwLock<AppState>>) {
    if let Ok(s) = state.read() {
        debug!(
            "search query '{}' matches {} endpoint(s)",
            s.search.query,
            s.search.matches.match_count()
        );
    }
}
