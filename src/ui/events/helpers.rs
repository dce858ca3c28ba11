//! Helper functions for event handling
//!
//! State locking helpers, selection lookups and paste batching shared by the
//! event handlers.

use crate::actions::{apply_action, AppAction};
use crate::catalog::EndpointId;
use crate::state::AppState;
use crate::types::ToastKind;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    if let Ok(mut s) = state.write() {
        apply_action(action, &mut s);
    }
}

/// Apply multiple actions to state under one lock
pub fn apply_many(state: &Arc<RwLock<AppState>>, actions: Vec<AppAction>) {
    if let Ok(mut s) = state.write() {
        for action in actions {
            apply_action(action, &mut s);
        }
    }
}

pub fn toast(state: &Arc<RwLock<AppState>>, kind: ToastKind, message: impl Into<String>) {
    apply(
        state,
        AppAction::ShowToast {
            kind,
            message: message.into(),
        },
    );
}

/// Endpoint under the list cursor, if the cursor is on an endpoint row
pub fn selected_endpoint_id(
    state: &Arc<RwLock<AppState>>,
    selected_index: usize,
) -> Option<EndpointId> {
    state.read().ok()?.selected_endpoint_id(selected_index)
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this function checks for any immediately available
/// character events and batches them together. This enables fast paste operations
/// in terminals.
pub fn collect_paste_batch(initial_char: char) -> String {
    let mut batch = String::from(initial_char);

    // Drain any immediately available character events
    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        match event::read() {
            Ok(Event::Key(next_key)) => match next_key.code {
                KeyCode::Char(next_c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    batch.push(next_c);
                }
                // Non-character or control key, stop batching
                _ => break,
            },
            _ => break,
        }
    }

    batch
}
