//! Modal dialog handlers
//!
//! The only modal is the server URL dialog (`,`), also opened at startup when
//! no server is configured.

use super::helpers::{apply, collect_paste_batch, toast};
use crate::actions::AppAction;
use crate::config;
use crate::state::AppState;
use crate::types::{ToastKind, UrlSubmission};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Handle URL dialog activation
pub fn handle_url_dialog(state: &Arc<RwLock<AppState>>, base_url: Option<String>) {
    apply(state, AppAction::EnterUrlInputMode { base_url });
    debug!("entering URL input mode");
}

/// Handle URL input modal (with paste batching support)
pub fn handle_url_input(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
) -> Result<Option<UrlSubmission>> {
    match key.code {
        KeyCode::Enter => {
            let base_url = state
                .read()
                .map(|s| s.input.url_input.trim().to_string())
                .unwrap_or_default();

            if base_url.is_empty() {
                debug!("empty server URL, not submitting");
                return Ok(None);
            }

            match config::validate_url(&base_url) {
                Ok(()) => {
                    apply(state, AppAction::ExitUrlInputMode);
                    debug!("server URL submitted: {base_url}");
                    return Ok(Some(UrlSubmission { base_url }));
                }
                Err(e) => {
                    // keep the modal open
                    debug!("invalid server URL: {e}");
                    toast(state, ToastKind::Error, format!("Invalid URL: {e}"));
                }
            }
        }

        KeyCode::Esc => {
            apply(state, AppAction::ExitUrlInputMode);
            debug!("URL input cancelled");
        }

        KeyCode::Backspace => apply(state, AppAction::BackspaceUrlInput),

        // Ctrl+W: Delete word backwards
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordUrlInput);
        }

        // Ctrl+L: Clear field (matching search behavior)
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearUrlInput);
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Collect this character and any pending characters (for paste support)
            let batch = collect_paste_batch(c);
            if batch.len() > 1 {
                debug!("pasted {} characters into URL input", batch.chars().count());
            }
            apply(state, AppAction::AppendToUrlInput(batch));
        }

        _ => {}
    }

    Ok(None)
}
