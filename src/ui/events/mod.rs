//! Event handling system for api-console-tui
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles multiple input modes:
//! - Normal: Standard navigation and commands
//! - EnteringUrl: Modal for configuring the server URL
//! - Searching: Filtering endpoints by query
//! - Parameter editing: Inline editing of request parameters
//!
//! # Architecture
//!
//! The EventHandler uses an action pattern where input events generate AppActions
//! that are applied to AppState via the apply_action function in actions.rs.
//!
//! # Lock Management
//!
//! Handlers take short read locks to inspect state and release them before
//! applying actions. No lock is held across a spawned request.

mod execution;
mod helpers;
mod modals;
mod navigation;
mod parameters;
mod search;
mod yank;

pub use helpers::apply;

use crate::actions::AppAction;
use crate::request::Executor;
use crate::state::AppState;
use crate::types::{DetailTab, InputMode, PanelFocus, RequestEditMode, UrlSubmission};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// What the app loop must do after an input event
#[derive(Debug, Default)]
pub struct EventOutcome {
    /// Re-fetch `/settings`
    pub reload: bool,
    pub url_submitted: Option<UrlSubmission>,
}

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
    pub selected_index: usize,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event handling loop - dispatches to appropriate handlers based on input mode
    pub fn handle_events(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
        executor: &Executor,
        base_url: Option<String>,
    ) -> Result<EventOutcome> {
        let mut outcome = EventOutcome::default();

        if !event::poll(std::time::Duration::from_millis(50))? {
            return Ok(outcome);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(outcome);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(outcome);
        }

        let Some((input_mode, editing)) = state.read().ok().map(|s| {
            (
                s.input.mode.clone(),
                matches!(s.request.edit_mode, RequestEditMode::Editing(_)),
            )
        }) else {
            return Ok(outcome);
        };

        match input_mode {
            InputMode::EnteringUrl => {
                outcome.url_submitted = modals::handle_url_input(key, state)?;
            }
            InputMode::Searching => {
                search::handle_search_input(&mut self.selected_index, key, state, list_state)?;
            }
            InputMode::Normal if editing => {
                parameters::handle_param_input(key, self.selected_index, state);
            }
            InputMode::Normal => {
                outcome.reload = self.handle_normal_key(key, state, list_state, executor, base_url);
            }
        }

        Ok(outcome)
    }

    /// Normal-mode commands. Returns true when settings must be reloaded.
    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
        executor: &Executor,
        base_url: Option<String>,
    ) -> bool {
        let Some((panel, active_tab)) = state
            .read()
            .ok()
            .map(|s| (s.ui.panel_focus.clone(), s.ui.active_detail_tab.clone()))
        else {
            return false;
        };
        let on_request_tab = panel == PanelFocus::Details && active_tab == DetailTab::Request;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // ctrl + modifiers
            // reload settings
            KeyCode::Char('r') if ctrl => return true,
            KeyCode::F(5) => return true,

            // Ctrl+l: Clear search filter
            KeyCode::Char('l') if ctrl => {
                search::handle_search_clear(&mut self.selected_index, state, list_state);
            }

            // Ctrl+u / Ctrl+d: scroll the response
            KeyCode::Char('u') if ctrl => {
                if panel == PanelFocus::Details {
                    apply(state, AppAction::ScrollUp);
                }
            }
            KeyCode::Char('d') if ctrl => {
                if panel == PanelFocus::Details {
                    apply(state, AppAction::ScrollDown);
                }
            }
            KeyCode::Char(_) if ctrl => {}

            // QUIT
            KeyCode::Char('q') => self.should_quit = true,

            // nav down
            KeyCode::Char('j') | KeyCode::Down => match panel {
                PanelFocus::EndpointsList => {
                    navigation::handle_down(&mut self.selected_index, state, list_state);
                }
                PanelFocus::Details if active_tab == DetailTab::Request => {
                    navigation::handle_request_param_down(self.selected_index, state);
                }
                // For other tabs, j/k do nothing (use Ctrl+d/u for scrolling)
                PanelFocus::Details => {}
            },
            // nav up
            KeyCode::Char('k') | KeyCode::Up => match panel {
                PanelFocus::EndpointsList => {
                    navigation::handle_up(&mut self.selected_index, state, list_state);
                }
                PanelFocus::Details if active_tab == DetailTab::Request => {
                    navigation::handle_request_param_up(state);
                }
                PanelFocus::Details => {}
            },

            // edit param
            KeyCode::Char('e') if on_request_tab => {
                parameters::handle_request_param_edit(self.selected_index, state);
            }
            // clear panel
            KeyCode::Char('c') => {
                execution::handle_clear_panel(self.selected_index, state);
            }
            // copy URL / response
            KeyCode::Char('y') => {
                yank::handle_yank_url(self.selected_index, state, executor.origin());
            }
            KeyCode::Char('Y') => {
                yank::handle_yank_response(self.selected_index, state);
            }

            // toggle view - list <-> grouped
            KeyCode::Char('g') => {
                navigation::handle_toggle_view(&mut self.selected_index, state, list_state);
            }
            // config url
            KeyCode::Char(',') => modals::handle_url_dialog(state, base_url),
            // search endpoints
            KeyCode::Char('/') => search::handle_search_activate(state),

            // switch panels
            KeyCode::Char('1') => {
                apply(state, AppAction::NavigateToPanel(PanelFocus::EndpointsList));
            }
            KeyCode::Char('2') => apply(state, AppAction::NavigateToPanel(PanelFocus::Details)),

            // Special keys --
            KeyCode::Tab => apply(state, AppAction::NavigateTabForward),
            // Shift+Tab (BackTab) - move left
            KeyCode::BackTab => apply(state, AppAction::NavigateTabBackward),

            // space / enter - execute & expand
            KeyCode::Char(' ') | KeyCode::Enter => match panel {
                PanelFocus::EndpointsList => {
                    execution::handle_enter(
                        &mut self.selected_index,
                        state,
                        list_state,
                        executor,
                    );
                }
                PanelFocus::Details => {
                    execution::handle_execute_selected(self.selected_index, state, executor);
                }
            },

            _ => {}
        }

        false
    }
}
