use crate::catalog::EndpointId;
use crate::state::AppState;
use crate::types::{DetailTab, InputMode, PanelFocus, RequestEditMode, ToastKind, ViewMode};
use tracing::debug;

/// Lines moved per Ctrl+D / Ctrl+U
pub const SCROLL_LINES_PER_ACTION: usize = 5;

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation actions
    NavigateToPanel(PanelFocus),
    NavigateToTab(DetailTab),
    NavigateTabForward,
    NavigateTabBackward,
    NavigateParamUp,
    /// Move to the next parameter, bounded by the selected endpoint's parameter count
    NavigateParamDown {
        param_count: usize,
    },

    // Scrolling actions
    ScrollUp,
    ScrollDown,

    // View mode actions
    ToggleViewMode,
    /// Toggle expand/collapse for a category
    ToggleGroupExpanded(usize),

    // Input mode actions
    EnterUrlInputMode {
        base_url: Option<String>,
    },
    ExitUrlInputMode,
    EnterSearchMode,
    ExitSearchMode,

    // Text input actions (for modals)
    AppendToUrlInput(String),
    AppendToSearchQuery(String),
    ClearUrlInput,
    ClearSearchQuery,
    BackspaceUrlInput,
    BackspaceSearchQuery,
    DeleteWordUrlInput,

    // Parameter editing actions
    StartEditingParameter {
        id: EndpointId,
        param_name: String,
    },
    AppendToParamBuffer(String),
    BackspaceParamBuffer,
    ClearParamBuffer,
    ConfirmParameterEdit {
        id: EndpointId,
    },
    CancelParameterEdit,

    // Panel actions
    ClearPanel(EndpointId),
    ShowToast {
        kind: ToastKind,
        message: String,
    },

    // State reset actions
    ResetParamIndex,
    ResetResponseScroll,
}

/// Apply an action to the application state
/// This is a pure state transformation function that mutates AppState based on the action
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Navigation
        AppAction::NavigateToPanel(panel) => {
            state.ui.panel_focus = panel;
        }
        AppAction::NavigateToTab(tab) => {
            state.ui.active_detail_tab = tab;
        }
        AppAction::NavigateTabForward => {
            use DetailTab::*;
            match (&state.ui.panel_focus, &state.ui.active_detail_tab) {
                (PanelFocus::EndpointsList, _) => {
                    state.ui.panel_focus = PanelFocus::Details;
                    state.ui.active_detail_tab = Endpoint;
                    state.ui.selected_param_index = 0;
                }
                (PanelFocus::Details, Endpoint) => {
                    state.ui.active_detail_tab = Request;
                    state.ui.selected_param_index = 0;
                }
                (PanelFocus::Details, Request) => {
                    state.ui.active_detail_tab = Headers;
                }
                (PanelFocus::Details, Headers) => {
                    state.ui.active_detail_tab = Response;
                }
                (PanelFocus::Details, Response) => {
                    state.ui.panel_focus = PanelFocus::EndpointsList;
                    state.ui.active_detail_tab = Endpoint;
                }
            }
        }
        AppAction::NavigateTabBackward => {
            use DetailTab::*;
            match (&state.ui.panel_focus, &state.ui.active_detail_tab) {
                (PanelFocus::EndpointsList, _) => {
                    state.ui.panel_focus = PanelFocus::Details;
                    state.ui.active_detail_tab = Response;
                }
                (PanelFocus::Details, Request) => {
                    state.ui.active_detail_tab = Endpoint;
                    state.ui.selected_param_index = 0;
                }
                (PanelFocus::Details, Response) => {
                    state.ui.active_detail_tab = Headers;
                }
                (PanelFocus::Details, Headers) => {
                    state.ui.active_detail_tab = Request;
                    state.ui.selected_param_index = 0;
                }
                (PanelFocus::Details, Endpoint) => {
                    state.ui.panel_focus = PanelFocus::EndpointsList;
                }
            }
        }
        AppAction::NavigateParamUp => {
            state.ui.selected_param_index = state.ui.selected_param_index.saturating_sub(1);
        }
        AppAction::NavigateParamDown { param_count } => {
            if state.ui.selected_param_index + 1 < param_count {
                state.ui.selected_param_index += 1;
            }
        }

        // Scrolling
        AppAction::ScrollUp => {
            state.ui.response_scroll = state
                .ui
                .response_scroll
                .saturating_sub(SCROLL_LINES_PER_ACTION);
        }
        AppAction::ScrollDown => {
            state.ui.response_scroll = state
                .ui
                .response_scroll
                .saturating_add(SCROLL_LINES_PER_ACTION);
        }

        // View mode
        AppAction::ToggleViewMode => {
            state.ui.view_mode = match state.ui.view_mode {
                ViewMode::Flat => ViewMode::Grouped,
                ViewMode::Grouped => ViewMode::Flat,
            };
        }
        AppAction::ToggleGroupExpanded(category) => {
            if !state.ui.expanded_groups.remove(&category) {
                state.ui.expanded_groups.insert(category);
            }
        }

        // Input modes
        AppAction::EnterUrlInputMode { base_url } => {
            state.input.mode = InputMode::EnteringUrl;
            state.input.url_input = base_url.unwrap_or_default();
        }
        AppAction::ExitUrlInputMode => {
            state.input.mode = InputMode::Normal;
            state.input.url_input.clear();
        }
        AppAction::EnterSearchMode => {
            state.input.mode = InputMode::Searching;
            state.search.query.clear();
            state.refresh_search();
        }
        AppAction::ExitSearchMode => {
            state.input.mode = InputMode::Normal;
        }

        // Text input for modals
        AppAction::AppendToUrlInput(text) => {
            state.input.url_input.push_str(&text);
        }
        AppAction::AppendToSearchQuery(text) => {
            state.search.query.push_str(&text);
            state.refresh_search();
        }
        AppAction::ClearUrlInput => {
            state.input.url_input.clear();
        }
        AppAction::ClearSearchQuery => {
            state.search.query.clear();
            state.refresh_search();
        }
        AppAction::BackspaceUrlInput => {
            state.input.url_input.pop();
        }
        AppAction::BackspaceSearchQuery => {
            state.search.query.pop();
            state.refresh_search();
        }
        AppAction::DeleteWordUrlInput => {
            delete_word(&mut state.input.url_input);
        }

        // Parameter editing
        AppAction::StartEditingParameter { id, param_name } => {
            state.request.param_edit_buffer = state
                .panel(id)
                .and_then(|panel| panel.values.get(&param_name))
                .unwrap_or_default()
                .to_string();
            state.request.edit_mode = RequestEditMode::Editing(param_name);
        }
        AppAction::AppendToParamBuffer(text) => {
            state.request.param_edit_buffer.push_str(&text);
        }
        AppAction::BackspaceParamBuffer => {
            state.request.param_edit_buffer.pop();
        }
        AppAction::ClearParamBuffer => {
            state.request.param_edit_buffer.clear();
        }
        AppAction::ConfirmParameterEdit { id } => {
            if let RequestEditMode::Editing(param_name) = &state.request.edit_mode {
                let param_name = param_name.clone();
                let value = std::mem::take(&mut state.request.param_edit_buffer);

                if let Some(panel) = state.panel_mut(id) {
                    panel.values.set(&param_name, value);
                    // once marks are shown they follow every edit
                    if !panel.invalid_fields.is_empty() {
                        panel.revalidate();
                    }
                    debug!("confirmed parameter {param_name} for endpoint {id}");
                }
            }
            state.request.edit_mode = RequestEditMode::Viewing;
            state.request.param_edit_buffer.clear();
        }
        AppAction::CancelParameterEdit => {
            state.request.edit_mode = RequestEditMode::Viewing;
            state.request.param_edit_buffer.clear();
        }

        // Panels
        AppAction::ClearPanel(id) => {
            state.clear_panel(id);
        }
        AppAction::ShowToast { kind, message } => {
            state.show_toast(kind, message);
        }

        // State resets
        AppAction::ResetParamIndex => {
            state.ui.selected_param_index = 0;
        }
        AppAction::ResetResponseScroll => {
            state.ui.response_scroll = 0;
        }
    }
}

/// Helper function to delete the last word from a string (Ctrl+W behavior).
/// URL separators (`/`, `:`, `.`) count as word boundaries.
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    if let Some(pos) = s.rfind(|c: char| c.is_whitespace() || matches!(c, '/' | ':' | '.')) {
        s.truncate(pos);
    } else {
        s.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Settings;
    use crate::panel::PanelPhase;
    use crate::types::CatalogSource;

    fn create_test_state() -> AppState {
        let mut state = AppState::default();
        state.install_catalog(Settings::fallback(), CatalogSource::Fallback);
        state
    }

    /// Downloader / YouTube, parameters `url` and `apikey`
    const YOUTUBE: EndpointId = EndpointId {
        category: 0,
        endpoint: 0,
    };

    #[test]
    fn test_navigate_to_panel() {
        let mut state = create_test_state();
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);

        apply_action(AppAction::NavigateToPanel(PanelFocus::Details), &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Details);
    }

    #[test]
    fn test_navigate_tab_forward() {
        let mut state = create_test_state();
        state.ui.panel_focus = PanelFocus::Details;
        state.ui.active_detail_tab = DetailTab::Endpoint;

        apply_action(AppAction::NavigateTabForward, &mut state);
        assert_eq!(state.ui.active_detail_tab, DetailTab::Request);

        apply_action(AppAction::NavigateTabForward, &mut state);
        assert_eq!(state.ui.active_detail_tab, DetailTab::Headers);

        apply_action(AppAction::NavigateTabForward, &mut state);
        assert_eq!(state.ui.active_detail_tab, DetailTab::Response);

        apply_action(AppAction::NavigateTabForward, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);
    }

    #[test]
    fn test_navigate_tab_backward() {
        let mut state = create_test_state();
        state.ui.panel_focus = PanelFocus::Details;
        state.ui.active_detail_tab = DetailTab::Response;

        apply_action(AppAction::NavigateTabBackward, &mut state);
        assert_eq!(state.ui.active_detail_tab, DetailTab::Headers);

        apply_action(AppAction::NavigateTabBackward, &mut state);
        assert_eq!(state.ui.active_detail_tab, DetailTab::Request);

        apply_action(AppAction::NavigateTabBackward, &mut state);
        assert_eq!(state.ui.active_detail_tab, DetailTab::Endpoint);

        apply_action(AppAction::NavigateTabBackward, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);
    }

    #[test]
    fn test_toggle_view_mode() {
        let mut state = create_test_state();
        assert_eq!(state.ui.view_mode, ViewMode::Grouped);

        apply_action(AppAction::ToggleViewMode, &mut state);
        assert_eq!(state.ui.view_mode, ViewMode::Flat);

        apply_action(AppAction::ToggleViewMode, &mut state);
        assert_eq!(state.ui.view_mode, ViewMode::Grouped);
    }

    #[test]
    fn test_toggle_group_expanded() {
        let mut state = create_test_state();
        assert!(state.ui.expanded_groups.is_empty());

        apply_action(AppAction::ToggleGroupExpanded(1), &mut state);
        assert!(state.ui.expanded_groups.contains(&1));
        assert_eq!(state.ui.expanded_groups.len(), 1);

        apply_action(AppAction::ToggleGroupExpanded(1), &mut state);
        assert!(state.ui.expanded_groups.is_empty());
    }

    #[test]
    fn test_scroll_actions() {
        let mut state = create_test_state();
        state.ui.response_scroll = 10;

        apply_action(AppAction::ScrollDown, &mut state);
        assert_eq!(state.ui.response_scroll, 15);

        apply_action(AppAction::ScrollUp, &mut state);
        assert_eq!(state.ui.response_scroll, 10);

        apply_action(AppAction::ScrollUp, &mut state);
        apply_action(AppAction::ScrollUp, &mut state);
        apply_action(AppAction::ScrollUp, &mut state);
        assert_eq!(state.ui.response_scroll, 0);
    }

    #[test]
    fn test_enter_url_input_mode() {
        let mut state = create_test_state();

        apply_action(
            AppAction::EnterUrlInputMode {
                base_url: Some("http://localhost:5000".to_string()),
            },
            &mut state,
        );

        assert_eq!(state.input.mode, InputMode::EnteringUrl);
        assert_eq!(state.input.url_input, "http://localhost:5000");

        apply_action(AppAction::ExitUrlInputMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
        assert!(state.input.url_input.is_empty());
    }

    #[test]
    fn test_text_input_actions() {
        let mut state = create_test_state();

        apply_action(
            AppAction::AppendToUrlInput("http://".to_string()),
            &mut state,
        );
        assert_eq!(state.input.url_input, "http://");

        apply_action(
            AppAction::AppendToUrlInput("localhost".to_string()),
            &mut state,
        );
        assert_eq!(state.input.url_input, "http://localhost");

        apply_action(AppAction::BackspaceUrlInput, &mut state);
        assert_eq!(state.input.url_input, "http://localhos");

        apply_action(AppAction::ClearUrlInput, &mut state);
        assert_eq!(state.input.url_input, "");
    }

    #[test]
    fn test_delete_word() {
        let mut s = "hello world foo".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello world");

        delete_word(&mut s);
        assert_eq!(s, "hello");

        delete_word(&mut s);
        assert_eq!(s, "");

        delete_word(&mut s);
        assert_eq!(s, "");
    }

    #[test]
    fn test_delete_word_url_segments() {
        let mut s = "http://localhost:3000/api".to_string();
        delete_word(&mut s);
        assert_eq!(s, "http://localhost:3000");

        delete_word(&mut s);
        assert_eq!(s, "http://localhost");
    }

    #[test]
    fn test_delete_word_with_trailing_space() {
        let mut s = "hello world   ".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_parameter_buffer_actions() {
        let mut state = create_test_state();

        apply_action(
            AppAction::AppendToParamBuffer("123".to_string()),
            &mut state,
        );
        assert_eq!(state.request.param_edit_buffer, "123");

        apply_action(AppAction::BackspaceParamBuffer, &mut state);
        assert_eq!(state.request.param_edit_buffer, "12");

        apply_action(AppAction::ClearParamBuffer, &mut state);
        assert_eq!(state.request.param_edit_buffer, "");
    }

    #[test]
    fn test_edit_and_confirm_parameter() {
        let mut state = create_test_state();

        apply_action(
            AppAction::StartEditingParameter {
                id: YOUTUBE,
                param_name: "url".to_string(),
            },
            &mut state,
        );
        assert_eq!(
            state.request.edit_mode,
            RequestEditMode::Editing("url".to_string())
        );
        assert_eq!(state.request.param_edit_buffer, "");

        apply_action(
            AppAction::AppendToParamBuffer("https://x".to_string()),
            &mut state,
        );
        apply_action(AppAction::ConfirmParameterEdit { id: YOUTUBE }, &mut state);

        assert_eq!(state.request.edit_mode, RequestEditMode::Viewing);
        let panel = state.panel(YOUTUBE).unwrap();
        assert_eq!(panel.values.get("url"), Some("https://x"));
        assert_eq!(
            panel.current_url().url,
            "/api/downloader/youtube?url=https%3A%2F%2Fx"
        );

        // re-editing starts from the stored value
        apply_action(
            AppAction::StartEditingParameter {
                id: YOUTUBE,
                param_name: "url".to_string(),
            },
            &mut state,
        );
        assert_eq!(state.request.param_edit_buffer, "https://x");
    }

    #[test]
    fn test_confirm_updates_shown_validation_marks() {
        let mut state = create_test_state();
        state.begin_execution(YOUTUBE);
        assert!(state.panel(YOUTUBE).unwrap().is_invalid("apikey"));

        apply_action(
            AppAction::StartEditingParameter {
                id: YOUTUBE,
                param_name: "apikey".to_string(),
            },
            &mut state,
        );
        apply_action(
            AppAction::AppendToParamBuffer("abc123".to_string()),
            &mut state,
        );
        apply_action(AppAction::ConfirmParameterEdit { id: YOUTUBE }, &mut state);

        let panel = state.panel(YOUTUBE).unwrap();
        assert!(!panel.is_invalid("apikey"));
        assert!(panel.is_invalid("url"));
    }

    #[test]
    fn test_cancel_parameter_edit() {
        let mut state = create_test_state();
        state.request.edit_mode = RequestEditMode::Editing("url".to_string());
        state.request.param_edit_buffer = "test value".to_string();

        apply_action(AppAction::CancelParameterEdit, &mut state);
        assert_eq!(state.request.edit_mode, RequestEditMode::Viewing);
        assert_eq!(state.request.param_edit_buffer, "");
        assert_eq!(state.panel(YOUTUBE).unwrap().values.get("url"), None);
    }

    #[test]
    fn test_clear_panel_action() {
        let mut state = create_test_state();
        state
            .panel_mut(YOUTUBE)
            .unwrap()
            .values
            .set("url", "https://x".to_string());
        state.begin_execution(YOUTUBE);

        apply_action(AppAction::ClearPanel(YOUTUBE), &mut state);

        let panel = state.panel(YOUTUBE).unwrap();
        assert!(panel.values.is_empty());
        assert!(panel.invalid_fields.is_empty());
        assert!(matches!(panel.phase, PanelPhase::Idle));
    }

    #[test]
    fn test_navigate_param_up_down() {
        let mut state = create_test_state();
        state.ui.selected_param_index = 0;

        apply_action(AppAction::NavigateParamDown { param_count: 2 }, &mut state);
        assert_eq!(state.ui.selected_param_index, 1);

        // bounded by the parameter count
        apply_action(AppAction::NavigateParamDown { param_count: 2 }, &mut state);
        assert_eq!(state.ui.selected_param_index, 1);

        apply_action(AppAction::NavigateParamUp, &mut state);
        assert_eq!(state.ui.selected_param_index, 0);

        // Test saturation at zero
        apply_action(AppAction::NavigateParamUp, &mut state);
        assert_eq!(state.ui.selected_param_index, 0);
    }

    #[test]
    fn test_search_actions() {
        let mut state = create_test_state();

        apply_action(AppAction::EnterSearchMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Searching);

        apply_action(
            AppAction::AppendToSearchQuery("tiktok".to_string()),
            &mut state,
        );
        assert_eq!(state.search.query, "tiktok");
        assert_eq!(state.search.matches.match_count(), 1);

        apply_action(AppAction::BackspaceSearchQuery, &mut state);
        assert_eq!(state.search.query, "tikto");
        assert_eq!(state.search.matches.match_count(), 1);

        apply_action(AppAction::ClearSearchQuery, &mut state);
        assert_eq!(state.search.query, "");
        assert!(!state.search.matches.is_filtering());

        apply_action(AppAction::ExitSearchMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_show_toast_action() {
        let mut state = create_test_state();
        apply_action(
            AppAction::ShowToast {
                kind: ToastKind::Success,
                message: "URL copied!".to_string(),
            },
            &mut state,
        );
        assert_eq!(state.toast.as_ref().unwrap().message, "URL copied!");
    }
}
