use crate::catalog::{Endpoint, EndpointId, Settings};
use crate::error::RequestError;
use crate::panel::{PanelPhase, PanelState};
use crate::request::Execution;
use crate::search::{SearchIndex, SearchMatches};
use crate::types::{
    CatalogSource, DetailTab, InputMode, LoadingState, PanelFocus, RenderItem, RequestEditMode,
    Toast, ToastKind, ViewMode,
};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Catalog data and its loading status
#[derive(Debug, Clone)]
pub struct DataState {
    pub settings: Settings,
    pub source: CatalogSource,
    pub loading_state: LoadingState,
}

/// Navigation and presentation state
#[derive(Debug, Clone)]
pub struct UiState {
    pub view_mode: ViewMode,
    /// Category indices whose endpoints are listed
    pub expanded_groups: HashSet<usize>,
    pub panel_focus: PanelFocus,
    pub active_detail_tab: DetailTab,
    pub selected_param_index: usize,
    /// Scroll offset for the response body (lines)
    pub response_scroll: usize,
}

/// Modal text input
#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub url_input: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub index: SearchIndex,
    pub matches: SearchMatches,
}

/// Per-endpoint panels and the inline parameter editor
#[derive(Debug, Clone)]
pub struct RequestState {
    pub panels: HashMap<EndpointId, PanelState>,
    pub edit_mode: RequestEditMode,
    pub param_edit_buffer: String,
    /// Last generation handed to an execution; never reset, not even by a new catalog
    pub last_generation: u64,
}

/// Application context shared by the UI loop and background tasks
#[derive(Debug, Clone)]
pub struct AppState {
    pub data: DataState,
    pub ui: UiState,
    pub input: InputState,
    pub search: SearchState,
    pub request: RequestState,
    pub toast: Option<Toast>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            data: DataState {
                settings: Settings::default(),
                source: CatalogSource::Remote,
                loading_state: LoadingState::Idle,
            },
            ui: UiState {
                view_mode: ViewMode::Grouped,
                expanded_groups: HashSet::new(),
                panel_focus: PanelFocus::EndpointsList,
                active_detail_tab: DetailTab::Endpoint,
                selected_param_index: 0,
                response_scroll: 0,
            },
            input: InputState {
                mode: InputMode::Normal,
                url_input: String::new(),
            },
            search: SearchState::default(),
            request: RequestState {
                panels: HashMap::new(),
                edit_mode: RequestEditMode::Viewing,
                param_edit_buffer: String::new(),
                last_generation: 0,
            },
            toast: None,
        }
    }
}

/// Result of asking a panel to execute
#[derive(Debug, Clone, PartialEq)]
pub enum ExecuteOutcome {
    /// Panel moved to `Loading`; the request must be issued with this generation
    Started {
        generation: u64,
        method: String,
        url: String,
    },
    /// A request for this panel is still in flight
    AlreadyRunning,
    /// Required parameters are missing; nothing was sent
    Invalid(RequestError),
    UnknownEndpoint,
}

impl AppState {
    /// Replace the catalog. Panels and the search index are rebuilt in the
    /// same call so no query ever runs against records of an older catalog.
    pub fn install_catalog(&mut self, settings: Settings, source: CatalogSource) {
        self.request.panels = settings
            .endpoint_ids()
            .filter_map(|id| settings.endpoint(id).map(|e| (id, PanelState::new(e))))
            .collect();
        self.request.edit_mode = RequestEditMode::Viewing;
        self.request.param_edit_buffer.clear();

        self.search.index = SearchIndex::build(&settings);

        let category_count = settings.categories.len();
        self.ui.expanded_groups.retain(|c| *c < category_count);
        self.ui.selected_param_index = 0;
        self.ui.response_scroll = 0;

        self.data.settings = settings;
        self.data.source = source;
        self.data.loading_state = LoadingState::Complete;

        self.refresh_search();
    }

    /// Recompute the visible set for the current query
    pub fn refresh_search(&mut self) {
        self.search.matches = self.search.index.filter(&self.search.query);
    }

    pub fn endpoint(&self, id: EndpointId) -> Option<&Endpoint> {
        self.data.settings.endpoint(id)
    }

    pub fn panel(&self, id: EndpointId) -> Option<&PanelState> {
        self.request.panels.get(&id)
    }

    pub fn panel_mut(&mut self, id: EndpointId) -> Option<&mut PanelState> {
        self.request.panels.get_mut(&id)
    }

    /// Group headers with their visible endpoints. Groups are listed expanded
    /// while a search term is active.
    pub fn get_render_items(&self) -> Vec<RenderItem> {
        let matches = &self.search.matches;
        let mut items = Vec::new();

        for (ci, category) in self.data.settings.categories.iter().enumerate() {
            if !matches.category_visible(ci) {
                continue;
            }

            let visible: Vec<EndpointId> = (0..category.items.len())
                .map(|ei| EndpointId::new(ci, ei))
                .filter(|id| matches.endpoint_visible(*id))
                .collect();
            let expanded = matches.is_filtering() || self.ui.expanded_groups.contains(&ci);

            items.push(RenderItem::GroupHeader {
                category: ci,
                name: category.name.clone(),
                count: visible.len(),
                expanded,
            });

            if expanded {
                items.extend(visible.into_iter().map(|id| RenderItem::Endpoint { id }));
            }
        }

        items
    }

    /// Rows of the endpoint list for the current view mode
    pub fn visible_items(&self) -> Vec<RenderItem> {
        match self.ui.view_mode {
            ViewMode::Flat => self
                .search
                .matches
                .visible_endpoints()
                .map(|id| RenderItem::Endpoint { id })
                .collect(),
            ViewMode::Grouped => self.get_render_items(),
        }
    }

    pub fn selected_item(&self, selected_index: usize) -> Option<RenderItem> {
        self.visible_items().into_iter().nth(selected_index)
    }

    pub fn selected_endpoint_id(&self, selected_index: usize) -> Option<EndpointId> {
        match self.selected_item(selected_index)? {
            RenderItem::Endpoint { id } => Some(id),
            RenderItem::GroupHeader { .. } => None,
        }
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Validate the panel's fields and, if they are complete, move it to `Loading`
    pub fn begin_execution(&mut self, id: EndpointId) -> ExecuteOutcome {
        let Some(method) = self.endpoint(id).map(|e| e.method.clone()) else {
            return ExecuteOutcome::UnknownEndpoint;
        };

        let outcome = match self.request.panels.get_mut(&id) {
            None => ExecuteOutcome::UnknownEndpoint,
            Some(panel) if panel.is_loading() => ExecuteOutcome::AlreadyRunning,
            Some(panel) => {
                let built = panel.revalidate();
                if built.has_errors {
                    let error = RequestError::Validation {
                        missing: built.invalid_fields,
                    };
                    panel.phase = PanelPhase::Failed(error.clone());
                    ExecuteOutcome::Invalid(error)
                } else {
                    self.request.last_generation += 1;
                    panel.generation = self.request.last_generation;
                    panel.phase = PanelPhase::Loading;
                    ExecuteOutcome::Started {
                        generation: panel.generation,
                        method,
                        url: built.url,
                    }
                }
            }
        };

        match &outcome {
            ExecuteOutcome::AlreadyRunning => {
                self.show_toast(ToastKind::Info, "Request already in progress")
            }
            ExecuteOutcome::Invalid(_) => {
                self.show_toast(ToastKind::Error, "Please fill in all required parameters")
            }
            ExecuteOutcome::Started { .. } => self.ui.response_scroll = 0,
            ExecuteOutcome::UnknownEndpoint => {}
        }

        outcome
    }

    /// Store the result of an execution. Returns false when the completion is
    /// stale (the panel was cleared, re-executed or the catalog replaced).
    pub fn finish_execution(
        &mut self,
        id: EndpointId,
        generation: u64,
        result: Result<Execution, RequestError>,
    ) -> bool {
        let toast = match self.request.panels.get_mut(&id) {
            Some(panel) if panel.generation == generation && panel.is_loading() => {
                let toast = match &result {
                    Ok(_) => (ToastKind::Success, "Request successful!".to_string()),
                    Err(e) => (ToastKind::Error, format!("Request failed: {e}")),
                };
                panel.phase = match result {
                    Ok(execution) => PanelPhase::Success(execution),
                    Err(e) => PanelPhase::Failed(e),
                };
                toast
            }
            _ => return false,
        };

        self.show_toast(toast.0, toast.1);
        self.ui.response_scroll = 0;
        true
    }

    /// Reset a panel to `Idle`, wiping its field values and validation marks
    pub fn clear_panel(&mut self, id: EndpointId) {
        if let Some(panel) = self.request.panels.get_mut(&id) {
            panel.clear();
            self.request.edit_mode = RequestEditMode::Viewing;
            self.request.param_edit_buffer.clear();
            self.ui.response_scroll = 0;
            self.show_toast(ToastKind::Info, "Form cleared");
        }
    }
}

/// Helper function to count visible items in current view mode
pub fn count_visible_items(state: &AppState) -> usize {
    state.visible_items().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Fragment;
    use std::time::Duration;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.install_catalog(Settings::fallback(), CatalogSource::Fallback);
        state
    }

    fn youtube_id(state: &AppState) -> EndpointId {
        state
            .data
            .settings
            .endpoint_ids()
            .find(|id| state.endpoint(*id).unwrap().path.contains("youtube"))
            .unwrap()
    }

    fn fake_execution() -> Execution {
        Execution {
            status: 200,
            status_text: "OK".to_string(),
            elapsed: Duration::from_millis(12),
            content_type: "text/plain".to_string(),
            headers: vec![],
            fragment: Fragment::Text {
                text: "ok".to_string(),
            },
        }
    }

    #[test]
    fn test_install_catalog_builds_panels_and_index() {
        let state = loaded_state();
        let total = state.data.settings.total_endpoints();

        assert_eq!(state.data.loading_state, LoadingState::Complete);
        assert_eq!(state.request.panels.len(), total);
        assert_eq!(state.search.index.records().len(), total);
        assert_eq!(state.search.matches.match_count(), total);
    }

    #[test]
    fn test_reinstall_applies_current_query_to_new_catalog() {
        let mut state = loaded_state();
        state.search.query = "tiktok".to_string();
        state.refresh_search();
        assert_eq!(state.search.matches.match_count(), 1);

        let mut settings = Settings::fallback();
        settings.categories.truncate(1);
        settings.categories[0].items.retain(|e| !e.path.contains("tiktok"));
        state.install_catalog(settings, CatalogSource::Remote);

        assert!(state.search.matches.no_results());
    }

    #[test]
    fn test_grouped_items_respect_expansion() {
        let mut state = loaded_state();
        let categories = state.data.settings.total_categories();
        assert_eq!(state.get_render_items().len(), categories);

        state.ui.expanded_groups.insert(0);
        let first_count = state.data.settings.categories[0].items.len();
        assert_eq!(state.get_render_items().len(), categories + first_count);
        assert_eq!(
            state.get_render_items()[1],
            RenderItem::Endpoint {
                id: EndpointId::new(0, 0)
            }
        );
    }

    #[test]
    fn test_search_shows_only_matching_groups_expanded() {
        let mut state = loaded_state();
        state.search.query = "tiktok".to_string();
        state.refresh_search();

        let items = state.get_render_items();
        assert_eq!(items.len(), 2);
        assert!(matches!(
            &items[0],
            RenderItem::GroupHeader { name, count: 1, expanded: true, .. } if name == "Downloader"
        ));
    }

    #[test]
    fn test_flat_items_follow_search() {
        let mut state = loaded_state();
        state.ui.view_mode = ViewMode::Flat;
        assert_eq!(
            count_visible_items(&state),
            state.data.settings.total_endpoints()
        );

        state.search.query = "nothing-matches-this".to_string();
        state.refresh_search();
        assert_eq!(count_visible_items(&state), 0);
        assert_eq!(state.selected_endpoint_id(0), None);
    }

    #[test]
    fn test_begin_execution_validation_failure() {
        let mut state = loaded_state();
        let id = youtube_id(&state);
        state
            .panel_mut(id)
            .unwrap()
            .values
            .set("url", "https://x".to_string());

        let outcome = state.begin_execution(id);
        assert_eq!(
            outcome,
            ExecuteOutcome::Invalid(RequestError::Validation {
                missing: vec!["apikey".to_string()]
            })
        );
        assert!(state.panel(id).unwrap().is_invalid("apikey"));
        assert!(matches!(
            state.panel(id).unwrap().phase,
            PanelPhase::Failed(RequestError::Validation { .. })
        ));
        assert_eq!(state.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_begin_execution_refuses_while_loading() {
        let mut state = loaded_state();
        let id = youtube_id(&state);
        let panel = state.panel_mut(id).unwrap();
        panel.values.set("url", "https://x".to_string());
        panel.values.set("apikey", "abc123".to_string());

        let outcome = state.begin_execution(id);
        assert_eq!(
            outcome,
            ExecuteOutcome::Started {
                generation: 1,
                method: "GET".to_string(),
                url: "/api/downloader/youtube?url=https%3A%2F%2Fx&apikey=abc123".to_string(),
            }
        );
        assert!(state.panel(id).unwrap().is_loading());

        assert_eq!(state.begin_execution(id), ExecuteOutcome::AlreadyRunning);
        assert_eq!(state.toast.as_ref().unwrap().kind, ToastKind::Info);
    }

    #[test]
    fn test_finish_execution_success_and_failure() {
        let mut state = loaded_state();
        let id = EndpointId::new(3, 0); // Random Anime Image, no parameters

        let ExecuteOutcome::Started { generation, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };
        assert!(state.finish_execution(id, generation, Ok(fake_execution())));
        assert!(matches!(
            state.panel(id).unwrap().phase,
            PanelPhase::Success(_)
        ));
        assert_eq!(state.toast.as_ref().unwrap().message, "Request successful!");

        let ExecuteOutcome::Started { generation, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };
        let error = RequestError::HttpStatus {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert!(state.finish_execution(id, generation, Err(error)));
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "Request failed: HTTP 404: Not Found"
        );
    }

    #[test]
    fn test_stale_completion_after_clear_is_discarded() {
        let mut state = loaded_state();
        let id = EndpointId::new(3, 0);

        let ExecuteOutcome::Started { generation, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };
        state.clear_panel(id);
        assert_eq!(state.toast.as_ref().unwrap().message, "Form cleared");

        assert!(!state.finish_execution(id, generation, Ok(fake_execution())));
        assert!(matches!(state.panel(id).unwrap().phase, PanelPhase::Idle));
    }

    #[test]
    fn test_clear_allows_immediate_re_execution() {
        let mut state = loaded_state();
        let id = EndpointId::new(3, 0);

        let ExecuteOutcome::Started { generation: first, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };
        state.clear_panel(id);
        let ExecuteOutcome::Started { generation: second, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };

        assert!(!state.finish_execution(id, first, Ok(fake_execution())));
        assert!(state.panel(id).unwrap().is_loading());
        assert!(state.finish_execution(id, second, Ok(fake_execution())));
    }

    #[test]
    fn test_completion_from_before_reload_is_discarded() {
        let mut state = loaded_state();
        let id = EndpointId::new(3, 0);

        let ExecuteOutcome::Started { generation: old, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };

        state.install_catalog(Settings::fallback(), CatalogSource::Fallback);
        let ExecuteOutcome::Started { generation: new, .. } = state.begin_execution(id) else {
            panic!("expected execution to start");
        };
        assert_ne!(old, new);

        assert!(!state.finish_execution(id, old, Ok(fake_execution())));
        assert!(state.panel(id).unwrap().is_loading());
        assert!(state.finish_execution(id, new, Ok(fake_execution())));
    }

    #[test]
    fn test_unknown_endpoint() {
        let mut state = loaded_state();
        assert_eq!(
            state.begin_execution(EndpointId::new(42, 0)),
            ExecuteOutcome::UnknownEndpoint
        );
    }

    #[test]
    fn test_expire_toast() {
        let mut state = loaded_state();
        state.show_toast(ToastKind::Info, "hello");
        let created = state.toast.as_ref().unwrap().created;

        state.expire_toast(created + Duration::from_secs(1));
        assert!(state.toast.is_some());
        state.expire_toast(created + Duration::from_secs(3));
        assert!(state.toast.is_none());
    }
}
