//! Per-endpoint panel state: parameter form, validation marks and the
//! `Idle -> Loading -> {Success | Failed}` execution lifecycle.

use crate::catalog::Endpoint;
use crate::error::RequestError;
use crate::request::{BuiltUrl, Execution, FieldValues, RequestTemplate};

#[derive(Debug, Clone, Default)]
pub enum PanelPhase {
    #[default]
    Idle,
    Loading,
    Success(Execution),
    Failed(RequestError),
}

#[derive(Debug, Clone)]
pub struct PanelState {
    pub template: RequestTemplate,
    pub values: FieldValues,
    /// Required fields flagged by the last URL build
    pub invalid_fields: Vec<String>,
    pub phase: PanelPhase,
    /// Bumped on every execute and clear; completions carry the value they started with
    pub generation: u64,
}

impl PanelState {
    pub fn new(endpoint: &Endpoint) -> Self {
        Self {
            template: RequestTemplate::parse(&endpoint.path),
            values: FieldValues::default(),
            invalid_fields: Vec::new(),
            phase: PanelPhase::Idle,
            generation: 0,
        }
    }

    /// URL for the current field values, without touching validation marks
    pub fn current_url(&self) -> BuiltUrl {
        self.template.build(&self.values)
    }

    /// Rebuild the URL and refresh validation marks from it
    pub fn revalidate(&mut self) -> BuiltUrl {
        let built = self.template.build(&self.values);
        self.invalid_fields = built.invalid_fields.clone();
        built
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, PanelPhase::Loading)
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid_fields.iter().any(|f| f == name)
    }

    /// Back to `Idle`; any in-flight completion becomes stale
    pub fn clear(&mut self) {
        self.values.clear();
        self.invalid_fields.clear();
        self.phase = PanelPhase::Idle;
        self.generation += 1;
    }
}
