//! Catalog model
//!
//! The catalog (`Settings`) is the single source of truth for categories and
//! endpoints. Everything else (parameters, panels, search records) is derived
//! from it and never written back.

mod fallback;
mod fetch;

pub use fetch::load_settings_background;

use serde::Deserialize;
use std::fmt;

/// Typed address of one endpoint: its category index and its index inside that category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId {
    pub category: usize,
    pub endpoint: usize,
}

impl EndpointId {
    pub fn new(category: usize, endpoint: usize) -> Self {
        Self { category, endpoint }
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.endpoint)
    }
}

/// Document served by `GET /settings`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_creator")]
    pub creator: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Contact link shown in the header
    #[serde(default)]
    pub links: Option<String>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,

    #[serde(default)]
    pub items: Vec<Endpoint>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Endpoint {
    pub name: String,

    /// Path template; its query string marks the user-fillable parameters
    pub path: String,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub desc: String,

    #[serde(default)]
    pub status: EndpointStatus,
}

impl Endpoint {
    /// Path without the query template
    pub fn display_path(&self) -> &str {
        self.path.split('?').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum EndpointStatus {
    #[default]
    Ready,
    Update,
    Error,
    Other(String),
}

impl From<String> for EndpointStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ready" => EndpointStatus::Ready,
            "update" => EndpointStatus::Update,
            "error" => EndpointStatus::Error,
            _ => EndpointStatus::Other(value),
        }
    }
}

impl EndpointStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EndpointStatus::Ready => "ready",
            EndpointStatus::Update => "update",
            EndpointStatus::Error => "error",
            EndpointStatus::Other(s) => s,
        }
    }
}

fn default_name() -> String {
    "API Console".to_string()
}

fn default_creator() -> String {
    "unknown".to_string()
}

fn default_description() -> String {
    "Interactive API documentation with real-time testing".to_string()
}

fn default_method() -> String {
    "GET".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: default_name(),
            creator: default_creator(),
            description: default_description(),
            links: None,
            categories: Vec::new(),
        }
    }
}

impl Settings {
    /// Resolve an endpoint by its typed id
    pub fn endpoint(&self, id: EndpointId) -> Option<&Endpoint> {
        self.categories
            .get(id.category)
            .and_then(|c| c.items.get(id.endpoint))
    }

    /// All endpoint ids in catalog order
    pub fn endpoint_ids(&self) -> impl Iterator<Item = EndpointId> + '_ {
        self.categories.iter().enumerate().flat_map(|(ci, c)| {
            (0..c.items.len()).map(move |ei| EndpointId::new(ci, ei))
        })
    }

    pub fn total_endpoints(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    /// Footer line: `© <creator> - <name>`
    pub fn credits(&self) -> String {
        format!("© {} - {}", self.creator, self.name)
    }
}

/// Icon shown next to a category name
pub fn category_icon(name: &str) -> &'static str {
    match name {
        "Downloader" => "📥",
        "Imagecreator" | "Image Creator" => "🖼",
        "Openai" => "🤖",
        "Random" => "🔀",
        "Search" => "🔍",
        "Stalker" => "👁",
        "Tools" => "🔧",
        "Orderkuota" => "💳",
        "AI Tools" => "🧠",
        _ => "📁",
    }
}
