//! Search/filter index over the rendered catalog
//!
//! One lower-cased record per endpoint. A query is a case-insensitive
//! substring match against name, description, path and category; matching is
//! recomputed in full for every query.

use crate::catalog::{EndpointId, Settings};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRecord {
    pub id: EndpointId,
    pub name: String,
    pub desc: String,
    pub path: String,
    pub category: String,
}

impl SearchRecord {
    fn matches(&self, term: &str) -> bool {
        self.name.contains(term)
            || self.desc.contains(term)
            || self.path.contains(term)
            || self.category.contains(term)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    category_count: usize,
}

impl SearchIndex {
    pub fn build(settings: &Settings) -> Self {
        let mut records = Vec::with_capacity(settings.total_endpoints());

        for (ci, category) in settings.categories.iter().enumerate() {
            let category_name = category.name.to_lowercase();
            for (ei, endpoint) in category.items.iter().enumerate() {
                records.push(SearchRecord {
                    id: EndpointId::new(ci, ei),
                    name: endpoint.name.to_lowercase(),
                    desc: endpoint.desc.to_lowercase(),
                    path: endpoint.display_path().to_lowercase(),
                    category: category_name.clone(),
                });
            }
        }

        Self {
            records,
            category_count: settings.categories.len(),
        }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn filter(&self, query: &str) -> SearchMatches {
        let term = query.trim().to_lowercase();

        if term.is_empty() {
            return SearchMatches {
                term,
                endpoints: self.records.iter().map(|r| r.id).collect(),
                categories: (0..self.category_count).collect(),
            };
        }

        let endpoints: BTreeSet<EndpointId> = self
            .records
            .iter()
            .filter(|r| r.matches(&term))
            .map(|r| r.id)
            .collect();
        let categories = endpoints.iter().map(|id| id.category).collect();

        SearchMatches {
            term,
            endpoints,
            categories,
        }
    }
}

/// Visible set for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchMatches {
    /// Normalized (trimmed, lower-cased) term
    pub term: String,
    endpoints: BTreeSet<EndpointId>,
    categories: BTreeSet<usize>,
}

impl SearchMatches {
    pub fn is_filtering(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn endpoint_visible(&self, id: EndpointId) -> bool {
        self.endpoints.contains(&id)
    }

    pub fn category_visible(&self, category: usize) -> bool {
        self.categories.contains(&category)
    }

    pub fn visible_endpoints(&self) -> impl Iterator<Item = EndpointId> + '_ {
        self.endpoints.iter().copied()
    }

    pub fn match_count(&self) -> usize {
        self.endpoints.len()
    }

    /// The "no results" indicator
    pub fn no_results(&self) -> bool {
        self.is_filtering() && self.endpoints.is_empty()
    }
}
