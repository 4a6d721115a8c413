//! Catalog filtering
//!
//! Pure, order-preserving functions over a creature collection. Each takes
//! anything that iterates borrowed records and returns a new list, so the
//! output of one filter can feed the next.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Creature;

/// Search criteria entered by the user. All present fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// True when no criterion would narrow the collection
    pub fn is_empty(&self) -> bool {
        self.search_term.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.type_name.as_deref().map_or(true, str::is_empty)
            && self.generation.map_or(true, |g| g == 0)
    }

    /// Human-readable summary, e.g. `"sala", Type: Feu, Generation 1`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if let Some(term) = self.search_term.as_deref().filter(|t| !t.trim().is_empty()) {
            parts.push(format!("\"{}\"", term.trim()));
        }
        if let Some(type_name) = self.type_name.as_deref().filter(|t| !t.is_empty()) {
            parts.push(format!("Type: {type_name}"));
        }
        if let Some(generation) = self.generation.filter(|g| *g != 0) {
            parts.push(format!("Generation {generation}"));
        }

        if parts.is_empty() {
            "No filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Free-text search on names and Pokédex number
///
/// The term is trimmed and lower-cased. An empty term returns the whole
/// collection.
pub fn search<'a, I>(term: &str, collection: I) -> Vec<&'a Creature>
where
    I: IntoIterator<Item = &'a Creature>,
{
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return collection.into_iter().collect();
    }

    collection
        .into_iter()
        .filter(|creature| matches_term(creature, &term))
        .collect()
}

fn matches_term(creature: &Creature, term: &str) -> bool {
    creature
        .names()
        .any(|name| name.to_lowercase().contains(term))
        || creature.id().to_string().contains(term)
}

/// Keep records carrying `type_name` (case-insensitive). An empty type
/// returns the whole collection.
pub fn filter_by_type<'a, I>(type_name: &str, collection: I) -> Vec<&'a Creature>
where
    I: IntoIterator<Item = &'a Creature>,
{
    if type_name.is_empty() {
        return collection.into_iter().collect();
    }

    collection
        .into_iter()
        .filter(|creature| creature.has_type(type_name))
        .collect()
}

/// Keep records of exactly this generation. `None` and `Some(0)` return the
/// whole collection.
pub fn filter_by_generation<'a, I>(generation: Option<u32>, collection: I) -> Vec<&'a Creature>
where
    I: IntoIterator<Item = &'a Creature>,
{
    match generation {
        Some(wanted) if wanted != 0 => collection
            .into_iter()
            .filter(|creature| creature.generation() == Some(wanted))
            .collect(),
        _ => collection.into_iter().collect(),
    }
}

/// Search, then type, then generation
pub fn apply_filters<'a, I>(criteria: &FilterCriteria, collection: I) -> Vec<&'a Creature>
where
    I: IntoIterator<Item = &'a Creature>,
{
    let result = search(criteria.search_term.as_deref().unwrap_or(""), collection);
    let result = filter_by_type(criteria.type_name.as_deref().unwrap_or(""), result);
    filter_by_generation(criteria.generation, result)
}

/// Every type tag in the collection, deduplicated and sorted
pub fn unique_types<'a, I>(collection: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Creature>,
{
    collection
        .into_iter()
        .flat_map(|creature| creature.type_names())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every generation in the collection, deduplicated and ascending
pub fn unique_generations<'a, I>(collection: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a Creature>,
{
    collection
        .into_iter()
        .filter_map(|creature| creature.generation())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
