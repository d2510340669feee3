//! In-memory selection backend
//!
//! Keeps referenceable entities per target type in process memory. Serves as
//! the default backend for small option sets and for driving the matcher
//! without a real entity store.

use std::collections::HashMap;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::{
    ReferenceableEntity, SelectionConfig, SelectionError, SelectionHandler, SelectionManager,
};

/// Manager over per-target-type entity lists
#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionManager {
    entities: HashMap<String, Vec<ReferenceableEntity>>,
}

impl InMemorySelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the referenceable entities for a target type
    /// Replaces any previously registered list
    pub fn register(
        &mut self,
        target_type: impl Into<String>,
        entities: Vec<ReferenceableEntity>,
    ) {
        self.entities.insert(target_type.into(), entities);
    }
}

impl SelectionManager for InMemorySelectionManager {
    fn instance(
        &self,
        config: &SelectionConfig,
    ) -> Result<Box<dyn SelectionHandler>, SelectionError> {
        match self.entities.get(&config.target_type) {
            Some(entities) => Ok(Box::new(InMemorySelectionHandler {
                entities: entities.clone(),
            })),
            None => Err(SelectionError::UnresolvedHandler {
                handler_id: config.handler_id.clone(),
                target_type: config.target_type.clone(),
            }),
        }
    }
}

/// Handler over a snapshot of one target type's entities
#[derive(Debug, Clone)]
pub struct InMemorySelectionHandler {
    entities: Vec<ReferenceableEntity>,
}

impl SelectionHandler for InMemorySelectionHandler {
    fn referenceable_entities(
        &self,
        search: &str,
        operator: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ReferenceableEntity>, SelectionError> {
        let needle = search.to_lowercase();
        let matched: Vec<ReferenceableEntity> = match operator {
            "CONTAINS" => self
                .entities
                .iter()
                .filter(|e| e.raw_label.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
            "STARTS_WITH" => self
                .entities
                .iter()
                .filter(|e| e.raw_label.to_lowercase().starts_with(&needle))
                .cloned()
                .collect(),
            "FUZZY" => {
                let matcher = SkimMatcherV2::default();
                let mut scored: Vec<(ReferenceableEntity, i64)> = self
                    .entities
                    .iter()
                    .filter_map(|e| {
                        matcher
                            .fuzzy_match(&e.raw_label, search)
                            .map(|score| (e.clone(), score))
                    })
                    .collect();

                // Sort by score descending, stable so store order breaks ties
                scored.sort_by(|a, b| b.1.cmp(&a.1));
                scored.into_iter().map(|(e, _)| e).collect()
            }
            // Unknown operators match nothing rather than everything
            _ => Vec::new(),
        };

        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> InMemorySelectionManager {
        let mut manager = InMemorySelectionManager::new();
        manager.register(
            "node",
            vec![
                ReferenceableEntity::new("article", 1, "First article"),
                ReferenceableEntity::new("article", 2, "Second article"),
                ReferenceableEntity::new("page", 3, "About us"),
                ReferenceableEntity::new("page", 4, "Article index"),
            ],
        );
        manager
    }

    fn handler() -> Box<dyn SelectionHandler> {
        let config = SelectionConfig {
            target_type: "node".to_string(),
            handler_id: "default".to_string(),
            ..Default::default()
        };
        manager().instance(&config).unwrap()
    }

    #[test]
    fn test_unknown_target_type_is_unresolved() {
        let config = SelectionConfig {
            target_type: "user".to_string(),
            handler_id: "default".to_string(),
            ..Default::default()
        };
        // err() instead of unwrap_err(): the Ok side is a handler trait
        // object without a Debug impl
        let err = manager().instance(&config).err().unwrap();
        assert_eq!(
            err,
            SelectionError::UnresolvedHandler {
                handler_id: "default".to_string(),
                target_type: "user".to_string(),
            }
        );
    }

    #[test]
    fn test_contains_is_case_insensitive_substring() {
        let matches = handler()
            .referenceable_entities("ARTICLE", "CONTAINS", 10, 0)
            .unwrap();
        let labels: Vec<&str> = matches.iter().map(|e| e.raw_label.as_str()).collect();
        assert_eq!(labels, vec!["First article", "Second article", "Article index"]);
    }

    #[test]
    fn test_starts_with_is_prefix_only() {
        let matches = handler()
            .referenceable_entities("article", "STARTS_WITH", 10, 0)
            .unwrap();
        let labels: Vec<&str> = matches.iter().map(|e| e.raw_label.as_str()).collect();
        assert_eq!(labels, vec!["Article index"]);
    }

    #[test]
    fn test_fuzzy_orders_by_score() {
        let matches = handler()
            .referenceable_entities("artidx", "FUZZY", 10, 0)
            .unwrap();
        // "Article index" carries all the queried characters in order
        assert_eq!(matches[0].raw_label, "Article index");
    }

    #[test]
    fn test_empty_search_contains_matches_everything() {
        let matches = handler()
            .referenceable_entities("", "CONTAINS", 10, 0)
            .unwrap();
        assert_eq!(matches.len(), 4);
    }

    #[test]
    fn test_offset_and_limit_slice_the_matches() {
        let matches = handler()
            .referenceable_entities("", "CONTAINS", 2, 1)
            .unwrap();
        let labels: Vec<&str> = matches.iter().map(|e| e.raw_label.as_str()).collect();
        assert_eq!(labels, vec!["Second article", "About us"]);
    }

    #[test]
    fn test_unknown_operator_matches_nothing() {
        let matches = handler()
            .referenceable_entities("article", "ENDS_WITH", 10, 0)
            .unwrap();
        assert!(matches.is_empty());
    }
}
