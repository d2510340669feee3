//! Autocomplete matching for entity reference widgets
//!
//! Turns a partial search string into a bounded, ordered page of label
//! matches via a pluggable selection handler. Stateless per call; every
//! invocation re-queries the handler.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::selection::{EntityId, SelectionConfig, SelectionError, SelectionManager};

/// Match operator used when the selection settings carry none
const DEFAULT_MATCH_OPERATOR: &str = "CONTAINS";

/// Page size used when the selection settings carry none
const DEFAULT_MATCH_SIZE: u64 = 10;

/// One autocomplete query as received from the transport layer
#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    /// Id of the target entity type
    pub target_type: String,
    /// Id of the selection handler to resolve
    pub handler_id: String,
    /// Settings passed through to the handler; `match_operator` and
    /// `match_size` are also read here
    pub settings: HashMap<String, Value>,
    /// Search string; None means absent, distinct from empty
    pub search: Option<String>,
    /// Zero-based result page
    pub page: u64,
}

/// One autocomplete match in the shape the client library consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: EntityId,
    pub text: String,
}

/// Resolves autocomplete queries through a selection manager
pub struct AutocompleteMatcher {
    manager: Box<dyn SelectionManager>,
}

impl AutocompleteMatcher {
    pub fn new(manager: Box<dyn SelectionManager>) -> Self {
        Self { manager }
    }

    /// Get matched labels for a search string
    ///
    /// The selection handler is resolved first, so an unresolvable handler
    /// fails the call even when no search string was supplied. Result order
    /// is the handler's own ranking; labels have their HTML character
    /// references decoded, tags pass through untouched.
    pub fn matches(&self, query: &MatchQuery) -> Result<Vec<Match>, SelectionError> {
        let config = SelectionConfig {
            target_type: query.target_type.clone(),
            handler_id: query.handler_id.clone(),
            settings: query.settings.clone(),
        };
        let handler = self.manager.instance(&config)?;

        let Some(search) = query.search.as_deref() else {
            return Ok(Vec::new());
        };

        let operator = match query.settings.get("match_operator").and_then(|v| v.as_str()) {
            Some(operator) if !operator.is_empty() => operator,
            _ => DEFAULT_MATCH_OPERATOR,
        };
        let size = match query.settings.get("match_size").and_then(|v| v.as_u64()) {
            Some(size) if size > 0 => size,
            _ => DEFAULT_MATCH_SIZE,
        };
        let offset = query.page * size;

        log::debug!(
            "autocomplete query: target_type={} operator={} limit={} offset={}",
            query.target_type,
            operator,
            size,
            offset
        );

        let entities =
            handler.referenceable_entities(search, operator, size as usize, offset as usize)?;

        Ok(entities
            .into_iter()
            .map(|entity| Match {
                id: entity.id,
                text: html_escape::decode_html_entities(&entity.raw_label).to_string(),
            })
            .collect())
    }
}
