// Selection handler seam for entity reference lookups
//
// Handlers answer "which entities can this field reference, matching this
// search string" against whatever backing store they wrap. The manager
// resolves a handler instance from a SelectionConfig and is the only way
// callers obtain one.

pub mod memory;

pub use memory::InMemorySelectionManager;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Entity identifier as stored by the backing store
///
/// Serializes untagged, so integer ids stay unquoted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Str(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId::Str(id)
    }
}

/// One referenceable entity as reported by a selection handler
///
/// Flat (bundle, id, label) tuple; the label is raw and may still carry
/// HTML character references.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceableEntity {
    pub bundle: String,
    pub id: EntityId,
    pub raw_label: String,
}

impl ReferenceableEntity {
    pub fn new(
        bundle: impl Into<String>,
        id: impl Into<EntityId>,
        raw_label: impl Into<String>,
    ) -> Self {
        Self {
            bundle: bundle.into(),
            id: id.into(),
            raw_label: raw_label.into(),
        }
    }
}

/// Configuration a handler instance is resolved from
///
/// `target_type` and `handler_id` are dedicated fields, so settings keys
/// can never shadow them.
#[derive(Debug, Clone, Default)]
pub struct SelectionConfig {
    pub target_type: String,
    pub handler_id: String,
    pub settings: HashMap<String, Value>,
}

/// Error resolving or querying a selection handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No handler could be resolved for the given id / target type
    UnresolvedHandler {
        handler_id: String,
        target_type: String,
    },
    /// The caller is not allowed to enumerate the referenced entities
    AccessDenied,
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::UnresolvedHandler {
                handler_id,
                target_type,
            } => {
                write!(
                    f,
                    "No selection handler '{}' for target type '{}'",
                    handler_id, target_type
                )
            }
            SelectionError::AccessDenied => {
                write!(f, "Access denied to the referenced entities")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Queries a backing store for referenceable entities
///
/// The call may block on store I/O; there is no timeout or retry here,
/// failures surface immediately to the caller.
pub trait SelectionHandler {
    /// Entities whose label matches `search` under `operator`, at most
    /// `limit` entries starting at `offset`. Order is the handler's own
    /// ranking.
    fn referenceable_entities(
        &self,
        search: &str,
        operator: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ReferenceableEntity>, SelectionError>;
}

/// Resolves handler instances from a selection configuration
pub trait SelectionManager {
    fn instance(
        &self,
        config: &SelectionConfig,
    ) -> Result<Box<dyn SelectionHandler>, SelectionError>;
}
