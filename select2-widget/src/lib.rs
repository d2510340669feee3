//! Server-side select2 widget rendering and autocomplete matching
//!
//! Two independent pieces. The [`element`] module turns a declarative widget
//! spec into final HTML attributes and a serialized client configuration.
//! The [`matcher`] module answers paginated autocomplete queries through a
//! pluggable [`selection`] handler. Transport, templating, storage and asset
//! loading stay outside this crate.

pub mod element;
pub mod matcher;
pub mod selection;

pub use element::{
    RenderEnvironment, RenderedWidget, SelectOption, TextDirection, WidgetConfig, WidgetSpec,
};
pub use matcher::{AutocompleteMatcher, Match, MatchQuery};
pub use selection::{
    EntityId, InMemorySelectionManager, ReferenceableEntity, SelectionConfig, SelectionError,
    SelectionHandler, SelectionManager,
};
