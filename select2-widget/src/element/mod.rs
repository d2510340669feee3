// Select2 element rendering
//
// Turns a declarative widget spec into the final HTML attribute set plus the
// serialized client configuration. Pure transformation with no dependency on
// the matcher; the two share a configuration vocabulary, not code.

pub mod config;
pub mod environment;
pub mod render;

pub use config::{CONFIG_KEYS, WidgetConfig};
pub use environment::{RenderEnvironment, TextDirection};
pub use render::{AUTOCOMPLETE_CLASS, RenderedWidget, SelectOption, WidgetSpec};
