//! Render preparation for the select2 element
//!
//! Pure transformation from a declarative widget spec to the final HTML
//! attribute set and client configuration. Runs as three phases: base select
//! rendering, autocomplete markers, user setting overwrites. No I/O, total
//! over any well-formed spec, byte-identical on repeated input.

use std::collections::HashMap;

use serde_json::Value;

use super::config::WidgetConfig;
use super::environment::RenderEnvironment;

/// Class marking a widget whose options load via the autocomplete endpoint
pub const AUTOCOMPLETE_CLASS: &str = "select2-autocomplete";

/// One static `<option>` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declarative description of one select2 field
#[derive(Debug, Clone, Default)]
pub struct WidgetSpec {
    /// Base field identifier
    pub name: String,
    /// Static option entries; autocomplete mode populates client side
    pub options: Vec<SelectOption>,
    pub multiple: bool,
    pub required: bool,
    /// Existing attributes to extend, not replace
    pub attributes: HashMap<String, String>,
    /// Whether free text input may create new entities ("tags" mode)
    pub autocreate: bool,
    /// Whether options are fetched per keystroke instead of prerendered
    pub autocomplete: bool,
    /// Maximum number of selectable values, 0 = unlimited
    pub cardinality: u32,
    pub placeholder: Option<String>,
    /// Sparse user overrides for the client configuration
    pub settings: HashMap<String, Value>,
}

/// Fully rendered widget: final attributes plus surviving static options
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWidget {
    pub attributes: HashMap<String, String>,
    pub options: Vec<SelectOption>,
}

impl RenderedWidget {
    /// Build the final attribute set and client configuration for a spec
    ///
    /// Caller-supplied attributes are extended, never replaced, except for
    /// the keys this algorithm owns: `name`, `multiple`, `class` (marker
    /// append) and `data-select2-config`.
    pub fn build(spec: &WidgetSpec, env: &RenderEnvironment) -> Self {
        let mut attributes = spec.attributes.clone();
        let mut options = spec.options.clone();
        let mut config = WidgetConfig::defaults(spec, env);

        // Base select rendering
        let name = if spec.multiple {
            format!("{}[]", spec.name)
        } else {
            spec.name.clone()
        };
        attributes.insert("name".to_string(), name);
        if spec.multiple {
            attributes.insert("multiple".to_string(), "multiple".to_string());
        }

        // Autocomplete mode: mark the element and drop static prerendering,
        // the endpoint supplies options instead
        if spec.autocomplete {
            options.clear();
            let class = match attributes.get("class") {
                Some(existing) => format!("{} {}", existing, AUTOCOMPLETE_CLASS),
                None => AUTOCOMPLETE_CLASS.to_string(),
            };
            attributes.insert("class".to_string(), class);
        }

        // User settings overwrite the computed defaults last
        config.apply_overrides(&spec.settings);
        attributes.insert("data-select2-config".to_string(), config.to_json());

        RenderedWidget { attributes, options }
    }
}
