//! Client-side widget configuration record
//!
//! Fixed-shape record serialized into the `data-select2-config` attribute.
//! Every key is always present with a concrete value; values are kept as raw
//! JSON so user overrides pass through verbatim, whatever their type.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Value, json};

use super::environment::RenderEnvironment;
use super::render::WidgetSpec;

/// Recognized configuration keys, in serial order
pub const CONFIG_KEYS: [&str; 11] = [
    "multiple",
    "placeholder",
    "allowClear",
    "dir",
    "language",
    "tags",
    "theme",
    "maximumSelectionLength",
    "tokenSeparators",
    "selectOnClose",
    "width",
];

/// The full client configuration for one widget
///
/// Field order here is the serial order of the attribute payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetConfig {
    pub multiple: Value,
    pub placeholder: Value,
    #[serde(rename = "allowClear")]
    pub allow_clear: Value,
    pub dir: Value,
    pub language: Value,
    pub tags: Value,
    pub theme: Value,
    #[serde(rename = "maximumSelectionLength")]
    pub maximum_selection_length: Value,
    #[serde(rename = "tokenSeparators")]
    pub token_separators: Value,
    #[serde(rename = "selectOnClose")]
    pub select_on_close: Value,
    pub width: Value,
}

impl WidgetConfig {
    /// Compute the default record for a widget spec and environment
    ///
    /// `allowClear` defaults to true only for optional single-value fields;
    /// a cleared multi-value or required field would not be expressible.
    pub fn defaults(spec: &WidgetSpec, env: &RenderEnvironment) -> Self {
        Self {
            multiple: json!(spec.multiple),
            placeholder: json!(spec.placeholder.clone().unwrap_or_default()),
            allow_clear: json!(!spec.required && !spec.multiple),
            dir: json!(env.direction),
            language: json!(env.language),
            tags: json!(spec.autocreate),
            theme: json!(env.theme),
            maximum_selection_length: json!(spec.cardinality),
            token_separators: json!([]),
            select_on_close: json!(false),
            width: json!("100%"),
        }
    }

    /// Overwrite defaults with user-supplied settings
    ///
    /// Only recognized keys participate; anything else is ignored so a typo
    /// never ends up as a new config key. Each key writes its own slot, so
    /// map iteration order does not matter.
    pub fn apply_overrides(&mut self, settings: &HashMap<String, Value>) {
        for (key, value) in settings {
            if let Some(slot) = self.slot_mut(key) {
                *slot = value.clone();
            }
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Value> {
        match key {
            "multiple" => Some(&mut self.multiple),
            "placeholder" => Some(&mut self.placeholder),
            "allowClear" => Some(&mut self.allow_clear),
            "dir" => Some(&mut self.dir),
            "language" => Some(&mut self.language),
            "tags" => Some(&mut self.tags),
            "theme" => Some(&mut self.theme),
            "maximumSelectionLength" => Some(&mut self.maximum_selection_length),
            "tokenSeparators" => Some(&mut self.token_separators),
            "selectOnClose" => Some(&mut self.select_on_close),
            "width" => Some(&mut self.width),
            _ => None,
        }
    }

    /// Compact serial form for the data attribute
    pub fn to_json(&self) -> String {
        // A record of plain JSON values cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}
