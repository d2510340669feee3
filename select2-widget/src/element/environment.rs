use serde::Serialize;

/// Interface text direction of the current language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Ambient render services, passed in explicitly
///
/// Language, direction and theme come from whatever localization and theme
/// layer hosts the widget; rendering only reads them.
#[derive(Debug, Clone)]
pub struct RenderEnvironment {
    pub language: String,
    pub direction: TextDirection,
    pub theme: String,
}

impl RenderEnvironment {
    pub fn new(
        language: impl Into<String>,
        direction: TextDirection,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            direction,
            theme: theme.into(),
        }
    }
}

impl Default for RenderEnvironment {
    fn default() -> Self {
        Self::new("en", TextDirection::Ltr, "default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TextDirection::Ltr).unwrap(), "\"ltr\"");
        assert_eq!(serde_json::to_string(&TextDirection::Rtl).unwrap(), "\"rtl\"");
    }
}
