//! Combobox configuration.

use serde::Deserialize;

use crate::error::ConfigError;

fn default_empty_option() -> String {
    "no options".to_string()
}

/// Static configuration of a combobox instance.
///
/// Everything here is plain data and can be loaded from JSON; callbacks and
/// host capabilities are supplied through [`ComboboxBuilder`](super::ComboboxBuilder).
///
/// # Example
///
/// ```ignore
/// let config = ComboboxConfig::new("user")
///     .search_field("name")
///     .scroll_to_selection(true)
///     .placeholder("Search users...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComboboxConfig {
    /// Container id. Option and part ids are derived from it.
    pub id: String,
    /// Field holding the display text of record options.
    pub search_field: Option<String>,
    /// Scroll the selected (or closest) option into view when the list opens.
    pub scroll_to_selection: bool,
    /// Text shown in place of the list when there are no options.
    pub empty_option: String,
    /// Placeholder of the text input.
    pub placeholder: String,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
    /// Ignore every event.
    pub is_disabled: bool,
    /// Ignore typing; keyboard navigation still works.
    pub is_readonly: bool,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            id: "combobox".to_string(),
            search_field: None,
            scroll_to_selection: false,
            empty_option: default_empty_option(),
            placeholder: String::new(),
            aria_label: None,
            aria_labelledby: None,
            is_disabled: false,
            is_readonly: false,
        }
    }
}

impl ComboboxConfig {
    /// Create a config for the container `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.id.trim().is_empty() {
            return Err(ConfigError::EmptyId);
        }
        Ok(config)
    }

    pub fn search_field(mut self, field: impl Into<String>) -> Self {
        self.search_field = Some(field.into());
        self
    }

    pub fn scroll_to_selection(mut self, enabled: bool) -> Self {
        self.scroll_to_selection = enabled;
        self
    }

    pub fn empty_option(mut self, text: impl Into<String>) -> Self {
        self.empty_option = text.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.aria_labelledby = Some(id.into());
        self
    }

    /// Mark the combobox as disabled.
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }

    /// Mark the combobox as read-only.
    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config =
            ComboboxConfig::from_json(r#"{ "id": "user", "searchField": "name" }"#).unwrap();
        assert_eq!(config.id, "user");
        assert_eq!(config.search_field.as_deref(), Some("name"));
        assert_eq!(config.empty_option, "no options");
        assert!(!config.scroll_to_selection);
    }

    #[test]
    fn test_from_json_rejects_empty_id() {
        let err = ComboboxConfig::from_json(r#"{ "id": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyId));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = ComboboxConfig::from_json("{ id: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
