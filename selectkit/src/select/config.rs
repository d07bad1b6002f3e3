use serde::Deserialize;

use crate::error::ConfigError;

/// Which select flavour a model backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectKind {
    /// Styled listbox. Numeric raw values are indices.
    #[default]
    Listbox,
    /// Native select. Raw values are matched against option values first.
    Native,
}

/// Configuration of a listbox or native select.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    pub kind: SelectKind,
    /// Field holding the option value of record options.
    pub value_key: String,
    /// Field holding the option label of record options.
    pub label_key: String,
    /// Field holding the disabled flag of record options.
    pub disabled_key: String,
    /// Placeholder entry shown while nothing is selected.
    pub placeholder: Option<String>,
    /// Offer a control that clears the selection.
    pub allow_clear: bool,
    pub required: bool,
    pub disabled: bool,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            kind: SelectKind::Listbox,
            value_key: "value".to_string(),
            label_key: "label".to_string(),
            disabled_key: "disabled".to_string(),
            placeholder: None,
            allow_clear: false,
            required: false,
            disabled: false,
            aria_label: None,
            aria_labelledby: None,
        }
    }
}

impl SelectConfig {
    pub fn new(kind: SelectKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn listbox() -> Self {
        Self::new(SelectKind::Listbox)
    }

    pub fn native() -> Self {
        Self::new(SelectKind::Native)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    pub fn disabled_key(mut self, key: impl Into<String>) -> Self {
        self.disabled_key = key.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn allow_clear(mut self) -> Self {
        self.allow_clear = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
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
}
