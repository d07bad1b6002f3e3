//! Deterministic element ids for combobox parts and options.

use std::fmt;

use crate::option::ComboOption;

/// Element id of a single option row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(String);

impl OptionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for OptionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OptionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Id of `option` inside the container `container`.
///
/// Uses the option's own `id` field when present, otherwise the dasherized
/// text of the option.
pub fn option_id<T: ComboOption>(container: &str, option: &T) -> OptionId {
    let key = option
        .id_field()
        .unwrap_or_else(|| dasherize(&option.text()));
    OptionId(format!("{}-{}", container, key))
}

/// Id of the text input of a combobox.
pub fn input_id(container: &str) -> String {
    format!("{}-input", container)
}

/// Id of the option list of a combobox.
pub fn listbox_id(container: &str) -> String {
    format!("{}-listbox", container)
}

/// Lower-case `text`, turning camel-case boundaries, whitespace and
/// underscores into single hyphens.
///
/// `"Tim Cook"` -> `"tim-cook"`, `"innerHTML"` -> `"inner-html"`.
pub fn dasherize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if c.is_whitespace() || c == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            if c.is_uppercase()
                && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
                && !out.ends_with('-')
            {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        }
        prev = Some(c);
    }

    out
}
