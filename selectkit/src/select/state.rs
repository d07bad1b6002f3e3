//! Select model state.

use std::fmt;

use crate::error::SelectError;
use crate::option::ComboOption;

use super::config::{SelectConfig, SelectKind};

type ChangeFn<T> = Box<dyn FnMut(Option<T>)>;
type HookFn = Box<dyn FnMut()>;

/// One entry of a select as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEntry {
    pub index: usize,
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub is_selected: bool,
}

/// ARIA attributes of a listbox or native select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAria {
    /// Explicit role; native selects carry their own.
    pub role: Option<&'static str>,
    pub label: Option<String>,
    pub labelledby: Option<String>,
    pub required: bool,
    pub disabled: bool,
    /// Required but nothing selected.
    pub invalid: bool,
}

/// Controlled listbox or native select.
///
/// Holds the caller's options and selection, resolves raw values coming back
/// from the rendered select, and reports changes through `on_change`. The
/// caller owns the selection and hands it back with
/// [`set_selected`](Self::set_selected).
///
/// # Example
///
/// ```ignore
/// let mut priority = SelectModel::new(SelectConfig::native().placeholder("Pick one"), |p| {
///     println!("changed to {:?}", p);
/// });
/// priority.set_options(vec!["Low", "Medium", "High"]);
/// priority.change("High")?;
/// ```
pub struct SelectModel<T: ComboOption> {
    config: SelectConfig,
    options: Vec<T>,
    selected: Option<T>,
    has_focus: bool,
    on_change: ChangeFn<T>,
    on_focus: Option<HookFn>,
    on_blur: Option<HookFn>,
}

impl<T: ComboOption> SelectModel<T> {
    pub fn new(config: SelectConfig, on_change: impl FnMut(Option<T>) + 'static) -> Self {
        Self {
            config,
            options: Vec::new(),
            selected: None,
            has_focus: false,
            on_change: Box::new(on_change),
            on_focus: None,
            on_blur: None,
        }
    }

    /// Set a hook run when the select gains focus.
    pub fn with_on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// Set a hook run when the select loses focus.
    pub fn with_on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, selected: Option<T>) {
        self.selected = selected;
    }

    // -------------------------------------------------------------------------
    // Option fields
    // -------------------------------------------------------------------------

    /// Value of an option: its value field, or the option itself.
    pub fn value_of(&self, option: &T) -> String {
        option
            .field(&self.config.value_key)
            .unwrap_or_else(|| option.text())
    }

    /// Label of an option: its label field, or the option itself.
    pub fn label_of(&self, option: &T) -> String {
        option
            .field(&self.config.label_key)
            .unwrap_or_else(|| option.text())
    }

    pub fn is_disabled(&self, option: &T) -> bool {
        option
            .field(&self.config.disabled_key)
            .is_some_and(|flag| flag == "true")
    }

    fn is_selected(&self, option: &T) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| self.value_of(selected) == self.value_of(option))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn entries(&self) -> Vec<SelectEntry> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| SelectEntry {
                index,
                value: self.value_of(option),
                label: self.label_of(option),
                disabled: self.is_disabled(option),
                is_selected: self.is_selected(option),
            })
            .collect()
    }

    /// Whether the placeholder entry should be rendered.
    pub fn show_placeholder(&self) -> bool {
        self.config.placeholder.is_some() && self.selected.is_none()
    }

    /// Whether the clear control should be rendered.
    pub fn show_clear(&self) -> bool {
        self.config.allow_clear && self.selected.is_some()
    }

    pub fn aria(&self) -> SelectAria {
        SelectAria {
            role: match self.config.kind {
                SelectKind::Listbox => Some("listbox"),
                SelectKind::Native => None,
            },
            label: self.config.aria_label.clone(),
            labelledby: self.config.aria_labelledby.clone(),
            required: self.config.required,
            disabled: self.config.disabled,
            invalid: self.config.required && self.selected.is_none(),
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn focus(&mut self) {
        self.has_focus = true;
        if let Some(hook) = self.on_focus.as_mut() {
            hook();
        }
    }

    pub fn blur(&mut self) {
        self.has_focus = false;
        if let Some(hook) = self.on_blur.as_mut() {
            hook();
        }
    }

    // -------------------------------------------------------------------------
    // Changes
    // -------------------------------------------------------------------------

    /// Find the option a raw value from the rendered select refers to.
    pub fn resolve(&self, raw: &str) -> Option<&T> {
        let by_value = || self.options.iter().find(|o| self.value_of(o) == raw);
        let by_index = || {
            raw.trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| self.options.get(index))
        };

        match self.config.kind {
            SelectKind::Listbox => {
                if raw.trim().parse::<i64>().is_ok() {
                    by_index()
                } else {
                    by_value()
                }
            }
            SelectKind::Native => by_value().or_else(by_index),
        }
    }

    /// The user picked the entry with this raw value.
    pub fn change(&mut self, raw: &str) -> Result<(), SelectError> {
        if self.config.disabled {
            return Err(SelectError::Disabled);
        }

        let option = self
            .resolve(raw)
            .cloned()
            .ok_or_else(|| SelectError::UnknownOption(raw.to_string()))?;

        if self.is_disabled(&option) {
            return Err(SelectError::DisabledOption(self.label_of(&option)));
        }

        log::debug!("SelectModel::change kind={:?} raw={:?}", self.config.kind, raw);
        (self.on_change)(Some(option));
        Ok(())
    }

    /// The user cleared the selection.
    pub fn clear(&mut self) -> Result<(), SelectError> {
        if self.config.disabled {
            return Err(SelectError::Disabled);
        }
        if !self.config.allow_clear {
            return Err(SelectError::ClearNotAllowed);
        }

        log::debug!("SelectModel::clear kind={:?}", self.config.kind);
        (self.on_change)(None);
        Ok(())
    }
}

impl<T: ComboOption + fmt::Debug> fmt::Debug for SelectModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectModel")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("has_focus", &self.has_focus)
            .finish_non_exhaustive()
    }
}
