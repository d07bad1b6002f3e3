//! Combobox state and transitions.

use std::fmt;
use std::rc::Rc;

use crate::addressing::{self, OptionId};
use crate::option::{ComboOption, Selection, display_text};
use crate::surface::{DisplaySurface, FrameScheduler};

use super::config::ComboboxConfig;
use super::derive::{self, AriaAttributes, UpTarget};
use super::scroll::{self, Liveness};

pub(crate) type ValidateFn = Box<dyn Fn(&str, &str) -> bool>;
pub(crate) type InputFn = Box<dyn FnMut(&str) -> Option<String>>;
pub(crate) type SelectFn<T> = Box<dyn FnMut(Selection<T>)>;

/// Engine-local interaction state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Raw text typed by the user.
    pub user_input: String,
    /// Whether `user_input` passed the validator.
    pub is_user_input_valid: bool,
    /// Whether the option list is shown.
    pub popup_visible: bool,
    /// Option reachable by keyboard, independent of the selection.
    pub active_descendant: Option<OptionId>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            user_input: String::new(),
            is_user_input_valid: true,
            popup_visible: false,
            active_descendant: None,
        }
    }
}

/// One option row as seen by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView<'a, T> {
    pub index: usize,
    pub id: OptionId,
    pub option: &'a T,
    pub label: String,
    pub is_selected: bool,
    pub is_active: bool,
}

/// Searchable single-value select: a text input plus a list of options.
///
/// The committed selection belongs to the caller. The combobox asks for
/// changes through `on_select` and the caller hands the new value back with
/// [`set_selected`](Self::set_selected). Options arrive pre-filtered through
/// [`set_options`](Self::set_options).
///
/// # Example
///
/// ```ignore
/// let mut combo = Combobox::builder(ComboboxConfig::new("color"))
///     .options(vec!["red", "orange", "yellow"])
///     .on_select(|selection| println!("{:?}", selection))
///     .build();
///
/// combo.dispatch(ComboEvent::ClickInput);
/// combo.dispatch(ComboEvent::Key(Key::Down));
/// combo.dispatch(ComboEvent::Key(Key::Enter));
/// ```
pub struct Combobox<T: ComboOption> {
    pub(crate) config: ComboboxConfig,
    pub(crate) options: Vec<T>,
    pub(crate) selected: Option<T>,
    pub(crate) closest_option: Option<T>,
    pub(crate) state: EngineState,
    pub(crate) validate: ValidateFn,
    pub(crate) on_input: Option<InputFn>,
    pub(crate) on_select: SelectFn<T>,
    pub(crate) surface: Rc<dyn DisplaySurface>,
    pub(crate) scheduler: Rc<dyn FrameScheduler>,
    pub(crate) liveness: Liveness,
    pub(crate) dirty: bool,
}

impl<T: ComboOption> Combobox<T> {
    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Replace the option list.
    ///
    /// Drops the active option if it is not part of the new list.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        if let Some(active) = &self.state.active_descendant {
            if !self.option_ids().contains(active) {
                log::debug!("Combobox::set_options id={} dropping stale active {}", self.config.id, active);
                self.state.active_descendant = None;
            }
        }
        self.dirty = true;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Hand back the committed selection.
    pub fn set_selected(&mut self, selected: Option<T>) {
        self.selected = selected;
        self.dirty = true;
    }

    pub fn closest_option(&self) -> Option<&T> {
        self.closest_option.as_ref()
    }

    /// Set the fallback anchor used when the selection is not listed.
    pub fn set_closest_option(&mut self, closest: Option<T>) {
        self.closest_option = closest;
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn user_input(&self) -> &str {
        &self.state.user_input
    }

    pub fn is_user_input_valid(&self) -> bool {
        self.state.is_user_input_valid
    }

    pub fn popup_visible(&self) -> bool {
        self.state.popup_visible
    }

    pub fn active_descendant(&self) -> Option<&OptionId> {
        self.state.active_descendant.as_ref()
    }

    /// Display text of the committed selection.
    pub fn selected_value(&self) -> String {
        derive::selected_value(self.selected.as_ref(), self.config.search_field.as_deref())
    }

    /// Text to show in the input.
    pub fn value(&self) -> String {
        let selected_value = self.selected_value();
        derive::effective_value(
            &self.state.user_input,
            self.selected.is_some(),
            self.state.is_user_input_valid,
            &selected_value,
        )
        .to_string()
    }

    pub fn option_ids(&self) -> Vec<OptionId> {
        derive::option_ids(&self.config.id, &self.options)
    }

    pub fn selected_id(&self) -> Option<OptionId> {
        derive::anchor_id(&self.config.id, self.selected.as_ref())
    }

    pub fn closest_option_id(&self) -> Option<OptionId> {
        derive::anchor_id(&self.config.id, self.closest_option.as_ref())
    }

    pub fn input_id(&self) -> String {
        addressing::input_id(&self.config.id)
    }

    pub fn listbox_id(&self) -> String {
        addressing::listbox_id(&self.config.id)
    }

    /// Option rows with their selected/active flags.
    pub fn option_views(&self) -> Vec<OptionView<'_, T>> {
        let search_field = self.config.search_field.as_deref();
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let id = addressing::option_id(&self.config.id, option);
                OptionView {
                    index,
                    is_active: self.state.active_descendant.as_ref() == Some(&id),
                    is_selected: self.selected.as_ref() == Some(option),
                    label: display_text(option, search_field),
                    option,
                    id,
                }
            })
            .collect()
    }

    /// Text to show instead of the list when it is open but empty.
    pub fn empty_message(&self) -> Option<&str> {
        (self.state.popup_visible && self.options.is_empty())
            .then_some(self.config.empty_option.as_str())
    }

    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes {
            role: "combobox",
            autocomplete: "list",
            expanded: self.state.popup_visible,
            controls: self.listbox_id(),
            active_descendant: self
                .state
                .active_descendant
                .as_ref()
                .map(|id| id.to_string()),
            label: self.config.aria_label.clone(),
            labelledby: self.config.aria_labelledby.clone(),
            invalid: !self.state.is_user_input_valid,
            disabled: self.config.is_disabled,
            readonly: self.config.is_readonly,
            placeholder: (!self.config.placeholder.is_empty())
                .then(|| self.config.placeholder.clone()),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// The text input gained focus.
    pub fn focus_in(&mut self) {
        self.open();
        log::debug!("Combobox::focus_in id={} open={}", self.config.id, self.state.popup_visible);
    }

    /// The text input was clicked. Same as gaining focus.
    pub fn click_input(&mut self) {
        self.open();
        log::debug!("Combobox::click_input id={} open={}", self.config.id, self.state.popup_visible);
    }

    /// The input text changed to `text`.
    pub fn input(&mut self, text: impl Into<String>) {
        self.state.user_input = text.into();
        self.show_popup();

        if let Some(on_input) = self.on_input.as_mut() {
            if let Some(normalized) = on_input(&self.state.user_input) {
                self.state.user_input = normalized;
            }
        }

        let selected_value = self.selected_value();
        let valid = (self.validate)(&self.state.user_input, &selected_value);
        self.state.is_user_input_valid = valid;
        self.dirty = true;

        log::debug!(
            "Combobox::input id={} text={:?} valid={}",
            self.config.id,
            self.state.user_input,
            valid
        );

        if valid {
            (self.on_select)(Selection::Typed(self.state.user_input.clone()));
        }
    }

    pub fn arrow_down(&mut self) {
        if !self.state.popup_visible {
            self.open();
            log::debug!("Combobox::arrow_down id={} opened", self.config.id);
            return;
        }

        let ids = self.option_ids();
        let target = derive::arrow_down_target(
            &ids,
            self.state.active_descendant.as_ref(),
            self.selected_id().as_ref(),
            self.closest_option_id().as_ref(),
        );
        log::debug!("Combobox::arrow_down id={} active={:?}", self.config.id, target);
        self.set_active(target);
    }

    pub fn arrow_up(&mut self) {
        if !self.state.popup_visible {
            return;
        }

        let ids = self.option_ids();
        let target = derive::arrow_up_target(
            &ids,
            self.state.active_descendant.as_ref(),
            self.closest_option_id().as_ref(),
        );
        log::debug!("Combobox::arrow_up id={} target={:?}", self.config.id, target);
        match target {
            UpTarget::Input => {
                self.set_active(None);
                self.focus_input();
            }
            UpTarget::Option(id) => self.set_active(Some(id)),
            UpTarget::Stay => {}
        }
    }

    /// Commit the active option, or the first option when none is active.
    pub fn enter(&mut self) {
        if !self.state.popup_visible {
            return;
        }

        let ids = self.option_ids();
        let target = self
            .state
            .active_descendant
            .clone()
            .or_else(|| ids.first().cloned());
        let index = target.and_then(|target| ids.iter().position(|id| *id == target));

        match index {
            Some(index) => {
                self.select_index(index);
            }
            None => log::trace!("Combobox::enter id={} no option to commit", self.config.id),
        }
    }

    /// Blank the input and close the list.
    pub fn escape(&mut self) {
        self.state.user_input.clear();
        self.set_active(None);
        self.focus_input();
        self.hide_popup();
        log::debug!("Combobox::escape id={}", self.config.id);
    }

    /// Commit the option at `index`. Returns false when out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.options.get(index).cloned() {
            Some(option) => {
                self.select(option);
                true
            }
            None => false,
        }
    }

    /// Commit `option` and close the list.
    pub fn select(&mut self, option: T) {
        self.state.is_user_input_valid = true;
        self.state.user_input = display_text(&option, self.config.search_field.as_deref());
        self.set_active(None);
        self.focus_input();
        self.hide_popup();

        log::debug!(
            "Combobox::select id={} value={:?}",
            self.config.id,
            self.state.user_input
        );

        (self.on_select)(Selection::Option(option));
    }

    /// Focus moved to `new_target` (None when it left the display entirely).
    ///
    /// Focus moving between parts of this combobox is not a blur.
    pub fn focus_out(&mut self, new_target: Option<&str>) {
        if let Some(target) = new_target {
            if self.surface.contains(&self.config.id, target) {
                log::trace!("Combobox::focus_out id={} internal move to {}", self.config.id, target);
                return;
            }
        }

        if !self.state.is_user_input_valid {
            self.state.user_input = self.selected_value();
            self.state.is_user_input_valid = true;
        }
        self.hide_popup();

        log::debug!(
            "Combobox::focus_out id={} value={:?}",
            self.config.id,
            self.state.user_input
        );
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Tear the combobox down. Pending effects become no-ops.
    pub fn unmount(&self) {
        self.liveness.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.liveness.is_mounted()
    }

    /// Check if a transition changed observable state since the last redraw.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after redrawing.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn open(&mut self) {
        if self.show_popup() {
            self.scroll_to_selection();
        }
    }

    /// Returns true if the list was closed before.
    fn show_popup(&mut self) -> bool {
        if self.state.popup_visible {
            return false;
        }
        self.state.popup_visible = true;
        self.liveness.set_popup_open(true);
        self.dirty = true;
        true
    }

    fn hide_popup(&mut self) {
        self.state.popup_visible = false;
        self.state.active_descendant = None;
        self.liveness.set_popup_open(false);
        self.dirty = true;
    }

    /// Update the active option and move focus to it when it is rendered.
    fn set_active(&mut self, id: Option<OptionId>) {
        if let Some(id) = &id {
            if self.surface.resolve(id.as_str()) {
                self.surface.focus(id.as_str());
            } else {
                log::trace!("Combobox::set_active id={} {} not rendered", self.config.id, id);
            }
        }
        if self.state.active_descendant != id {
            self.state.active_descendant = id;
            self.dirty = true;
        }
    }

    fn focus_input(&self) {
        let input = self.input_id();
        if self.surface.resolve(&input) {
            self.surface.focus(&input);
        }
    }

    fn scroll_to_selection(&self) {
        if !self.config.scroll_to_selection {
            return;
        }
        let ids = self.option_ids();
        let target = derive::scroll_target(
            &ids,
            self.selected_id().as_ref(),
            self.closest_option_id().as_ref(),
        );
        if let Some(target) = target {
            scroll::schedule_scroll(
                self.scheduler.as_ref(),
                Rc::clone(&self.surface),
                self.liveness.clone(),
                target,
            );
        }
    }
}

impl<T: ComboOption> Drop for Combobox<T> {
    fn drop(&mut self) {
        self.liveness.unmount();
    }
}

impl<T: ComboOption + fmt::Debug> fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("closest_option", &self.closest_option)
            .field("state", &self.state)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
