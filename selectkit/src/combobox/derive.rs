//! Values derived from combobox state. Recomputed on every read.

use crate::addressing::{OptionId, option_id};
use crate::option::{ComboOption, display_text};

/// Display text of the committed selection, or empty when nothing is selected.
pub fn selected_value<T: ComboOption>(selected: Option<&T>, search_field: Option<&str>) -> String {
    selected
        .map(|option| display_text(option, search_field))
        .unwrap_or_default()
}

/// Text to show in the input.
///
/// Typed text wins while nothing is selected or the text is invalid; once a
/// valid selection exists the input tracks the selection.
pub fn effective_value<'a>(
    user_input: &'a str,
    has_selection: bool,
    is_user_input_valid: bool,
    selected_value: &'a str,
) -> &'a str {
    if !has_selection || !is_user_input_valid {
        user_input
    } else {
        selected_value
    }
}

/// Ids of all options, in order.
pub fn option_ids<T: ComboOption>(container: &str, options: &[T]) -> Vec<OptionId> {
    options
        .iter()
        .map(|option| option_id(container, option))
        .collect()
}

/// Id of an anchor option (selection or closest-option hint).
pub fn anchor_id<T: ComboOption>(container: &str, anchor: Option<&T>) -> Option<OptionId> {
    anchor.map(|option| option_id(container, option))
}

fn listed(ids: &[OptionId], id: Option<&OptionId>) -> Option<OptionId> {
    id.filter(|id| ids.contains(id)).cloned()
}

/// Option to scroll to when the list opens: the selection when it is listed,
/// else the closest option when it is listed.
pub fn scroll_target(
    ids: &[OptionId],
    selected_id: Option<&OptionId>,
    closest_id: Option<&OptionId>,
) -> Option<OptionId> {
    listed(ids, selected_id).or_else(|| listed(ids, closest_id))
}

/// Active option after an arrow-down press on an open list.
///
/// Advances from the active option and clamps at the last one. With nothing
/// active it starts at the selection, then the closest option, then the
/// first option.
pub fn arrow_down_target(
    ids: &[OptionId],
    active: Option<&OptionId>,
    selected_id: Option<&OptionId>,
    closest_id: Option<&OptionId>,
) -> Option<OptionId> {
    match active {
        Some(active) => match ids.iter().position(|id| id == active) {
            Some(i) if i + 1 < ids.len() => Some(ids[i + 1].clone()),
            Some(_) => Some(active.clone()),
            None => ids.first().cloned(),
        },
        None if selected_id.is_some() => listed(ids, selected_id)
            .or_else(|| listed(ids, closest_id))
            .or_else(|| ids.first().cloned()),
        None => ids.first().cloned(),
    }
}

/// Outcome of an arrow-up press on an open list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpTarget {
    /// Leave the list and return focus to the input.
    Input,
    /// Make this option active.
    Option(OptionId),
    /// Nothing to do.
    Stay,
}

/// Active option after an arrow-up press on an open list.
pub fn arrow_up_target(
    ids: &[OptionId],
    active: Option<&OptionId>,
    closest_id: Option<&OptionId>,
) -> UpTarget {
    let index = active.and_then(|active| ids.iter().position(|id| id == active));
    match index {
        Some(0) => UpTarget::Input,
        Some(i) => UpTarget::Option(ids[i - 1].clone()),
        None => listed(ids, closest_id).map_or(UpTarget::Stay, UpTarget::Option),
    }
}

/// ARIA attributes of the combobox input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaAttributes {
    pub role: &'static str,
    pub autocomplete: &'static str,
    pub expanded: bool,
    /// Id of the listbox the input controls.
    pub controls: String,
    pub active_descendant: Option<String>,
    pub label: Option<String>,
    pub labelledby: Option<String>,
    pub invalid: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub placeholder: Option<String>,
}
