//! Event handling for the Combobox.

use crate::option::ComboOption;

use super::Combobox;

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

/// Whether an event was handled.
///
/// `Consumed` events must not propagate further and their default action
/// must be suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Events delivered to a combobox by its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboEvent {
    /// The text input gained focus.
    FocusIn,
    /// Focus left an element of the combobox.
    FocusOut { new_target: Option<String> },
    /// The text input was clicked.
    ClickInput,
    /// The input text changed.
    Input(String),
    /// A key was pressed while the combobox had focus.
    Key(Key),
    /// The option row at this index was clicked.
    ClickOption(usize),
}

impl<T: ComboOption> Combobox<T> {
    /// Route an event to its transition.
    pub fn dispatch(&mut self, event: ComboEvent) -> EventResult {
        if self.config.is_disabled {
            return EventResult::Ignored;
        }

        match event {
            ComboEvent::FocusIn => {
                self.focus_in();
                EventResult::Consumed
            }
            ComboEvent::FocusOut { new_target } => {
                self.focus_out(new_target.as_deref());
                EventResult::Consumed
            }
            ComboEvent::ClickInput => {
                self.click_input();
                EventResult::Consumed
            }
            ComboEvent::Input(text) => {
                if self.config.is_readonly {
                    return EventResult::Ignored;
                }
                self.input(text);
                EventResult::Consumed
            }
            ComboEvent::Key(key) => self.on_key(key),
            ComboEvent::ClickOption(index) => {
                if self.select_index(index) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    /// Handle a key press. Only the navigation keys are consumed; everything
    /// else is left to the text input.
    pub fn on_key(&mut self, key: Key) -> EventResult {
        if self.config.is_disabled {
            return EventResult::Ignored;
        }

        match key {
            Key::Up => self.arrow_up(),
            Key::Down => self.arrow_down(),
            Key::Enter => self.enter(),
            Key::Escape => self.escape(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}
