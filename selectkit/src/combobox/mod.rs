mod config;
mod derive;
mod events;
mod scroll;
mod state;

use std::rc::Rc;

use crate::option::{ComboOption, Selection};
use crate::surface::{DisplaySurface, FrameScheduler, NullScheduler, NullSurface};

pub use config::ComboboxConfig;
pub use derive::{
    AriaAttributes, UpTarget, anchor_id, arrow_down_target, arrow_up_target, effective_value,
    option_ids, scroll_target, selected_value,
};
pub use events::{ComboEvent, EventResult, Key};
pub use state::{Combobox, EngineState, OptionView};

use scroll::Liveness;
use state::{InputFn, SelectFn, ValidateFn};

/// Typestate marker: builder still needs an `on_select` callback.
pub struct NeedsOnSelect;

/// Typestate marker: builder has an `on_select` callback.
pub struct HasOnSelect<T>(SelectFn<T>);

/// Builder for a [`Combobox`].
///
/// Uses typestate to enforce `on_select()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let combo = Combobox::builder(ComboboxConfig::new("user").search_field("name"))
///     .options(users)
///     .validate(|text, _selected| names.contains(text))
///     .on_input(|text| Some(text.to_lowercase()))
///     .on_select(move |selection| tx.borrow_mut().push(selection))
///     .surface(surface)
///     .scheduler(queue)
///     .build();
/// ```
pub struct ComboboxBuilder<T, S = NeedsOnSelect> {
    select_marker: S,
    config: ComboboxConfig,
    options: Vec<T>,
    selected: Option<T>,
    closest_option: Option<T>,
    validate: Option<ValidateFn>,
    on_input: Option<InputFn>,
    surface: Option<Rc<dyn DisplaySurface>>,
    scheduler: Option<Rc<dyn FrameScheduler>>,
}

impl<T: ComboOption> Combobox<T> {
    /// Start building a combobox.
    pub fn builder(config: ComboboxConfig) -> ComboboxBuilder<T, NeedsOnSelect> {
        ComboboxBuilder {
            select_marker: NeedsOnSelect,
            config,
            options: Vec::new(),
            selected: None,
            closest_option: None,
            validate: None,
            on_input: None,
            surface: None,
            scheduler: None,
        }
    }
}

impl<T: ComboOption> ComboboxBuilder<T, NeedsOnSelect> {
    /// Set the commit callback. Required before calling `build()`.
    ///
    /// The caller is expected to store the selection and hand it back through
    /// [`Combobox::set_selected`].
    pub fn on_select(
        self,
        f: impl FnMut(Selection<T>) + 'static,
    ) -> ComboboxBuilder<T, HasOnSelect<T>> {
        ComboboxBuilder {
            select_marker: HasOnSelect(Box::new(f)),
            config: self.config,
            options: self.options,
            selected: self.selected,
            closest_option: self.closest_option,
            validate: self.validate,
            on_input: self.on_input,
            surface: self.surface,
            scheduler: self.scheduler,
        }
    }
}

impl<T: ComboOption, S> ComboboxBuilder<T, S> {
    pub fn options(mut self, options: impl IntoIterator<Item = T>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn selected(mut self, selected: Option<T>) -> Self {
        self.selected = selected;
        self
    }

    pub fn closest_option(mut self, closest: Option<T>) -> Self {
        self.closest_option = closest;
        self
    }

    /// Validator called with the typed text and the selection's display text.
    /// Defaults to accepting everything.
    pub fn validate(mut self, f: impl Fn(&str, &str) -> bool + 'static) -> Self {
        self.validate = Some(Box::new(f));
        self
    }

    /// Called on every input change. Returning `Some` replaces the typed text.
    pub fn on_input(mut self, f: impl FnMut(&str) -> Option<String> + 'static) -> Self {
        self.on_input = Some(Box::new(f));
        self
    }

    pub fn surface(mut self, surface: Rc<dyn DisplaySurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn scheduler(mut self, scheduler: Rc<dyn FrameScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }
}

impl<T: ComboOption> ComboboxBuilder<T, HasOnSelect<T>> {
    /// Build the combobox.
    pub fn build(self) -> Combobox<T> {
        log::debug!(
            "Combobox::build id={} options_count={} selected={}",
            self.config.id,
            self.options.len(),
            self.selected.is_some()
        );

        Combobox {
            config: self.config,
            options: self.options,
            selected: self.selected,
            closest_option: self.closest_option,
            state: EngineState::default(),
            validate: self.validate.unwrap_or_else(|| Box::new(|_: &str, _: &str| true)),
            on_input: self.on_input,
            on_select: self.select_marker.0,
            surface: self.surface.unwrap_or_else(|| Rc::new(NullSurface)),
            scheduler: self.scheduler.unwrap_or_else(|| Rc::new(NullScheduler)),
            liveness: Liveness::new(),
            dirty: true,
        }
    }
}
