#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use selectkit::{
    ComboEvent, ComboOption, Combobox, ComboboxConfig, DisplaySurface, FrameQueue, ScrollOptions,
    Selection,
};

pub const COLORS: [&str; 3] = ["red", "orange", "yellow"];

pub fn colors() -> Vec<String> {
    COLORS.iter().map(|c| c.to_string()).collect()
}

/// Display surface that records every side effect.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub rendered: RefCell<HashSet<String>>,
    pub focused: RefCell<Vec<String>>,
    pub scrolled: RefCell<Vec<(String, ScrollOptions)>>,
}

impl RecordingSurface {
    pub fn last_focus(&self) -> Option<String> {
        self.focused.borrow().last().cloned()
    }
}

impl DisplaySurface for RecordingSurface {
    fn resolve(&self, id: &str) -> bool {
        self.rendered.borrow().contains(id)
    }

    fn focus(&self, id: &str) {
        self.focused.borrow_mut().push(id.to_string());
    }

    fn scroll_into_view(&self, id: &str, options: ScrollOptions) {
        self.scrolled.borrow_mut().push((id.to_string(), options));
    }
}

/// A combobox wired the way a controlled host wires it: commits are applied
/// back to `selected`, and every event is followed by a render pass.
pub struct Harness<T: ComboOption> {
    pub combo: Combobox<T>,
    pub surface: Rc<RecordingSurface>,
    pub queue: FrameQueue,
    pub commits: Rc<RefCell<Vec<Selection<T>>>>,
    pub inputs: Rc<RefCell<Vec<String>>>,
}

impl<T: ComboOption + From<String> + 'static> Harness<T> {
    pub fn new(config: ComboboxConfig, options: Vec<T>, selected: Option<T>) -> Self {
        Self::with(config, options, selected, |builder| builder)
    }

    pub fn with(
        config: ComboboxConfig,
        options: Vec<T>,
        selected: Option<T>,
        customize: impl FnOnce(
            selectkit::ComboboxBuilder<T, selectkit::combobox::NeedsOnSelect>,
        ) -> selectkit::ComboboxBuilder<T, selectkit::combobox::NeedsOnSelect>,
    ) -> Self {
        let surface = Rc::new(RecordingSurface::default());
        let queue = FrameQueue::new();
        let commits = Rc::new(RefCell::new(Vec::new()));
        let inputs = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&commits);
        let input_log = Rc::clone(&inputs);
        let builder = Combobox::builder(config)
            .options(options)
            .selected(selected)
            .surface(surface.clone())
            .scheduler(Rc::new(queue.clone()));
        let builder = builder.on_input(move |text| {
            input_log.borrow_mut().push(text.to_string());
            None
        });
        let combo = customize(builder)
            .on_select(move |selection| sink.borrow_mut().push(selection))
            .build();

        let mut harness = Self {
            combo,
            surface,
            queue,
            commits,
            inputs,
        };
        harness.render();
        harness
    }

    /// Dispatch an event, apply any commit, then render.
    pub fn send(&mut self, event: ComboEvent) {
        let before = self.commits.borrow().len();
        self.combo.dispatch(event);
        let latest = self.commits.borrow()[before..].last().cloned();
        if let Some(selection) = latest {
            let selected = match selection {
                Selection::Option(option) => option,
                Selection::Typed(text) => T::from(text),
            };
            self.combo.set_selected(Some(selected));
        }
        self.render();
    }

    /// Mirror the combobox into the display tree and run after-render work.
    pub fn render(&mut self) {
        {
            let mut rendered = self.surface.rendered.borrow_mut();
            rendered.clear();
            rendered.insert(self.combo.input_id());
            if self.combo.popup_visible() {
                rendered.insert(self.combo.listbox_id());
                for id in self.combo.option_ids() {
                    rendered.insert(id.into_string());
                }
            }
        }
        self.combo.clear_dirty();
        self.queue.run_pending();
    }

    pub fn active(&self) -> Option<String> {
        self.combo.active_descendant().map(|id| id.to_string())
    }

    pub fn commit_count(&self) -> usize {
        self.commits.borrow().len()
    }
}
