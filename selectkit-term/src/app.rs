//! The picker: one combobox over a fuzzy-filtered option list.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use selectkit::{
    ComboEvent, Combobox, ComboboxConfig, FrameQueue, Selection, display_text,
};
use serde_json::Value;

use crate::filter::rank;
use crate::render::{Frame, build_frame};
use crate::surface::TermSurface;
use crate::terminal::{Terminal, map_key};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Focus left the widget; print the selection.
    Finish,
    /// Ctrl+C.
    Abort,
}

/// Picker settings that live outside the combobox config.
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Typed text must equal one of the option labels.
    pub strict: bool,
    /// Initial selection, matched against option labels.
    pub selected: Option<String>,
}

pub struct Picker {
    combo: Combobox<Value>,
    all_options: Vec<Value>,
    labels: Vec<String>,
    query: String,
    surface: Rc<TermSurface>,
    queue: FrameQueue,
    commit: Rc<RefCell<Option<Selection<Value>>>>,
}

impl Picker {
    pub fn new(
        config: ComboboxConfig,
        options: Vec<Value>,
        picker: PickerOptions,
        surface: Rc<TermSurface>,
    ) -> Self {
        let search_field = config.search_field.clone();
        let labels: Vec<String> = options
            .iter()
            .map(|option| display_text(option, search_field.as_deref()))
            .collect();

        let queue = FrameQueue::new();
        let commit = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&commit);

        let selected = picker
            .selected
            .map(|text| lookup(&options, &labels, text));

        let mut builder = Combobox::builder(config)
            .options(options.clone())
            .selected(selected)
            .surface(surface.clone())
            .scheduler(Rc::new(queue.clone()));
        if picker.strict {
            let allowed = labels.clone();
            builder = builder.validate(move |text, _| allowed.iter().any(|label| label == text));
        }
        let combo = builder
            .on_select(move |selection| *sink.borrow_mut() = Some(selection))
            .build();

        log::info!("Picker::new options={} strict={}", options.len(), picker.strict);

        Self {
            combo,
            all_options: options,
            labels,
            query: String::new(),
            surface,
            queue,
            commit,
        }
    }

    pub fn combo(&self) -> &Combobox<Value> {
        &self.combo
    }

    /// Label of the committed selection.
    pub fn selection_text(&self) -> Option<String> {
        let search_field = self.combo.config().search_field.as_deref();
        self.combo
            .selected()
            .map(|option| display_text(option, search_field))
    }

    /// The widget gains focus when the picker starts.
    pub fn start(&mut self) {
        self.send(ComboEvent::FocusIn);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Abort;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.send(ComboEvent::FocusOut { new_target: None });
                return Flow::Finish;
            }
            // edits apply to the text on screen, which is the selection
            // while a valid selection governs the input
            KeyCode::Char(c) => {
                let mut text = self.combo.value();
                text.push(c);
                self.send(ComboEvent::Input(text));
            }
            KeyCode::Backspace => {
                let mut text = self.combo.value();
                text.pop();
                self.send(ComboEvent::Input(text));
            }
            code => self.send(ComboEvent::Key(map_key(code))),
        }
        Flow::Continue
    }

    /// Dispatch, apply the commit, and refresh the filtered list.
    fn send(&mut self, event: ComboEvent) {
        let typing = matches!(event, ComboEvent::Input(_));
        self.combo.dispatch(event);

        let commit = self.commit.borrow_mut().take();
        if let Some(selection) = commit {
            let selected = match selection {
                Selection::Option(option) => option,
                Selection::Typed(text) => lookup(&self.all_options, &self.labels, text),
            };
            self.combo.set_selected(Some(selected));
        }

        if typing {
            self.query = self.combo.user_input().to_string();
        } else if !self.combo.popup_visible() {
            self.query.clear();
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        let ranked = rank(&self.query, &self.labels);
        let filtered: Vec<Value> = ranked
            .iter()
            .map(|&index| self.all_options[index].clone())
            .collect();
        let closest = if self.query.is_empty() {
            None
        } else {
            filtered.first().cloned()
        };

        if filtered != self.combo.options() {
            log::debug!("Picker::refilter query={:?} matches={}", self.query, filtered.len());
            self.combo.set_options(filtered);
        }
        if closest.as_ref() != self.combo.closest_option() {
            self.combo.set_closest_option(closest);
        }
    }

    /// Build the next frame and record what it shows on the surface.
    pub fn frame(&self, width: u16) -> Frame {
        let rows = if self.combo.popup_visible() {
            self.combo
                .option_ids()
                .into_iter()
                .map(|id| id.into_string())
                .collect()
        } else {
            Vec::new()
        };
        let mut fixed = vec![self.combo.input_id()];
        if self.combo.popup_visible() {
            fixed.push(self.combo.listbox_id());
        }
        self.surface.mark_rendered(&fixed, rows);
        build_frame(&self.combo, &self.surface, width)
    }

    /// Draw, then run after-render work and redraw if it moved the window.
    pub fn draw(&mut self, terminal: &mut Terminal) -> std::io::Result<()> {
        let (width, height) = terminal.size()?;
        self.surface.set_height((height as usize).saturating_sub(1));

        terminal.draw(&self.frame(width))?;
        self.combo.clear_dirty();

        self.queue.run_pending();
        if self.surface.take_moved() {
            terminal.draw(&self.frame(width))?;
        }
        Ok(())
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> std::io::Result<Flow> {
        self.start();
        loop {
            self.draw(terminal)?;
            let key = terminal.read_key()?;
            match self.handle_key(key) {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
    }
}

/// The option whose label is `text`, or the text itself.
fn lookup(options: &[Value], labels: &[String], text: String) -> Value {
    labels
        .iter()
        .position(|label| *label == text)
        .map(|index| options[index].clone())
        .unwrap_or(Value::String(text))
}
