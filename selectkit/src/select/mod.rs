//! Listbox and native select: controlled single-value selects without
//! free-text input.
//!
//! These project an option list and a selection into select semantics and
//! report user changes back through `on_change`.

mod config;
mod state;

pub use config::{SelectConfig, SelectKind};
pub use state::{SelectAria, SelectEntry, SelectModel};
