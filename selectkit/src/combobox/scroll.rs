//! Deferred scroll-into-view of the selected option.
//!
//! Option rows only exist after the render that follows opening the list, so
//! the scroll runs from the host's after-render queue. By then the combobox may
//! be gone or closed again; the effect checks [`Liveness`] and skips itself.

use std::cell::Cell;
use std::rc::Rc;

use crate::addressing::OptionId;
use crate::surface::{DisplaySurface, FrameScheduler, ScrollOptions};

/// Flags shared between a combobox and its pending effects.
#[derive(Debug, Clone)]
pub(crate) struct Liveness {
    mounted: Rc<Cell<bool>>,
    popup_open: Rc<Cell<bool>>,
}

impl Liveness {
    pub(crate) fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
            popup_open: Rc::new(Cell::new(false)),
        }
    }

    pub(crate) fn set_popup_open(&self, open: bool) {
        self.popup_open.set(open);
    }

    pub(crate) fn unmount(&self) {
        self.mounted.set(false);
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Whether an effect scheduled earlier may still touch the display tree.
    fn is_current(&self) -> bool {
        self.mounted.get() && self.popup_open.get()
    }
}

/// Queue a scroll of `target` into the center of the viewport.
pub(crate) fn schedule_scroll(
    scheduler: &dyn FrameScheduler,
    surface: Rc<dyn DisplaySurface>,
    liveness: Liveness,
    target: OptionId,
) {
    log::debug!("scroll_to_selection: scheduling scroll to {}", target);
    scheduler.after_render(Box::new(move || {
        if !liveness.is_current() {
            log::trace!("scroll_to_selection: skipped {} (torn down or closed)", target);
            return;
        }
        if !surface.resolve(target.as_str()) {
            log::trace!("scroll_to_selection: skipped {} (not rendered)", target);
            return;
        }
        surface.scroll_into_view(target.as_str(), ScrollOptions::default());
    }));
}
