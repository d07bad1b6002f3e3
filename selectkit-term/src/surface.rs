//! Display surface backed by the terminal viewport.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::ops::Range;

use selectkit::{DisplaySurface, ScrollAlign, ScrollOptions};

/// The part of the terminal the widget draws into.
///
/// Option rows that were part of the last frame resolve even when they are
/// scrolled out of the window, the same way off-screen elements still exist
/// in a document. Focusing or scrolling to a row moves the window.
#[derive(Debug)]
pub struct TermSurface {
    height: Cell<usize>,
    offset: Cell<usize>,
    rows: RefCell<Vec<String>>,
    rendered: RefCell<HashSet<String>>,
    focused: RefCell<Option<String>>,
    moved: Cell<bool>,
}

impl TermSurface {
    pub fn new(height: usize) -> Self {
        Self {
            height: Cell::new(height.max(1)),
            offset: Cell::new(0),
            rows: RefCell::new(Vec::new()),
            rendered: RefCell::new(HashSet::new()),
            focused: RefCell::new(None),
            moved: Cell::new(false),
        }
    }

    pub fn set_height(&self, height: usize) {
        self.height.set(height.max(1));
        self.clamp();
    }

    /// Record what the last frame drew: the always-present ids (input,
    /// listbox) and the option rows in list order.
    pub fn mark_rendered(&self, fixed: &[String], rows: Vec<String>) {
        let mut rendered = self.rendered.borrow_mut();
        rendered.clear();
        rendered.extend(fixed.iter().cloned());
        rendered.extend(rows.iter().cloned());
        *self.rows.borrow_mut() = rows;
        drop(rendered);
        self.clamp();
    }

    /// Rows currently inside the window.
    pub fn window(&self) -> Range<usize> {
        let len = self.rows.borrow().len();
        let start = self.offset.get().min(len);
        start..(start + self.height.get()).min(len)
    }

    pub fn focused(&self) -> Option<String> {
        self.focused.borrow().clone()
    }

    /// Whether the window moved since the last call.
    pub fn take_moved(&self) -> bool {
        self.moved.replace(false)
    }

    fn row_index(&self, id: &str) -> Option<usize> {
        self.rows.borrow().iter().position(|row| row == id)
    }

    fn move_to(&self, offset: usize) {
        if offset != self.offset.get() {
            log::trace!("TermSurface::move_to offset={}", offset);
            self.offset.set(offset);
            self.moved.set(true);
        }
    }

    fn clamp(&self) {
        let len = self.rows.borrow().len();
        let max = len.saturating_sub(self.height.get());
        if self.offset.get() > max {
            self.move_to(max);
        }
    }
}

impl DisplaySurface for TermSurface {
    fn resolve(&self, id: &str) -> bool {
        self.rendered.borrow().contains(id)
    }

    fn focus(&self, id: &str) {
        *self.focused.borrow_mut() = Some(id.to_string());
        if let Some(index) = self.row_index(id) {
            let len = self.rows.borrow().len();
            let offset = align_offset(
                index,
                len,
                self.height.get(),
                self.offset.get(),
                ScrollAlign::Nearest,
            );
            self.move_to(offset);
        }
    }

    fn scroll_into_view(&self, id: &str, options: ScrollOptions) {
        let Some(index) = self.row_index(id) else {
            return;
        };
        let len = self.rows.borrow().len();
        let offset = align_offset(index, len, self.height.get(), self.offset.get(), options.block);
        log::debug!("TermSurface::scroll_into_view id={} offset={}", id, offset);
        self.move_to(offset);
    }
}

/// Window offset that shows row `index` with the given alignment.
pub fn align_offset(
    index: usize,
    len: usize,
    height: usize,
    current: usize,
    align: ScrollAlign,
) -> usize {
    let max = len.saturating_sub(height);
    let wanted = match align {
        ScrollAlign::Start => index,
        ScrollAlign::Center => index.saturating_sub(height / 2),
        ScrollAlign::End => (index + 1).saturating_sub(height),
        ScrollAlign::Nearest => {
            if index < current {
                index
            } else if index >= current + height {
                index + 1 - height
            } else {
                current
            }
        }
    };
    wanted.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("list-{}", i)).collect()
    }

    #[test]
    fn test_align_offset() {
        assert_eq!(align_offset(10, 20, 5, 0, ScrollAlign::Center), 8);
        assert_eq!(align_offset(1, 20, 5, 0, ScrollAlign::Center), 0);
        assert_eq!(align_offset(19, 20, 5, 0, ScrollAlign::Center), 15);
        assert_eq!(align_offset(7, 20, 5, 0, ScrollAlign::Start), 7);
        assert_eq!(align_offset(7, 20, 5, 0, ScrollAlign::End), 3);
        assert_eq!(align_offset(2, 3, 5, 0, ScrollAlign::Start), 0);
    }

    #[test]
    fn test_nearest_only_moves_when_needed() {
        assert_eq!(align_offset(6, 20, 5, 4, ScrollAlign::Nearest), 4);
        assert_eq!(align_offset(9, 20, 5, 4, ScrollAlign::Nearest), 5);
        assert_eq!(align_offset(2, 20, 5, 4, ScrollAlign::Nearest), 2);
    }

    #[test]
    fn test_only_last_frame_resolves() {
        let surface = TermSurface::new(3);
        surface.mark_rendered(&["list-input".to_string()], ids(2));
        assert!(surface.resolve("list-input"));
        assert!(surface.resolve("list-1"));
        assert!(!surface.resolve("list-2"));

        surface.mark_rendered(&["list-input".to_string()], Vec::new());
        assert!(!surface.resolve("list-1"));
    }

    #[test]
    fn test_scroll_into_view_centers_row() {
        let surface = TermSurface::new(4);
        surface.mark_rendered(&[], ids(12));
        surface.scroll_into_view("list-9", ScrollOptions::default());
        assert_eq!(surface.window(), 7..11);
        assert!(surface.take_moved());
        assert!(!surface.take_moved());
    }

    #[test]
    fn test_focus_keeps_row_visible() {
        let surface = TermSurface::new(3);
        surface.mark_rendered(&[], ids(10));
        surface.focus("list-4");
        assert_eq!(surface.focused().as_deref(), Some("list-4"));
        assert_eq!(surface.window(), 2..5);
    }

    #[test]
    fn test_shorter_list_clamps_window() {
        let surface = TermSurface::new(3);
        surface.mark_rendered(&[], ids(10));
        surface.scroll_into_view("list-9", ScrollOptions::default());
        surface.mark_rendered(&[], ids(2));
        assert_eq!(surface.window(), 0..2);
    }
}
