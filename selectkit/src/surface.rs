//! Host capabilities consumed by the widgets.
//!
//! The widgets never touch a display tree directly. A host (terminal, GUI,
//! test double) implements [`DisplaySurface`] to resolve, focus and scroll
//! elements by id, and [`FrameScheduler`] to run work after its next render.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Vertical or horizontal alignment for [`DisplaySurface::scroll_into_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

/// How an element should be brought into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub block: ScrollAlign,
    pub inline: ScrollAlign,
    pub smooth: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            block: ScrollAlign::Center,
            inline: ScrollAlign::Start,
            smooth: false,
        }
    }
}

/// Element lookups and side effects provided by the host.
///
/// All methods take `&self`; hosts keep their own interior mutability.
pub trait DisplaySurface {
    /// Whether an element with this id currently exists in the display tree.
    fn resolve(&self, id: &str) -> bool;

    /// Move focus to the element. Only called for ids that resolve.
    fn focus(&self, id: &str);

    /// Scroll the element into the visible viewport.
    fn scroll_into_view(&self, id: &str, options: ScrollOptions);

    /// Whether `target` is `root` or one of its descendants.
    ///
    /// Widget part ids are derived as `"{root}-..."`, so the default checks
    /// the id prefix.
    fn contains(&self, root: &str, target: &str) -> bool {
        target == root
            || target
                .strip_prefix(root)
                .is_some_and(|rest| rest.starts_with('-'))
    }
}

/// Surface with no display tree. Nothing resolves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn resolve(&self, _id: &str) -> bool {
        false
    }

    fn focus(&self, _id: &str) {}

    fn scroll_into_view(&self, _id: &str, _options: ScrollOptions) {}
}

/// Deferred work queued for after the next render.
pub type FrameTask = Box<dyn FnOnce()>;

/// "Run after next render" scheduling primitive.
pub trait FrameScheduler {
    fn after_render(&self, task: FrameTask);
}

/// Scheduler that drops every task. Used when no host is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScheduler;

impl FrameScheduler for NullScheduler {
    fn after_render(&self, _task: FrameTask) {
        log::trace!("NullScheduler: dropping deferred task");
    }
}

/// FIFO of deferred tasks, drained by the host once a frame is on screen.
///
/// Cheap to clone; clones share the same queue.
#[derive(Clone, Default)]
pub struct FrameQueue {
    tasks: Rc<RefCell<Vec<FrameTask>>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run every task queued so far. Tasks queued while running wait for the
    /// following frame. Returns how many tasks ran.
    pub fn run_pending(&self) -> usize {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn after_render(&self, task: FrameTask) {
        self.tasks.borrow_mut().push(task);
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default_contains_uses_id_prefix() {
        let surface = NullSurface;
        assert!(surface.contains("color", "color"));
        assert!(surface.contains("color", "color-red"));
        assert!(!surface.contains("color", "colors-red"));
        assert!(!surface.contains("color", "size-red"));
    }

    #[test]
    fn test_frame_queue_runs_in_order_once() {
        let queue = FrameQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = Rc::clone(&log);
            queue.after_render(Box::new(move || log.borrow_mut().push(i)));
        }
        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn test_task_queued_while_draining_waits_for_next_frame() {
        let queue = FrameQueue::new();
        let ran = Rc::new(Cell::new(0));
        let inner_queue = queue.clone();
        let inner_ran = Rc::clone(&ran);
        queue.after_render(Box::new(move || {
            let ran = Rc::clone(&inner_ran);
            inner_queue.after_render(Box::new(move || ran.set(ran.get() + 1)));
        }));
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.get(), 0);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.get(), 1);
    }
}
