//! Hand-driven animation frames for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::navigator::{FrameCallback, FrameHandle, FrameScheduler};

/// Frames run only when a test calls [`ManualFrames::run`].
#[derive(Clone, Default)]
pub(crate) struct ManualFrames {
    queue: Rc<RefCell<Vec<(FrameHandle, FrameCallback)>>>,
    next: Rc<Cell<FrameHandle>>,
    fired: Rc<Cell<usize>>,
    cancelled: Rc<Cell<usize>>,
}

impl ManualFrames {
    pub(crate) fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fire every queued callback at `now_ms`.
    pub(crate) fn run(&self, now_ms: f64) {
        for callback in self.take() {
            self.fired.set(self.fired.get() + 1);
            callback(now_ms);
        }
    }

    /// Remove queued callbacks without firing them.
    pub(crate) fn take(&self) -> Vec<FrameCallback> {
        self.queue.borrow_mut().drain(..).map(|(_, callback)| callback).collect()
    }

    /// Frames cancelled while still queued.
    pub(crate) fn cancelled(&self) -> usize {
        self.cancelled.get()
    }

    /// Every frame ever requested was fired, cancelled or is still queued.
    pub(crate) fn all_accounted_for(&self) -> bool {
        let issued = usize::try_from(self.next.get()).unwrap_or(0);
        issued == self.fired.get() + self.cancelled.get() + self.pending()
    }

    /// Drive frames 16ms apart until nothing is scheduled.
    pub(crate) fn run_to_end(&self, mut now_ms: f64) -> f64 {
        while self.pending() > 0 {
            assert!(self.pending() <= 1, "more than one frame outstanding");
            self.run(now_ms);
            now_ms += 16.0;
        }
        now_ms
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let handle = self.next.get() + 1;
        self.next.set(handle);
        self.queue.borrow_mut().push((handle, callback));
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(h, _)| *h != handle);
        if queue.len() < before {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}
