//! Smooth scroll navigation.
//!
//! [`Navigator`] animates the document scroll position towards a section,
//! landing its top just below the fixed header. Frames are requested through a
//! [`FrameScheduler`] and the page is read/written through a [`Viewport`], so
//! the whole state machine runs in unit tests with fakes; `platform` provides
//! the browser implementations.
//!
//! Invariants:
//! - at most one frame callback is outstanding; a new request cancels the
//!   pending frame before scheduling its own (last request wins);
//! - after [`Navigator::teardown`] nothing is scheduled and every call is a
//!   no-op;
//! - unknown targets are ignored without an error.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::anchors::AnchorId;
use crate::config::ScrollConfig;

pub type FrameHandle = i32;
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host animation-frame facility (`requestAnimationFrame` in the browser).
pub trait FrameScheduler: 'static {
    /// Schedule `callback` for the next frame. The callback receives the frame
    /// timestamp in milliseconds. `None` means frames are unavailable.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;

    fn cancel_frame(&self, handle: FrameHandle);
}

/// The scrollable page as seen by the navigator.
pub trait Viewport: 'static {
    fn scroll_y(&self) -> f64;

    /// Largest reachable scroll offset.
    fn max_scroll(&self) -> f64;

    fn scroll_to(&self, y: f64);

    /// Absolute document position of the element's top edge.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current fixed-header offset (height plus margin).
    fn header_offset(&self) -> f64;

    /// Reflect `id` in the location fragment without a native jump.
    fn set_fragment(&self, id: &str);
}

/// Per-request options. `None` fields use the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigateOptions {
    /// Added to the target's top; defaults to minus the header offset.
    pub offset: Option<f64>,
    /// Seconds; defaults to [`ScrollConfig::default_duration_secs`].
    pub duration: Option<f64>,
    /// Navigate even while the navigator is locked.
    pub force: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            offset: None,
            duration: None,
            force: true,
        }
    }
}

impl NavigateOptions {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

/// `min(1, 1.001 - 2^(-10t))`: fast start, asymptotic finish.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// One in-flight scroll animation. The clock starts at the first sampled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_secs * 1000.0,
            started_at: None,
        }
    }

    pub fn destination(&self) -> f64 {
        self.to
    }

    /// Position for the frame at `now_ms` and whether the animation finished.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            (self.to, true)
        } else {
            (self.from + (self.to - self.from) * ease_out_expo(progress), false)
        }
    }
}

#[derive(Default)]
struct NavigatorState {
    animation: Option<ScrollAnimation>,
    frame: Option<FrameHandle>,
    locked: bool,
    deep_linked: bool,
    torn_down: bool,
}

struct NavigatorInner<S, V> {
    scheduler: S,
    viewport: V,
    config: ScrollConfig,
    state: RefCell<NavigatorState>,
}

/// Cloneable handle to one smooth-scroll engine.
pub struct Navigator<S, V> {
    inner: Rc<NavigatorInner<S, V>>,
}

impl<S, V> Clone for Navigator<S, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: FrameScheduler, V: Viewport> Navigator<S, V> {
    pub fn new(scheduler: S, viewport: V, config: ScrollConfig) -> Self {
        Self {
            inner: Rc::new(NavigatorInner {
                scheduler,
                viewport,
                config,
                state: RefCell::new(NavigatorState::default()),
            }),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.inner.config
    }

    pub fn viewport(&self) -> &V {
        &self.inner.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.inner.viewport.scroll_y()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.state.borrow().animation.is_some()
    }

    /// Destination of the in-flight animation, if any.
    pub fn destination(&self) -> Option<f64> {
        self.inner
            .state
            .borrow()
            .animation
            .map(|animation| animation.destination())
    }

    pub fn is_locked(&self) -> bool {
        self.inner.state.borrow().locked
    }

    /// While locked, only `force` requests navigate.
    pub fn set_locked(&self, locked: bool) {
        self.inner.state.borrow_mut().locked = locked;
    }

    /// Animate to the element with id `target` (a leading `#` is ignored).
    /// Returns `false` when nothing was started.
    pub fn navigate(&self, target: &str, options: NavigateOptions) -> bool {
        let id = target.strip_prefix('#').unwrap_or(target);
        if id.is_empty() {
            return false;
        }
        {
            let state = self.inner.state.borrow();
            if state.torn_down {
                return false;
            }
            if state.locked && !options.force {
                tracing::debug!(target = id, "navigation ignored while locked");
                return false;
            }
        }

        let viewport = &self.inner.viewport;
        let Some(top) = viewport.element_top(id) else {
            tracing::debug!(target = id, "navigation target not found");
            return false;
        };
        let offset = options.offset.unwrap_or_else(|| -viewport.header_offset());
        let destination = (top + offset).clamp(0.0, viewport.max_scroll().max(0.0));
        let duration = options
            .duration
            .unwrap_or(self.inner.config.default_duration_secs);

        self.cancel_frame();
        viewport.set_fragment(id);

        if !(duration > 0.0) {
            self.inner.state.borrow_mut().animation = None;
            viewport.scroll_to(destination);
            return true;
        }

        self.inner.state.borrow_mut().animation =
            Some(ScrollAnimation::new(viewport.scroll_y(), destination, duration));
        self.schedule();
        true
    }

    pub fn navigate_to(&self, anchor: AnchorId, options: NavigateOptions) -> bool {
        self.navigate(anchor.id(), options)
    }

    /// Initial-load navigation for a fragment naming a known section. Runs at
    /// most once per navigator.
    pub fn deep_link(&self, fragment: &str) -> bool {
        let Some(anchor) = AnchorId::from_fragment(fragment) else {
            return false;
        };
        {
            let mut state = self.inner.state.borrow_mut();
            if state.deep_linked || state.torn_down {
                return false;
            }
            state.deep_linked = true;
        }
        let duration = self.inner.config.deep_link_duration_secs;
        self.navigate_to(anchor, NavigateOptions::with_duration(duration))
    }

    /// Abandon the in-flight animation where it is.
    pub fn stop(&self) {
        self.cancel_frame();
        self.inner.state.borrow_mut().animation = None;
    }

    /// Cancel everything and refuse further work.
    pub fn teardown(&self) {
        self.stop();
        self.inner.state.borrow_mut().torn_down = true;
    }

    fn cancel_frame(&self) {
        let pending = self.inner.state.borrow_mut().frame.take();
        if let Some(handle) = pending {
            self.inner.scheduler.cancel_frame(handle);
        }
    }

    fn schedule(&self) {
        let weak: Weak<NavigatorInner<S, V>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.request_frame(Box::new(move |now_ms| {
            if let Some(inner) = weak.upgrade() {
                Navigator { inner }.step(now_ms);
            }
        }));

        match handle {
            Some(handle) => self.inner.state.borrow_mut().frame = Some(handle),
            None => {
                // No frame source: land immediately.
                let animation = self.inner.state.borrow_mut().animation.take();
                if let Some(animation) = animation {
                    self.inner.viewport.scroll_to(animation.destination());
                }
            }
        }
    }

    fn step(&self, now_ms: f64) {
        let sample = {
            let mut state = self.inner.state.borrow_mut();
            state.frame = None;
            if state.torn_down {
                return;
            }
            let Some(animation) = state.animation.as_mut() else {
                return;
            };
            let (position, done) = animation.sample(now_ms);
            if done {
                state.animation = None;
            }
            (position, done)
        };

        let (position, done) = sample;
        self.inner.viewport.scroll_to(position);
        if !done {
            self.schedule();
        }
    }
}
