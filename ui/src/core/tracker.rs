//! Active-section tracking.
//!
//! The header highlights the section the visitor is "looking at". That is
//! decided against a detection line just below the fixed header:
//!
//! 1. Scrolled to the very bottom → the last declared section (short trailing
//!    sections can never reach the line otherwise).
//! 2. The first section, in declared order, whose rect straddles the line.
//! 3. The section whose top is closest above the line (first declared wins a
//!    tie).
//! 4. The first declared section.
//!
//! Sections missing from the layout are skipped; if none are present the
//! previous answer stands. [`FrameTracker`] coalesces scroll and resize
//! bursts into one measurement per animation frame; `platform` supplies the
//! frame source, the page measurement and the listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::anchors::{AnchorId, AnchorRect};
use super::error::PlatformError;
use super::navigator::{FrameHandle, FrameScheduler};
use crate::config::ScrollConfig;

/// Document scroll state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at_bottom(&self, epsilon: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - epsilon
    }
}

/// Everything the tracker needs from one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSnapshot {
    pub metrics: ScrollMetrics,
    pub header_offset: f64,
    /// Declared anchors with their rect, `None` when not rendered.
    pub anchors: Vec<(AnchorId, Option<AnchorRect>)>,
}

/// Result of one tracker frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerFrame {
    /// `None` leaves the active anchor untouched.
    pub active: Option<AnchorId>,
    /// Header switches to its opaque style past the threshold.
    pub scrolled: bool,
}

pub fn evaluate(snapshot: &PageSnapshot, config: &ScrollConfig) -> TrackerFrame {
    TrackerFrame {
        active: compute_active_anchor(snapshot, config),
        scrolled: snapshot.metrics.scroll_y > config.scrolled_threshold,
    }
}

/// Decide which anchor is active, or `None` when no anchor is rendered.
pub fn compute_active_anchor(snapshot: &PageSnapshot, config: &ScrollConfig) -> Option<AnchorId> {
    if snapshot.anchors.iter().all(|(_, rect)| rect.is_none()) {
        return None;
    }

    if snapshot.metrics.at_bottom(config.bottom_epsilon) {
        return snapshot.anchors.last().map(|(id, _)| *id);
    }

    let line = snapshot.header_offset + config.detection_margin;
    let mut closest_above: Option<(AnchorId, f64)> = None;

    for (id, rect) in &snapshot.anchors {
        let Some(rect) = rect else {
            continue;
        };
        if rect.straddles(line) {
            return Some(*id);
        }
        let distance = line - rect.top;
        if distance >= 0.0 && closest_above.map_or(true, |(_, best)| distance < best) {
            closest_above = Some((*id, distance));
        }
    }

    closest_above
        .map(|(id, _)| id)
        .or_else(|| snapshot.anchors.first().map(|(id, _)| *id))
}

/// The highlighted anchor; writes only on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveAnchor {
    current: AnchorId,
}

impl ActiveAnchor {
    pub fn get(&self) -> AnchorId {
        self.current
    }

    /// Apply a tracker result. Returns `true` only when the anchor changed.
    pub fn apply(&mut self, next: Option<AnchorId>) -> bool {
        match next {
            Some(next) if next != self.current => {
                self.current = next;
                true
            }
            _ => false,
        }
    }
}

/// Allows one pending recomputation per animation frame. Requests arriving
/// while one is pending are dropped, not queued.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// `true` if the caller may schedule a frame.
    pub fn try_enter(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn leave(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

type Measure = Box<dyn FnMut() -> Result<PageSnapshot, PlatformError>>;
type FrameSink = Box<dyn FnMut(TrackerFrame)>;

struct TrackerState<S> {
    frames: S,
    config: ScrollConfig,
    gate: FrameGate,
    frame: Cell<Option<FrameHandle>>,
    measure: RefCell<Measure>,
    on_frame: RefCell<FrameSink>,
}

impl<S: FrameScheduler> TrackerState<S> {
    fn run(&self) -> bool {
        let measured = (self.measure.borrow_mut())();
        match measured {
            Ok(snapshot) => {
                (self.on_frame.borrow_mut())(evaluate(&snapshot, &self.config));
                true
            }
            Err(err) => {
                tracing::warn!(%err, "scroll tracking frame skipped");
                false
            }
        }
    }

    fn request(this: &Rc<Self>) {
        if !this.gate.try_enter() {
            return;
        }
        let weak = Rc::downgrade(this);
        let scheduled = this.frames.request_frame(Box::new(move |_timestamp| {
            if let Some(state) = weak.upgrade() {
                state.frame.set(None);
                state.gate.leave();
                state.run();
            }
        }));
        match scheduled {
            Some(handle) => this.frame.set(Some(handle)),
            None => {
                this.gate.leave();
                tracing::warn!("scroll tracking frame not scheduled");
            }
        }
    }
}

/// Runs `measure` at most once per animation frame no matter how many
/// requests arrive, and hands each result to `on_frame`.
///
/// Dropping the tracker cancels the pending frame; callbacks and
/// [`requester`](Self::requester) handles that outlive it do nothing.
pub struct FrameTracker<S: FrameScheduler> {
    state: Rc<TrackerState<S>>,
}

impl<S: FrameScheduler> FrameTracker<S> {
    pub fn new(
        frames: S,
        config: ScrollConfig,
        measure: impl FnMut() -> Result<PageSnapshot, PlatformError> + 'static,
        on_frame: impl FnMut(TrackerFrame) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(TrackerState {
                frames,
                config,
                gate: FrameGate::default(),
                frame: Cell::new(None),
                measure: RefCell::new(Box::new(measure)),
                on_frame: RefCell::new(Box::new(on_frame)),
            }),
        }
    }

    /// Measure right away. Returns `false` when the measurement failed.
    pub fn run_now(&self) -> bool {
        self.state.run()
    }

    /// Recompute on the next frame; ignored while a frame is already pending.
    pub fn request(&self) {
        TrackerState::request(&self.state);
    }

    /// Request handle for event listeners.
    pub fn requester(&self) -> impl Fn() + 'static {
        let weak = Rc::downgrade(&self.state);
        move || {
            if let Some(state) = weak.upgrade() {
                TrackerState::request(&state);
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.gate.is_pending()
    }
}

impl<S: FrameScheduler> Drop for FrameTracker<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.state.frame.take() {
            self.state.frames.cancel_frame(handle);
        }
        self.state.gate.leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ManualFrames;

    const HEADER: f64 = 88.0;

    /// Sections stacked back to back, `scroll_y` already applied to the rects.
    fn page(scroll_y: f64, heights: &[(AnchorId, f64)]) -> PageSnapshot {
        let mut top = -scroll_y;
        let mut anchors = Vec::new();
        for (id, height) in heights {
            anchors.push((*id, Some(AnchorRect::new(top, top + height))));
            top += height;
        }
        let document_height = heights.iter().map(|(_, h)| h).sum();
        PageSnapshot {
            metrics: ScrollMetrics {
                scroll_y,
                viewport_height: 800.0,
                document_height,
            },
            header_offset: HEADER,
            anchors,
        }
    }

    fn landing(scroll_y: f64) -> PageSnapshot {
        page(
            scroll_y,
            &[
                (AnchorId::Home, 900.0),
                (AnchorId::Web, 700.0),
                (AnchorId::Mobile, 800.0),
                (AnchorId::Digital, 900.0),
                (AnchorId::Tech, 300.0),
            ],
        )
    }

    #[test]
    fn same_input_same_answer() {
        let cfg = ScrollConfig::default();
        for scroll_y in [0.0, 450.0, 1234.0, 2500.0] {
            let snapshot = landing(scroll_y);
            assert_eq!(
                compute_active_anchor(&snapshot, &cfg),
                compute_active_anchor(&snapshot, &cfg)
            );
        }
    }

    #[test]
    fn picks_section_under_detection_line() {
        let cfg = ScrollConfig::default();
        assert_eq!(compute_active_anchor(&landing(0.0), &cfg), Some(AnchorId::Home));
        // Web spans 900..1600; line sits at scroll_y + 92.
        assert_eq!(compute_active_anchor(&landing(900.0), &cfg), Some(AnchorId::Web));
        assert_eq!(compute_active_anchor(&landing(807.0), &cfg), Some(AnchorId::Home));
        assert_eq!(compute_active_anchor(&landing(808.0), &cfg), Some(AnchorId::Web));
        assert_eq!(compute_active_anchor(&landing(1600.0), &cfg), Some(AnchorId::Mobile));
    }

    #[test]
    fn bottom_of_document_forces_last_anchor() {
        let cfg = ScrollConfig::default();
        // document 3600, viewport 800 → bottom at scroll_y 2800; Digital straddles the line.
        let snapshot = landing(2798.0);
        assert!(snapshot.metrics.at_bottom(cfg.bottom_epsilon));
        assert_eq!(compute_active_anchor(&snapshot, &cfg), Some(AnchorId::Tech));

        let short_of_bottom = landing(2797.0);
        assert_eq!(compute_active_anchor(&short_of_bottom, &cfg), Some(AnchorId::Digital));
    }

    #[test]
    fn no_rendered_anchors_keeps_previous_value() {
        let cfg = ScrollConfig::default();
        let mut active = ActiveAnchor::default();
        active.apply(Some(AnchorId::Mobile));

        let empty = PageSnapshot::default();
        assert_eq!(compute_active_anchor(&empty, &cfg), None);
        assert!(!active.apply(compute_active_anchor(&empty, &cfg)));

        let unrendered = PageSnapshot {
            anchors: AnchorId::ALL.iter().map(|id| (*id, None)).collect(),
            ..PageSnapshot::default()
        };
        assert_eq!(compute_active_anchor(&unrendered, &cfg), None);
        assert_eq!(active.get(), AnchorId::Mobile);
    }

    #[test]
    fn gaps_fall_back_to_closest_section_above() {
        let cfg = ScrollConfig::default();
        let snapshot = PageSnapshot {
            metrics: ScrollMetrics {
                scroll_y: 500.0,
                viewport_height: 800.0,
                document_height: 5000.0,
            },
            header_offset: HEADER,
            anchors: vec![
                (AnchorId::Home, Some(AnchorRect::new(-500.0, -100.0))),
                (AnchorId::Web, Some(AnchorRect::new(-50.0, 50.0))),
                (AnchorId::Mobile, None),
                (AnchorId::Digital, Some(AnchorRect::new(400.0, 900.0))),
            ],
        };
        assert_eq!(compute_active_anchor(&snapshot, &cfg), Some(AnchorId::Web));
    }

    #[test]
    fn above_every_section_defaults_to_first() {
        let cfg = ScrollConfig::default();
        let snapshot = PageSnapshot {
            metrics: ScrollMetrics {
                scroll_y: 0.0,
                viewport_height: 800.0,
                document_height: 5000.0,
            },
            header_offset: HEADER,
            anchors: vec![
                (AnchorId::Home, None),
                (AnchorId::Web, Some(AnchorRect::new(300.0, 900.0))),
            ],
        };
        assert_eq!(compute_active_anchor(&snapshot, &cfg), Some(AnchorId::Home));
    }

    #[test]
    fn equidistant_tops_prefer_first_declared() {
        let cfg = ScrollConfig::default();
        let snapshot = PageSnapshot {
            metrics: ScrollMetrics {
                scroll_y: 300.0,
                viewport_height: 800.0,
                document_height: 5000.0,
            },
            header_offset: HEADER,
            anchors: vec![
                (AnchorId::Web, Some(AnchorRect::new(0.0, 40.0))),
                (AnchorId::Mobile, Some(AnchorRect::new(0.0, 60.0))),
            ],
        };
        assert_eq!(compute_active_anchor(&snapshot, &cfg), Some(AnchorId::Web));
    }

    #[test]
    fn active_anchor_only_reports_changes() {
        let mut active = ActiveAnchor::default();
        assert_eq!(active.get(), AnchorId::Home);
        assert!(!active.apply(Some(AnchorId::Home)));
        assert!(active.apply(Some(AnchorId::Tech)));
        assert!(!active.apply(Some(AnchorId::Tech)));
        assert!(!active.apply(None));
        assert_eq!(active.get(), AnchorId::Tech);
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        let cfg = ScrollConfig::default();
        assert!(!evaluate(&landing(20.0), &cfg).scrolled);
        assert!(evaluate(&landing(21.0), &cfg).scrolled);
    }

    #[test]
    fn frame_gate_drops_requests_while_pending() {
        let gate = FrameGate::default();
        assert!(gate.try_enter());
        assert!(!gate.try_enter());
        assert!(gate.is_pending());
        gate.leave();
        assert!(gate.try_enter());
    }

    struct Observed {
        measured: Rc<Cell<usize>>,
        reported: Rc<RefCell<Vec<TrackerFrame>>>,
        failing: Rc<Cell<bool>>,
    }

    fn tracked(frames: &ManualFrames, scroll_y: f64) -> (FrameTracker<ManualFrames>, Observed) {
        let seen = Observed {
            measured: Rc::default(),
            reported: Rc::default(),
            failing: Rc::default(),
        };
        let (measured, failing) = (Rc::clone(&seen.measured), Rc::clone(&seen.failing));
        let reported = Rc::clone(&seen.reported);
        let tracker = FrameTracker::new(
            frames.clone(),
            ScrollConfig::default(),
            move || {
                measured.set(measured.get() + 1);
                if failing.get() {
                    Err(PlatformError::dom("getBoundingClientRect", "layout unavailable"))
                } else {
                    Ok(landing(scroll_y))
                }
            },
            move |frame| reported.borrow_mut().push(frame),
        );
        (tracker, seen)
    }

    #[test]
    fn burst_of_requests_measures_once_per_frame() {
        let frames = ManualFrames::default();
        let (tracker, seen) = tracked(&frames, 900.0);
        let request = tracker.requester();

        for _ in 0..10 {
            request();
            tracker.request();
        }
        assert_eq!(frames.pending(), 1);
        assert!(tracker.is_pending());
        assert_eq!(seen.measured.get(), 0);

        frames.run(16.0);
        assert_eq!(seen.measured.get(), 1);
        assert!(!tracker.is_pending());
        assert_eq!(
            *seen.reported.borrow(),
            [TrackerFrame {
                active: Some(AnchorId::Web),
                scrolled: true
            }]
        );

        request();
        assert_eq!(frames.pending(), 1);
        frames.run(32.0);
        assert_eq!(seen.measured.get(), 2);
    }

    #[test]
    fn run_now_reports_without_a_frame() {
        let frames = ManualFrames::default();
        let (tracker, seen) = tracked(&frames, 0.0);
        assert!(tracker.run_now());
        assert_eq!(frames.pending(), 0);
        assert_eq!(seen.reported.borrow()[0].active, Some(AnchorId::Home));
    }

    #[test]
    fn dropped_tracker_cancels_and_ignores_late_callbacks() {
        let frames = ManualFrames::default();
        let (tracker, seen) = tracked(&frames, 900.0);
        let request = tracker.requester();

        tracker.request();
        assert_eq!(frames.pending(), 1);
        drop(tracker);
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.cancelled(), 1);
        assert!(frames.all_accounted_for());

        request();
        assert_eq!(frames.pending(), 0);
        assert_eq!(seen.measured.get(), 0);
        assert!(seen.reported.borrow().is_empty());
    }

    #[test]
    fn frame_firing_after_drop_is_a_no_op() {
        let frames = ManualFrames::default();
        let (tracker, seen) = tracked(&frames, 900.0);
        tracker.request();
        let late = frames.take();
        drop(tracker);

        for callback in late {
            callback(16.0);
        }
        assert_eq!(seen.measured.get(), 0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn failed_measurement_keeps_tracking() {
        let frames = ManualFrames::default();
        let (tracker, seen) = tracked(&frames, 900.0);
        seen.failing.set(true);

        assert!(!tracker.run_now());
        tracker.request();
        frames.run(16.0);
        assert_eq!(seen.measured.get(), 2);
        assert!(seen.reported.borrow().is_empty());
        assert!(!tracker.is_pending());

        seen.failing.set(false);
        tracker.request();
        assert_eq!(frames.pending(), 1);
        frames.run(32.0);
        assert_eq!(seen.reported.borrow().len(), 1);
    }
}
