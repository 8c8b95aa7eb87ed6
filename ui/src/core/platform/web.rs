//! DOM-backed glue (wasm32 only).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlDocument, HtmlElement,
    MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

use super::{CURSOR_DOT_ID, CURSOR_RING_ID, SCROLLING_CLASS};
use crate::config::ScrollConfig;
use crate::core::anchors::{AnchorId, AnchorRect};
use crate::core::cursor::{translate3d, CursorState, INTERACTIVE_SELECTOR};
use crate::core::error::{PlatformError, StorageError};
use crate::core::language::{format_cookie, parse_cookie, PreferenceHost};
use crate::core::navigator::{FrameCallback, FrameHandle, FrameScheduler, Viewport};
use crate::core::tracker::{FrameTracker, PageSnapshot, ScrollMetrics, TrackerFrame};
use crate::i18n::Language;

fn js_error(operation: &'static str) -> impl FnOnce(JsValue) -> PlatformError {
    move |err| PlatformError::dom(operation, format!("{err:?}"))
}

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

fn root_element() -> Result<Element, PlatformError> {
    document()?.document_element().ok_or(PlatformError::NoDocument)
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, PlatformError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError::dom("getElementById", format!("#{id} not rendered")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PlatformError::dom("getElementById", format!("#{id} is not an HTML element")))
}

fn request_animation_frame(callback: &JsValue) -> Result<FrameHandle, PlatformError> {
    window()?
        .request_animation_frame(callback.unchecked_ref())
        .map_err(js_error("requestAnimationFrame"))
}

fn cancel_animation_frame(handle: FrameHandle) {
    if let Ok(window) = window() {
        let _ = window.cancel_animation_frame(handle);
    }
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` scheduler. Each scheduled closure is owned until it
/// fires or is cancelled, so cancelled frames release their JS function.
#[derive(Clone, Default)]
pub struct BrowserFrames {
    scheduled: Rc<RefCell<HashMap<FrameHandle, FrameClosure>>>,
}

impl FrameScheduler for BrowserFrames {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let handle_slot: Rc<Cell<Option<FrameHandle>>> = Rc::default();
        let scheduled = Rc::downgrade(&self.scheduled);
        let js: FrameClosure = Closure::once({
            let handle_slot = Rc::clone(&handle_slot);
            move |timestamp: f64| {
                // wasm-bindgen defers freeing a closure dropped during its own call.
                let own = match (handle_slot.get(), scheduled.upgrade()) {
                    (Some(handle), Some(scheduled)) => {
                        let own = scheduled.borrow_mut().remove(&handle);
                        own
                    }
                    _ => None,
                };
                callback(timestamp);
                drop(own);
            }
        });
        match request_animation_frame(js.as_ref()) {
            Ok(handle) => {
                handle_slot.set(Some(handle));
                self.scheduled.borrow_mut().insert(handle, js);
                Some(handle)
            }
            Err(err) => {
                tracing::warn!(%err, "animation frame unavailable");
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        cancel_animation_frame(handle);
        self.scheduled.borrow_mut().remove(&handle);
    }
}

/// The window's scroll position and the document's sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport {
    config: ScrollConfig,
}

impl DomViewport {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().map_err(js_error("scrollY"))).unwrap_or(0.0)
    }

    fn max_scroll(&self) -> f64 {
        let Ok(window) = window() else {
            return 0.0;
        };
        let document_height = root_element().map(|root| f64::from(root.scroll_height())).unwrap_or(0.0);
        let viewport_height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        (document_height - viewport_height).max(0.0)
    }

    fn scroll_to(&self, y: f64) {
        if let Ok(window) = window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = document().ok()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn header_offset(&self) -> f64 {
        self.config.header_offset(header_height())
    }

    fn set_fragment(&self, id: &str) {
        let Ok(window) = window() else {
            return;
        };
        let fragment = format!("#{id}");
        if window.location().hash().ok().as_deref() == Some(fragment.as_str()) {
            return;
        }
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&fragment)));
        if let Err(err) = pushed {
            tracing::debug!(?err, %fragment, "history.pushState failed");
        }
    }
}

/// Language preference in the `lang` cookie; document language on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieHost;

fn html_document() -> Result<HtmlDocument, PlatformError> {
    document()?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| PlatformError::dom("document.cookie", "not an HTML document"))
}

impl PreferenceHost for CookieHost {
    fn read_preference(&self, name: &str) -> Result<Option<String>, StorageError> {
        let cookies = html_document()?.cookie().map_err(js_error("document.cookie"))?;
        Ok(parse_cookie(&cookies, name).map(str::to_string))
    }

    fn write_preference(&self, name: &str, value: &str, max_age_secs: u64) -> Result<(), StorageError> {
        html_document()?
            .set_cookie(&format_cookie(name, value, max_age_secs))
            .map_err(js_error("document.cookie"))?;
        Ok(())
    }

    fn apply_document_language(&self, lang: Language) {
        let applied = root_element()
            .and_then(|root| root.set_attribute("lang", lang.code()).map_err(js_error("setAttribute")));
        if let Err(err) = applied {
            tracing::warn!(%err, "could not set document language");
        }
    }
}

fn header_height_in(document: &Document) -> Option<f64> {
    let header = document.query_selector("header").ok()??;
    let header = header.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(header.offset_height()))
}

/// Rendered height of the `<header>`, if any.
pub fn header_height() -> Option<f64> {
    header_height_in(&document().ok()?)
}

/// Read everything the tracker needs in one pass.
pub fn measure_page(config: &ScrollConfig) -> Result<PageSnapshot, PlatformError> {
    let window = window()?;
    let document = window.document().ok_or(PlatformError::NoDocument)?;
    let root = document.document_element().ok_or(PlatformError::NoDocument)?;

    let metrics = ScrollMetrics {
        scroll_y: window.scroll_y().map_err(js_error("scrollY"))?,
        viewport_height: window
            .inner_height()
            .map_err(js_error("innerHeight"))?
            .as_f64()
            .unwrap_or(0.0),
        document_height: f64::from(root.scroll_height()),
    };
    let anchors = AnchorId::ALL
        .into_iter()
        .map(|anchor| {
            let rect = document.get_element_by_id(anchor.id()).map(|element| {
                let rect = element.get_bounding_client_rect();
                AnchorRect::new(rect.top(), rect.bottom())
            });
            (anchor, rect)
        })
        .collect();

    Ok(PageSnapshot {
        metrics,
        header_offset: config.header_offset(header_height_in(&document)),
        anchors,
    })
}

/// Fragment of the current URL including `#`, if any.
pub fn location_fragment() -> Option<String> {
    let hash = window().ok()?.location().hash().ok()?;
    (!hash.is_empty()).then_some(hash)
}

fn media_matches(query: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn has_fine_pointer() -> bool {
    media_matches("(pointer: fine)")
}

pub fn viewport_size() -> (f64, f64) {
    let Ok(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Browser-native smooth scroll to `#id` shifted by `offset`.
pub fn native_scroll_to(id: &str, offset: f64) -> bool {
    let Some(top) = DomViewport::default().element_top(id) else {
        return false;
    };
    let Ok(window) = window() else {
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top((top + offset).max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Registered event listener; dropping it removes the listener.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<ListenerGuard, PlatformError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_error("addEventListener"))?;
    Ok(ListenerGuard {
        target: target.clone(),
        event,
        callback,
    })
}

pub fn on_resize(mut handler: impl FnMut() + 'static) -> Result<ListenerGuard, PlatformError> {
    listen(window()?.as_ref(), "resize", true, move |_| handler())
}

/// Pointer position in viewport coordinates on every `mousemove`.
pub fn on_pointer_move(mut handler: impl FnMut(f64, f64) + 'static) -> Result<ListenerGuard, PlatformError> {
    listen(window()?.as_ref(), "mousemove", true, move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            handler(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        }
    })
}

/// Active-section tracking driven by scroll and resize events.
pub struct ScrollTracker {
    _listeners: [ListenerGuard; 2],
    _tracker: FrameTracker<BrowserFrames>,
}

impl ScrollTracker {
    /// Start tracking. `on_frame` runs once immediately and then at most once
    /// per animation frame while the page scrolls or resizes.
    pub fn attach(
        config: ScrollConfig,
        on_frame: impl FnMut(TrackerFrame) + 'static,
    ) -> Result<Self, PlatformError> {
        let window = window()?;
        let tracker = FrameTracker::new(
            BrowserFrames::default(),
            config,
            move || measure_page(&config),
            on_frame,
        );

        let scroll = {
            let request = tracker.requester();
            listen(window.as_ref(), "scroll", true, move |_| request())?
        };
        let resize = {
            let request = tracker.requester();
            listen(window.as_ref(), "resize", true, move |_| request())?
        };

        tracker.run_now();
        Ok(Self {
            _listeners: [scroll, resize],
            _tracker: tracker,
        })
    }
}

/// Keeps the `is-scrolling` class on `<html>` until scrolling has been idle
/// for `idle_ms`.
pub struct ScrollActivity {
    root: Element,
    idle: Rc<RefCell<Option<Timeout>>>,
    _listener: ListenerGuard,
}

impl ScrollActivity {
    pub fn attach(idle_ms: u32) -> Result<Self, PlatformError> {
        let window = window()?;
        let root = root_element()?;
        let idle: Rc<RefCell<Option<Timeout>>> = Rc::default();

        let listener = {
            let root = root.clone();
            let idle = Rc::clone(&idle);
            listen(window.as_ref(), "scroll", true, move |_| {
                if let Err(err) = root.class_list().add_1(SCROLLING_CLASS) {
                    tracing::debug!(?err, "could not mark scrolling");
                }
                let root = root.clone();
                // Replacing the previous timeout cancels it.
                *idle.borrow_mut() = Some(Timeout::new(idle_ms, move || {
                    let _ = root.class_list().remove_1(SCROLLING_CLASS);
                }));
            })?
        };

        Ok(Self {
            root,
            idle,
            _listener: listener,
        })
    }
}

impl Drop for ScrollActivity {
    fn drop(&mut self) {
        self.idle.borrow_mut().take();
        let _ = self.root.class_list().remove_1(SCROLLING_CLASS);
    }
}

struct LoopShared {
    handle: Cell<Option<FrameHandle>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopShared {
    fn schedule(&self) {
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match request_animation_frame(tick.as_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(err) => tracing::warn!(%err, "animation loop stopped"),
        }
    }
}

/// Calls `tick` on every animation frame until dropped.
pub struct AnimationLoop {
    shared: Rc<LoopShared>,
}

impl AnimationLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Result<Self, PlatformError> {
        window()?;
        let shared = Rc::new(LoopShared {
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&shared);
        *shared.tick.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp| {
            tick(timestamp);
            if let Some(shared) = weak.upgrade() {
                shared.schedule();
            }
        }));
        shared.schedule();
        Ok(Self { shared })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.handle.take() {
            cancel_animation_frame(handle);
        }
        self.shared.tick.borrow_mut().take();
    }
}

fn paint(element: &HtmlElement, position: (f64, f64)) {
    if let Err(err) = element.style().set_property("transform", &translate3d(position)) {
        tracing::debug!(?err, "cursor transform not applied");
    }
}

/// Moves the `#cursor-dot` / `#cursor-ring` layers rendered by the cursor
/// component.
pub struct CursorDriver {
    _frames: AnimationLoop,
    _listeners: Vec<ListenerGuard>,
}

impl CursorDriver {
    pub fn attach(follow: f64) -> Result<Self, PlatformError> {
        let window = window()?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;
        let root = document.document_element().ok_or(PlatformError::NoDocument)?;
        let dot = html_element(&document, CURSOR_DOT_ID)?;
        let ring = html_element(&document, CURSOR_RING_ID)?;

        let (width, height) = viewport_size();
        let state = Rc::new(RefCell::new(CursorState::new((width / 2.0, height / 2.0), follow)));
        paint(&dot, state.borrow().pointer());
        paint(&ring, state.borrow().ring());

        let refresh = {
            let (state, dot, ring) = (Rc::clone(&state), dot.clone(), ring.clone());
            move || {
                let state = state.borrow();
                dot.set_class_name(&state.dot_class());
                ring.set_class_name(&state.ring_class());
            }
        };
        let update = |change: fn(&mut CursorState)| {
            let state = Rc::clone(&state);
            let refresh = refresh.clone();
            move |_: Event| {
                change(&mut state.borrow_mut());
                refresh();
            }
        };

        let target: &EventTarget = window.as_ref();
        let mut listeners = vec![
            listen(target, "mousedown", true, update(|s| s.pressed = true))?,
            listen(target, "mouseup", true, update(|s| s.pressed = false))?,
            listen(root.as_ref(), "mouseleave", true, update(|s| s.hidden = true))?,
            listen(root.as_ref(), "mouseenter", true, update(|s| s.hidden = false))?,
        ];
        listeners.push({
            let (state, dot) = (Rc::clone(&state), dot.clone());
            listen(target, "mousemove", true, move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let mut state = state.borrow_mut();
                    state.move_to(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                    paint(&dot, state.pointer());
                }
            })?
        });
        listeners.push({
            let state = Rc::clone(&state);
            let refresh = refresh.clone();
            listen(target, "mouseover", true, move |event| {
                let hovering = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                    .is_some();
                if state.borrow().hovering != hovering {
                    state.borrow_mut().hovering = hovering;
                    refresh();
                }
            })?
        });

        let frames = AnimationLoop::start(move |_| {
            let position = state.borrow_mut().step();
            paint(&ring, position);
        })?;

        Ok(Self {
            _frames: frames,
            _listeners: listeners,
        })
    }
}
