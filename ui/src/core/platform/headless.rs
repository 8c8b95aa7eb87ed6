//! Inert stand-ins for the browser glue, used off-wasm.

use crate::config::ScrollConfig;
use crate::core::error::{PlatformError, StorageError};
use crate::core::language::PreferenceHost;
use crate::core::navigator::{FrameCallback, FrameHandle, FrameScheduler, Viewport};
use crate::core::tracker::{PageSnapshot, TrackerFrame};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    fn request_frame(&self, _callback: FrameCallback) -> Option<FrameHandle> {
        None
    }

    fn cancel_frame(&self, _handle: FrameHandle) {}
}

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
        0.0
    }

    fn max_scroll(&self) -> f64 {
        0.0
    }

    fn scroll_to(&self, _y: f64) {}

    fn element_top(&self, _id: &str) -> Option<f64> {
        None
    }

    fn header_offset(&self) -> f64 {
        self.config.header_offset(None)
    }

    fn set_fragment(&self, _id: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CookieHost;

impl PreferenceHost for CookieHost {
    fn read_preference(&self, _name: &str) -> Result<Option<String>, StorageError> {
        Err(PlatformError::Unsupported.into())
    }

    fn write_preference(&self, _name: &str, _value: &str, _max_age_secs: u64) -> Result<(), StorageError> {
        Err(PlatformError::Unsupported.into())
    }

    fn apply_document_language(&self, _lang: Language) {}
}

pub fn measure_page(_config: &ScrollConfig) -> Result<PageSnapshot, PlatformError> {
    Err(PlatformError::Unsupported)
}

pub fn header_height() -> Option<f64> {
    None
}

pub fn location_fragment() -> Option<String> {
    None
}

pub fn prefers_reduced_motion() -> bool {
    false
}

pub fn has_fine_pointer() -> bool {
    false
}

pub fn viewport_size() -> (f64, f64) {
    (0.0, 0.0)
}

pub fn native_scroll_to(_id: &str, _offset: f64) -> bool {
    false
}

#[derive(Debug)]
pub struct ListenerGuard;

pub fn on_resize(_handler: impl FnMut() + 'static) -> Result<ListenerGuard, PlatformError> {
    Err(PlatformError::Unsupported)
}

pub fn on_pointer_move(_handler: impl FnMut(f64, f64) + 'static) -> Result<ListenerGuard, PlatformError> {
    Err(PlatformError::Unsupported)
}

#[derive(Debug)]
pub struct ScrollTracker;

impl ScrollTracker {
    pub fn attach(
        _config: ScrollConfig,
        _on_frame: impl FnMut(TrackerFrame) + 'static,
    ) -> Result<Self, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

#[derive(Debug)]
pub struct ScrollActivity;

impl ScrollActivity {
    pub fn attach(_idle_ms: u32) -> Result<Self, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

#[derive(Debug)]
pub struct CursorDriver;

impl CursorDriver {
    pub fn attach(_follow: f64) -> Result<Self, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}
