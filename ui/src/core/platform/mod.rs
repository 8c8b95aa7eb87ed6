//! Browser glue.
//!
//! `web` talks to the real DOM through `web-sys`; `headless` exposes the same
//! API with inert behaviour so host builds and unit tests compile and run
//! without a browser. Everything outside this module stays target-agnostic.
//!
//! Listener and frame handles are RAII guards: dropping a [`ListenerGuard`],
//! [`ScrollTracker`], [`ScrollActivity`] or [`CursorDriver`] detaches it.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
mod headless;
#[cfg(not(target_arch = "wasm32"))]
pub use headless::*;

use super::navigator::Navigator;

/// Navigator wired to the page.
pub type PageNavigator = Navigator<BrowserFrames, DomViewport>;

/// Class toggled on `<html>` while the page is scrolling.
pub const SCROLLING_CLASS: &str = "is-scrolling";

pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
