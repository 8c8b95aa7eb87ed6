//! Hooks shared by the page components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::error::PlatformError;
use crate::core::platform;

/// Attach a browser resource (listener guard, tracker, animation loop) after
/// mount and keep it alive until the component unmounts.
///
/// `Unsupported` (host builds) is silent; other failures are logged and the
/// component renders without the behaviour.
pub fn use_browser_resource<T: 'static>(
    label: &'static str,
    mut attach: impl FnMut() -> Result<T, PlatformError> + 'static,
) {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<T>)));

    {
        let slot = Rc::clone(&slot);
        use_effect(move || match attach() {
            Ok(resource) => *slot.borrow_mut() = Some(resource),
            Err(PlatformError::Unsupported) => {}
            Err(err) => tracing::warn!(%err, resource = label, "browser resource not attached"),
        });
    }

    use_drop(move || {
        slot.borrow_mut().take();
    });
}

/// Measured `<header>` height, refreshed on resize. `None` until mounted or
/// when no header is rendered.
pub fn use_header_height() -> Signal<Option<f64>> {
    let mut height = use_signal(|| None::<f64>);

    let resized = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            let measured = platform::header_height();
            if *height.peek() != measured {
                height.set(measured);
            }
        }
    });

    use_browser_resource("header-height", move || {
        resized.send(());
        let tx = resized.tx();
        platform::on_resize(move || {
            let _ = tx.unbounded_send(());
        })
    });

    height
}
