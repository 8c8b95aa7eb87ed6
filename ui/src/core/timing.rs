//! Timer helpers shared by components.
//!
//! Browser builds use `gloo-timers`; native builds (unit tests, tooling) use
//! tokio so the same async code runs everywhere.

/// Resolve after roughly `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn sleep_waits_requested_time() {
        let before = tokio::time::Instant::now();
        sleep_ms(3200).await;
        assert!(before.elapsed() >= std::time::Duration::from_millis(3200));
    }
}
