//! Deferred callbacks on the browser event loop.
//!
//! Flows simulate processing latency and delay redirects so notifications
//! stay readable. Outside the browser nothing is scheduled: SSR renders the
//! initial view once and never runs event handlers.

/// Run `f` once after `delay_ms` milliseconds.
pub fn after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}
