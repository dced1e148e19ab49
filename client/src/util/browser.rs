//! Thin wrappers over `window` APIs used by page chrome and flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper is a no-op (or returns a neutral value) outside hydrate builds
//! so components can call them unconditionally during SSR.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Navigate to `path`, keeping the current page in history.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("navigation to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Navigate without adding a history entry, so Back cannot return to the
/// page being left.
pub fn replace_location(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(path) {
                log::error!("location.replace({path}) failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Vertical scroll offset of the window.
pub fn scroll_top() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `offsetTop` of the element with `id`.
pub fn element_offset_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(f64::from(element.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Freeze or restore page scrolling behind an overlay.
pub fn lock_body_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("failed to toggle body scroll lock: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Short haptic pulse on devices that support it.
pub fn vibrate(duration_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().vibrate_with_duration(duration_ms);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration_ms;
    }
}

/// Write `text` to the clipboard. Returns whether the write was accepted.
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("clipboard write rejected: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
