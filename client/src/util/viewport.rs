//! Window geometry reads and one-shot intersection observation.
//!
//! TRADE-OFFS
//! ==========
//! These helpers are browser-only. Outside `hydrate` they return neutral values
//! (top of page, desktop width, nothing observed) so server rendering produces
//! the initial hidden/closed markup that hydration then animates.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::state::nav::ClickTarget;

#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Width reported when no window is available.
pub const FALLBACK_WIDTH_PX: f64 = 1280.0;

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
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

/// Current layout viewport width in CSS pixels.
pub fn inner_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_WIDTH_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_WIDTH_PX
    }
}

/// Classify where a pointer press landed for navigation dismissal.
#[cfg(feature = "hydrate")]
pub fn classify_click(target: Option<web_sys::EventTarget>) -> ClickTarget {
    let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return ClickTarget::Outside;
    };
    classify_matches(
        element.closest("nav").ok().flatten().is_some(),
        element.closest("button").ok().flatten().is_some(),
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_matches(in_nav: bool, in_button: bool) -> ClickTarget {
    if in_nav {
        ClickTarget::Nav
    } else if in_button {
        ClickTarget::Button
    } else {
        ClickTarget::Outside
    }
}

/// Live intersection subscription. Disconnects when dropped.
pub struct VisibilityObserver {
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Watch `element` and call `on_ratio(visible_ratio)` for each intersection
/// change at `threshold`. When the callback returns `true` the element is
/// unobserved for good, which is how a reveal latch unsubscribes after its
/// first flip.
///
/// If the browser cannot create an observer the callback is invoked once with
/// a full ratio so gated content is never left hidden, and `None` is returned.
#[cfg(feature = "hydrate")]
pub fn on_first_visible(
    element: &web_sys::Element,
    threshold: f64,
    on_ratio: impl FnMut(f64) -> bool + 'static,
) -> Option<VisibilityObserver> {
    let on_ratio = Rc::new(RefCell::new(on_ratio));
    let on_ratio_cb = Rc::clone(&on_ratio);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                if (on_ratio_cb.borrow_mut())(ratio) {
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(threshold));
    let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        leptos::logging::warn!("intersection observer unavailable; revealing immediately");
        (on_ratio.borrow_mut())(1.0);
        return None;
    };
    observer.observe(element);
    Some(VisibilityObserver { observer, _callback: callback })
}
