//! Per-frame callback loop on `requestAnimationFrame`.
//!
//! The loop reschedules itself after every frame until cancelled. The handle
//! only carries an atomic flag, so it is `Send + Sync` and can be moved into
//! `on_cleanup`. After `cancel`, the next frame that was already requested
//! sees the flag, skips the callback, and drops the JS closure.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[derive(Clone, Debug)]
pub struct FrameLoop {
    alive: Arc<AtomicBool>,
}

#[cfg(feature = "hydrate")]
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

impl FrameLoop {
    /// Start calling `on_frame(timestamp_ms)` once per display frame.
    ///
    /// Outside the browser the loop is created already stopped.
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Self {
        let alive = Arc::new(AtomicBool::new(true));

        #[cfg(feature = "hydrate")]
        {
            let mut on_frame = on_frame;
            let slot: FrameSlot = Rc::new(RefCell::new(None));
            let slot_for_cb = Rc::clone(&slot);
            let alive_for_cb = Arc::clone(&alive);
            let cb = Closure::wrap(Box::new(move |ts: f64| {
                if !alive_for_cb.load(Ordering::Relaxed) {
                    slot_for_cb.borrow_mut().take();
                    return;
                }
                on_frame(ts);
                if !request_frame(&slot_for_cb) {
                    alive_for_cb.store(false, Ordering::Relaxed);
                    slot_for_cb.borrow_mut().take();
                }
            }) as Box<dyn FnMut(f64)>);
            *slot.borrow_mut() = Some(cb);
            if !request_frame(&slot) {
                alive.store(false, Ordering::Relaxed);
                slot.borrow_mut().take();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_frame;
            alive.store(false, Ordering::Relaxed);
        }

        Self { alive }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

#[cfg(feature = "hydrate")]
fn request_frame(slot: &FrameSlot) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let borrowed = slot.borrow();
    let Some(cb) = borrowed.as_ref() else {
        return false;
    };
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
}
