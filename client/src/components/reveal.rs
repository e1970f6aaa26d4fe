//! Reveal-on-scroll wiring for section components.
//!
//! Components keep the latch in a signal and hand the DOM side to
//! [`crate::util::viewport::on_first_visible`]. The observer and any pending
//! stage timers live in local stored values and are dropped on unmount.

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::reveal::{RevealLatch, StaggeredReveal};

/// One-shot reveal flag for the container behind `target`.
pub fn use_reveal(target: NodeRef<Div>) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());
    let threshold = latch.with_untracked(RevealLatch::threshold);
    watch_first_visible(target, threshold, move |ratio| {
        latch.try_update(|l| l.observe(ratio)).unwrap_or(true)
    });
    Signal::derive(move || latch.get().is_revealed())
}

/// Staggered reveal for the container behind `target`.
///
/// Stage `i` becomes visible `delays_ms[i]` after the region first shows.
pub fn use_staggered_reveal(target: NodeRef<Div>, delays_ms: &'static [u32]) -> RwSignal<StaggeredReveal> {
    let stagger = RwSignal::new(StaggeredReveal::new(delays_ms));
    let threshold = stagger.with_untracked(|s| s.latch().threshold());

    #[cfg(feature = "hydrate")]
    {
        let timers = StoredValue::new_local(Vec::<gloo_timers::callback::Timeout>::new());
        watch_first_visible(target, threshold, move |ratio| {
            let Some(pending) = stagger.try_update(|s| s.observe(ratio)) else {
                return true;
            };
            for (stage, delay) in pending {
                let timeout = gloo_timers::callback::Timeout::new(delay, move || {
                    let _ = stagger.try_update(|s| s.reveal_stage(stage));
                });
                timers.update_value(|t| t.push(timeout));
            }
            stagger.with_untracked(|s| s.latch().is_revealed())
        });
        on_cleanup(move || {
            let _ = timers.try_update_value(Vec::clear);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, threshold);
    }

    stagger
}

/// Attach a one-shot visibility observer once `target` mounts.
///
/// `on_ratio` returns `true` when it is done observing.
fn watch_first_visible(target: NodeRef<Div>, threshold: f64, on_ratio: impl FnMut(f64) -> bool + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<crate::util::viewport::VisibilityObserver>);
        let mut on_ratio = Some(on_ratio);
        Effect::new(move || {
            let Some(element) = target.get() else {
                return;
            };
            let Some(callback) = on_ratio.take() else {
                return;
            };
            observer.set_value(crate::util::viewport::on_first_visible(&element, threshold, callback));
        });
        on_cleanup(move || {
            let _ = observer.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, threshold, on_ratio);
    }
}
