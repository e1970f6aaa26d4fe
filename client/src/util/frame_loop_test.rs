#![cfg(not(feature = "hydrate"))]

use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn loop_outside_browser_never_runs_callback() {
    let calls = Rc::new(Cell::new(0));
    let calls_cb = Rc::clone(&calls);
    let frames = FrameLoop::start(move |_| calls_cb.set(calls_cb.get() + 1));
    assert!(!frames.is_running());
    assert_eq!(calls.get(), 0);
}

#[test]
fn cancel_is_idempotent_and_shared_between_clones() {
    let frames = FrameLoop::start(|_| {});
    let clone = frames.clone();
    frames.cancel();
    frames.cancel();
    assert!(!clone.is_running());
}
