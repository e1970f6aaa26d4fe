//! Monotonic and calendar time reads.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds on the browser's monotonic clock (`performance.now()`).
///
/// This is the same clock `requestAnimationFrame` timestamps use, so values
/// from both can be subtracted. Returns `0.0` outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current calendar year (UTC), for the copyright line.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
