//! Hero carousel timing.
//!
//! DESIGN
//! ======
//! Elapsed time is always derived from timestamp deltas (`now - slide_started_ms`)
//! read at each frame callback, never from a count of ticks. A tab that was
//! throttled or suspended therefore catches up on its first frame back instead of
//! drifting. At most one advance happens per tick, so a long suspension shows the
//! next slide rather than skipping several.
//!
//! Timestamps are milliseconds on whatever monotonic clock the caller uses
//! (`performance.now()` in the browser).

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
    #[error("slide {index} is out of range (have {len})")]
    OutOfRange { index: usize, len: usize },
}

/// What a frame tick did to the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Still on the same slide; progress moved to the given percentage.
    Progressed(f64),
    /// The slide interval elapsed and the carousel moved to this index.
    Advanced(usize),
}

/// Where a slide sits relative to the current one, for enter/exit transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Before,
    Current,
    After,
}

impl SlidePosition {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Before => "hero__content--before",
            Self::Current => "hero__content--current",
            Self::After => "hero__content--after",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideTimer {
    len: usize,
    duration_ms: f64,
    current: usize,
    slide_started_ms: f64,
    progress: f64,
}

impl SlideTimer {
    /// Start a timer over `len` slides at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] when `len` is zero.
    pub fn new(len: usize, duration_ms: f64, now_ms: f64) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, duration_ms: duration_ms.max(1.0), current: 0, slide_started_ms: now_ms, progress: 0.0 })
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Progress (0..=100) of `index`; always 0 for anything but the current slide.
    #[must_use]
    pub fn progress_of(&self, index: usize) -> f64 {
        if index == self.current { self.progress } else { 0.0 }
    }

    #[must_use]
    pub fn position_of(&self, index: usize) -> SlidePosition {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => SlidePosition::Before,
            std::cmp::Ordering::Equal => SlidePosition::Current,
            std::cmp::Ordering::Greater => SlidePosition::After,
        }
    }

    /// Recompute progress from the clock and advance when the interval is up.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let elapsed = (now_ms - self.slide_started_ms).max(0.0);
        if elapsed >= self.duration_ms {
            let next = (self.current + 1) % self.len;
            self.restart_at(next, now_ms);
            return Tick::Advanced(next);
        }
        self.progress = (elapsed / self.duration_ms * 100.0).min(100.0);
        Tick::Progressed(self.progress)
    }

    /// Jump straight to `index` and restart its interval.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OutOfRange`] when `index >= len`.
    pub fn go_to(&mut self, index: usize, now_ms: f64) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange { index, len: self.len });
        }
        self.restart_at(index, now_ms);
        Ok(())
    }

    fn restart_at(&mut self, index: usize, now_ms: f64) {
        self.current = index;
        self.slide_started_ms = now_ms;
        self.progress = 0.0;
    }
}
