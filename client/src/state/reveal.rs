//! One-shot scroll reveal latches and staggered reveal chains.
//!
//! A latch flips from hidden to revealed the first time its region is observed
//! at or above the visibility threshold, and never flips back. Staggered reveals
//! hang a fixed chain of delays off one latch: stage `i` becomes visible
//! `delays_ms[i]` after the latch first fires.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of the region that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealLatch {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), revealed: false }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection observation (visible area ratio, 0..=1).
    ///
    /// Returns `true` only on the observation that flips the latch; the caller
    /// should stop observing at that point.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio <= 0.0 || visible_ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// A latch plus a static chain of per-stage delays.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggeredReveal {
    latch: RevealLatch,
    delays_ms: &'static [u32],
    stages: Vec<bool>,
}

impl StaggeredReveal {
    #[must_use]
    pub fn new(delays_ms: &'static [u32]) -> Self {
        Self { latch: RevealLatch::default(), delays_ms, stages: vec![false; delays_ms.len()] }
    }

    #[must_use]
    pub fn latch(&self) -> &RevealLatch {
        &self.latch
    }

    /// Feed an observation to the underlying latch.
    ///
    /// On the flip, returns the `(stage, delay_ms)` pairs the caller must
    /// schedule. Stages with a zero delay are revealed immediately and are not
    /// returned. Any other observation returns an empty list.
    pub fn observe(&mut self, visible_ratio: f64) -> Vec<(usize, u32)> {
        if !self.latch.observe(visible_ratio) {
            return Vec::new();
        }
        let mut pending = Vec::new();
        for (stage, &delay) in self.delays_ms.iter().enumerate() {
            if delay == 0 {
                self.stages[stage] = true;
            } else {
                pending.push((stage, delay));
            }
        }
        pending
    }

    /// Mark `stage` visible once its delay has elapsed.
    ///
    /// Ignored before the latch has fired and for unknown stages.
    pub fn reveal_stage(&mut self, stage: usize) {
        if !self.latch.is_revealed() {
            return;
        }
        if let Some(slot) = self.stages.get_mut(stage) {
            *slot = true;
        }
    }

    #[must_use]
    pub fn is_stage_revealed(&self, stage: usize) -> bool {
        self.stages.get(stage).copied().unwrap_or(false)
    }
}

/// CSS transition delay for the `index`-th item of a cascading group.
#[must_use]
pub fn cascade_delay_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

/// Class modifier for a reveal-gated element.
#[must_use]
pub const fn reveal_class(revealed: bool) -> &'static str {
    if revealed { "reveal reveal--visible" } else { "reveal" }
}
