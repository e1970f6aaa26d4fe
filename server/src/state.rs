//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional contact mailer and the submission rate limiter. Both are
//! `Arc`-backed, so cloning per request is cheap.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::services::contact::ContactMailer;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Contact relay. `None` if the Resend env vars are not configured.
    pub mailer: Option<Arc<dyn ContactMailer>>,
    /// In-memory rate limiter for contact submissions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn ContactMailer>>, rate_limiter: RateLimiter) -> Self {
        Self { mailer, rate_limiter }
    }

    #[must_use]
    pub fn relay_enabled(&self) -> bool {
        self.mailer.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
