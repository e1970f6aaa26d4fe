//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clocks, animation frames,
//! intersection observers, window geometry) from page and component logic.
//! Every helper compiles to a no-op outside the `hydrate` feature so SSR stays
//! deterministic.

pub mod clock;
pub mod frame_loop;
pub mod viewport;
