//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The navbar and footer are shared layout rendered by `app`.

pub mod contact;
pub mod home;
