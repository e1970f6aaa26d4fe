//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and page sections. Each one owns its
//! controller state in local signals; static copy comes from `content`.

pub mod about_us;
pub mod banner;
pub mod footer;
pub mod navbar;
pub mod news_reports;
pub(crate) mod reveal;
