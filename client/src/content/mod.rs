//! Static site content authored at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers in `state` decide *when* things are shown; this module owns
//! *what* is shown. Every record here is immutable `&'static` data so pages
//! can borrow it freely without cloning.

pub mod company;
pub mod navigation;
pub mod reports;
pub mod slides;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// A labelled link to an internal route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub href: &'static str,
}

/// Lowercase a label and join whitespace-separated words with `-`.
///
/// Used for footer link paths (`"News & Reports"` -> `"news-&-reports"`).
#[must_use]
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
