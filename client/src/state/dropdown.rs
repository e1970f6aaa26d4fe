//! Navigation dropdown state machine.
//!
//! DESIGN
//! ======
//! The menu is either `Closed` or `Open(entry)` where `entry` is the index of a
//! top-level `NavEntry`. Holding a single `Option`-like state makes "at most one
//! entry open" structural rather than something each handler has to maintain.
//! Only entries with children can be opened; leaves are plain links.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::content::navigation::NavEntry;

/// Width below which the layout switches to the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Index of a top-level entry in the navigation tree.
pub type EntryId = usize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    #[must_use]
    pub fn from_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }

    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownMenu {
    #[default]
    Closed,
    Open(EntryId),
}

impl DropdownMenu {
    #[must_use]
    pub fn is_open(self, entry: EntryId) -> bool {
        self == Self::Open(entry)
    }

    #[must_use]
    pub fn any_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Pointer entered a top-level entry. Desktop only.
    pub fn hover_enter(&mut self, tree: &[NavEntry], entry: EntryId, viewport: Viewport) {
        if viewport.is_mobile() {
            return;
        }
        *self = if opens_submenu(tree, entry) { Self::Open(entry) } else { Self::Closed };
    }

    /// Pointer left a top-level entry. Desktop only.
    pub fn hover_leave(&mut self, viewport: Viewport) {
        if viewport.is_mobile() {
            return;
        }
        *self = Self::Closed;
    }

    /// Tap or click on a top-level entry.
    ///
    /// Returns `true` when the activation was consumed by the menu (the entry
    /// has a submenu) and `false` when the caller should navigate normally.
    pub fn tap(&mut self, tree: &[NavEntry], entry: EntryId) -> bool {
        if !opens_submenu(tree, entry) {
            *self = Self::Closed;
            return false;
        }
        *self = if self.is_open(entry) { Self::Closed } else { Self::Open(entry) };
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

fn opens_submenu(tree: &[NavEntry], entry: EntryId) -> bool {
    tree.get(entry).is_some_and(NavEntry::has_children)
}
