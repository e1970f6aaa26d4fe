//! Navigation bar state: mobile menu, scroll shading, and the dropdown.
//!
//! Dismissal rules (outside click, Escape, growing into the desktop layout)
//! close the mobile menu and any open dropdown together, so the header can
//! never show a submenu for a panel that is no longer on screen.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::dropdown::{DropdownMenu, EntryId, Viewport};
use crate::content::navigation::NavEntry;

/// Scroll offset past which the header switches to its solid style.
pub const SCROLL_SOLID_PX: f64 = 50.0;

/// Where a pointer press landed, relative to the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the `<nav>` region.
    Nav,
    /// On a button (including the mobile menu toggle).
    Button,
    Outside,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_open: bool,
    pub scrolled: bool,
    pub viewport: Viewport,
    pub dropdown: DropdownMenu,
}

impl NavState {
    /// Solid header whenever the page is scrolled or a dropdown is showing.
    #[must_use]
    pub fn solid_header(&self) -> bool {
        self.scrolled || self.dropdown.any_open()
    }

    /// Flip the mobile menu. Closing it also collapses any open submenu.
    pub fn toggle_mobile(&mut self) {
        if self.mobile_open {
            self.dismiss();
        } else {
            self.mobile_open = true;
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_SOLID_PX;
    }

    /// Window resized. Entering the desktop layout closes the mobile menu and
    /// any dropdown opened from it.
    pub fn on_resize(&mut self, width_px: f64) {
        let next = Viewport::from_width(width_px);
        let grew_to_desktop = self.viewport.is_mobile() && !next.is_mobile();
        self.viewport = next;
        if grew_to_desktop && (self.mobile_open || self.dropdown.any_open()) {
            self.dismiss();
        }
    }

    pub fn on_hover_enter(&mut self, tree: &[NavEntry], entry: EntryId) {
        self.dropdown.hover_enter(tree, entry, self.viewport);
    }

    pub fn on_hover_leave(&mut self) {
        self.dropdown.hover_leave(self.viewport);
    }

    /// Activate a top-level entry. Returns `false` when the caller should
    /// follow the link; following a link from the mobile menu closes it.
    pub fn on_entry_activate(&mut self, tree: &[NavEntry], entry: EntryId) -> bool {
        let consumed = self.dropdown.tap(tree, entry);
        if !consumed {
            self.mobile_open = false;
        }
        consumed
    }

    /// A submenu link was followed.
    pub fn on_link_followed(&mut self) {
        self.dismiss();
    }

    pub fn on_pointer_down(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside && (self.mobile_open || self.dropdown.any_open()) {
            self.dismiss();
        }
    }

    pub fn on_escape(&mut self) {
        if self.mobile_open || self.dropdown.any_open() {
            self.dismiss();
        }
    }

    fn dismiss(&mut self) {
        self.mobile_open = false;
        self.dropdown.close();
    }
}
