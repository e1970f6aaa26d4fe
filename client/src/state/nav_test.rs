use super::*;
use crate::content::navigation::NAV_TREE;

fn mobile_state() -> NavState {
    let mut state = NavState::default();
    state.on_resize(375.0);
    state
}

// =============================================================
// Defaults / scroll
// =============================================================

#[test]
fn default_state_is_closed_transparent_desktop() {
    let state = NavState::default();
    assert!(!state.mobile_open);
    assert!(!state.scrolled);
    assert!(!state.solid_header());
    assert_eq!(state.viewport, Viewport::Desktop);
}

#[test]
fn scrolling_past_fifty_pixels_makes_header_solid() {
    let mut state = NavState::default();
    state.on_scroll(50.0);
    assert!(!state.scrolled);
    state.on_scroll(51.0);
    assert!(state.solid_header());
    state.on_scroll(0.0);
    assert!(!state.solid_header());
}

#[test]
fn open_dropdown_makes_header_solid() {
    let mut state = NavState::default();
    state.on_hover_enter(NAV_TREE, 0);
    assert!(state.solid_header());
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn escape_closes_open_dropdown() {
    let mut state = NavState::default();
    state.on_hover_enter(NAV_TREE, 2);
    state.on_escape();
    assert_eq!(state.dropdown, DropdownMenu::Closed);
}

#[test]
fn escape_closes_mobile_menu() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_entry_activate(NAV_TREE, 1);
    state.on_escape();
    assert!(!state.mobile_open);
    assert_eq!(state.dropdown, DropdownMenu::Closed);
}

#[test]
fn outside_click_closes_everything() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_entry_activate(NAV_TREE, 0);
    state.on_pointer_down(ClickTarget::Outside);
    assert!(!state.mobile_open);
    assert!(!state.dropdown.any_open());
}

#[test]
fn outside_click_closes_desktop_dropdown() {
    let mut state = NavState::default();
    state.on_entry_activate(NAV_TREE, 3);
    state.on_pointer_down(ClickTarget::Outside);
    assert_eq!(state.dropdown, DropdownMenu::Closed);
}

#[test]
fn clicks_inside_nav_or_on_buttons_keep_menu_open() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_pointer_down(ClickTarget::Nav);
    assert!(state.mobile_open);
    state.on_pointer_down(ClickTarget::Button);
    assert!(state.mobile_open);
}

#[test]
fn growing_to_desktop_closes_mobile_menu() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_entry_activate(NAV_TREE, 4);
    state.on_resize(1024.0);
    assert!(!state.mobile_open);
    assert!(!state.dropdown.any_open());
    assert_eq!(state.viewport, Viewport::Desktop);
}

#[test]
fn growing_to_desktop_closes_dropdown_left_behind_by_mobile_menu() {
    let mut state = NavState { dropdown: DropdownMenu::Open(2), ..mobile_state() };
    state.on_resize(1024.0);
    assert_eq!(state.dropdown, DropdownMenu::Closed);
    assert!(!state.solid_header());
}

#[test]
fn resizing_within_mobile_keeps_menu_open() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_resize(600.0);
    assert!(state.mobile_open);
}

#[test]
fn shrinking_to_mobile_keeps_menu_state() {
    let mut state = NavState::default();
    state.on_resize(500.0);
    assert_eq!(state.viewport, Viewport::Mobile);
    assert!(!state.mobile_open);
}

// =============================================================
// Activation
// =============================================================

#[test]
fn toggle_mobile_flips() {
    let mut state = mobile_state();
    state.toggle_mobile();
    assert!(state.mobile_open);
    state.toggle_mobile();
    assert!(!state.mobile_open);
}

#[test]
fn closing_mobile_menu_collapses_open_submenu() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_entry_activate(NAV_TREE, 0);
    state.toggle_mobile();
    assert!(!state.mobile_open);
    assert_eq!(state.dropdown, DropdownMenu::Closed);
    assert!(!state.solid_header());

    state.toggle_mobile();
    assert!(!state.dropdown.is_open(0));
}

#[test]
fn toggle_then_resize_to_desktop_leaves_nothing_open() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_entry_activate(NAV_TREE, 2);
    state.toggle_mobile();
    state.on_resize(1024.0);
    assert_eq!(state.dropdown, DropdownMenu::Closed);
    assert!(!state.solid_header());
}

#[test]
fn activating_entry_with_children_keeps_mobile_menu_open() {
    let mut state = mobile_state();
    state.toggle_mobile();
    assert!(state.on_entry_activate(NAV_TREE, 0));
    assert!(state.mobile_open);
    assert!(state.dropdown.is_open(0));
}

#[test]
fn activating_leaf_closes_mobile_menu() {
    const TREE: &[NavEntry] = &[NavEntry::leaf("Careers", "/careers")];
    let mut state = mobile_state();
    state.toggle_mobile();
    assert!(!state.on_entry_activate(TREE, 0));
    assert!(!state.mobile_open);
}

#[test]
fn following_submenu_link_dismisses() {
    let mut state = mobile_state();
    state.toggle_mobile();
    state.on_entry_activate(NAV_TREE, 0);
    state.on_link_followed();
    assert!(!state.mobile_open);
    assert!(!state.dropdown.any_open());
}
