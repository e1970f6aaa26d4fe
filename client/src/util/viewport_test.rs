use super::*;

#[test]
fn nav_region_wins_over_button() {
    assert_eq!(classify_matches(true, true), ClickTarget::Nav);
}

#[test]
fn button_outside_nav_is_not_outside() {
    assert_eq!(classify_matches(false, true), ClickTarget::Button);
}

#[test]
fn plain_page_click_is_outside() {
    assert_eq!(classify_matches(false, false), ClickTarget::Outside);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn geometry_defaults_outside_browser() {
    assert_eq!(scroll_y(), 0.0);
    assert_eq!(inner_width(), FALLBACK_WIDTH_PX);
}
