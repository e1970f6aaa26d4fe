#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_ms_is_zero_outside_browser() {
    assert_eq!(now_ms(), 0.0);
}

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!((2024..3000).contains(&year), "unexpected year {year}");
}
