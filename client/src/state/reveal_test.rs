use super::*;

// =============================================================
// RevealLatch
// =============================================================

#[test]
fn latch_starts_hidden_with_default_threshold() {
    let latch = RevealLatch::default();
    assert!(!latch.is_revealed());
    assert_eq!(latch.threshold(), DEFAULT_THRESHOLD);
}

#[test]
fn latch_ignores_ratios_below_threshold() {
    let mut latch = RevealLatch::default();
    assert!(!latch.observe(0.0));
    assert!(!latch.observe(0.05));
    assert!(!latch.is_revealed());
}

#[test]
fn latch_flips_at_threshold() {
    let mut latch = RevealLatch::default();
    assert!(latch.observe(0.1));
    assert!(latch.is_revealed());
}

#[test]
fn latch_fires_at_most_once() {
    let mut latch = RevealLatch::default();
    assert!(latch.observe(0.5));
    assert!(!latch.observe(1.0));
    assert!(!latch.observe(0.8));
}

#[test]
fn latch_never_resets_after_scrolling_away() {
    let mut latch = RevealLatch::default();
    latch.observe(0.6);
    latch.observe(0.0);
    assert!(latch.is_revealed());
}

#[test]
fn zero_threshold_still_needs_some_visibility() {
    let mut latch = RevealLatch::new(0.0);
    assert!(!latch.observe(0.0));
    assert!(latch.observe(0.01));
}

#[test]
fn threshold_is_clamped_to_unit_range() {
    assert_eq!(RevealLatch::new(2.0).threshold(), 1.0);
    assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
}

#[test]
fn independent_latches_do_not_share_state() {
    let mut a = RevealLatch::default();
    let b = RevealLatch::default();
    a.observe(1.0);
    assert!(a.is_revealed());
    assert!(!b.is_revealed());
}

// =============================================================
// StaggeredReveal
// =============================================================

const CONTACT_STAGES: &[u32] = &[0, 300, 600, 900];

#[test]
fn stagger_reveals_zero_delay_stage_immediately() {
    let mut reveal = StaggeredReveal::new(CONTACT_STAGES);
    let pending = reveal.observe(0.2);
    assert!(reveal.is_stage_revealed(0));
    assert!(!reveal.is_stage_revealed(1));
    assert_eq!(pending, vec![(1, 300), (2, 600), (3, 900)]);
}

#[test]
fn stagger_schedules_nothing_before_threshold() {
    let mut reveal = StaggeredReveal::new(CONTACT_STAGES);
    assert!(reveal.observe(0.01).is_empty());
    assert!(!reveal.is_stage_revealed(0));
}

#[test]
fn stagger_schedules_only_once() {
    let mut reveal = StaggeredReveal::new(CONTACT_STAGES);
    assert_eq!(reveal.observe(1.0).len(), 3);
    assert!(reveal.observe(1.0).is_empty());
}

#[test]
fn reveal_stage_before_latch_is_ignored() {
    let mut reveal = StaggeredReveal::new(CONTACT_STAGES);
    reveal.reveal_stage(2);
    assert!(!reveal.is_stage_revealed(2));
}

#[test]
fn reveal_stage_after_latch_is_monotonic() {
    let mut reveal = StaggeredReveal::new(CONTACT_STAGES);
    reveal.observe(1.0);
    reveal.reveal_stage(2);
    reveal.observe(0.0);
    assert!(reveal.is_stage_revealed(2));
    assert!(!reveal.is_stage_revealed(3));
}

#[test]
fn unknown_stage_is_hidden_and_ignored() {
    let mut reveal = StaggeredReveal::new(CONTACT_STAGES);
    reveal.observe(1.0);
    reveal.reveal_stage(17);
    assert!(!reveal.is_stage_revealed(17));
    assert!((0..CONTACT_STAGES.len()).all(|i| reveal.is_stage_revealed(i) == (i == 0)));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn cascade_delay_steps_from_base() {
    assert_eq!(cascade_delay_ms(200, 100, 0), 200);
    assert_eq!(cascade_delay_ms(200, 100, 2), 400);
    assert_eq!(cascade_delay_ms(0, 100, 3), 300);
}

#[test]
fn cascade_delay_saturates() {
    assert_eq!(cascade_delay_ms(u32::MAX, 100, 5), u32::MAX);
}

#[test]
fn reveal_class_marks_visible_elements() {
    assert_eq!(reveal_class(false), "reveal");
    assert_eq!(reveal_class(true), "reveal reveal--visible");
}
