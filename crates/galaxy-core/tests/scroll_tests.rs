// Host-side tests for scroll coupling.

use galaxy_core::{page_progress, ProgressSource, ScrollTracker};

#[test]
fn page_progress_spans_scrollable_extent() {
    assert_eq!(page_progress(0.0, 5000.0, 1000.0), 0.0);
    assert_eq!(page_progress(4000.0, 5000.0, 1000.0), 1.0);
    assert!((page_progress(1000.0, 5000.0, 1000.0) - 0.25).abs() < 1e-6);
    // overscroll clamps
    assert_eq!(page_progress(4500.0, 5000.0, 1000.0), 1.0);
    assert_eq!(page_progress(-20.0, 5000.0, 1000.0), 0.0);
}

#[test]
fn page_progress_is_zero_when_page_cannot_scroll() {
    assert_eq!(page_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(page_progress(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn tracker_is_quiet_until_target_changes() {
    let mut t = ScrollTracker::new(1.0, 0.3);
    assert_eq!(t.progress(), 0.3);
    assert_eq!(t.advance(0.016), None);
    t.set_target(0.3);
    assert_eq!(t.advance(0.016), None);
}

#[test]
fn tracker_converges_monotonically_within_scrub_time() {
    let mut t = ScrollTracker::new(1.0, 0.0);
    t.set_target(1.0);
    let mut prev = 0.0;
    let mut elapsed = 0.0;
    while let Some(p) = t.advance(1.0 / 60.0) {
        assert!(p >= prev && p <= 1.0);
        prev = p;
        elapsed += 1.0 / 60.0;
        assert!(elapsed < 5.0, "did not settle");
    }
    assert_eq!(t.progress(), 1.0);
    // after one scrub period the applied value is nearly there
    let mut t = ScrollTracker::new(1.0, 0.0);
    t.set_target(1.0);
    for _ in 0..60 {
        t.advance(1.0 / 60.0);
    }
    assert!(t.progress() > 0.97, "got {}", t.progress());
}

#[test]
fn zero_scrub_applies_immediately() {
    let mut t = ScrollTracker::new(0.0, 0.0);
    t.set_target(0.6);
    assert_eq!(t.advance(0.016), Some(0.6));
    assert_eq!(t.advance(0.016), None);
}

#[test]
fn targets_are_clamped_and_settle_jumps() {
    let mut t = ScrollTracker::new(1.0, 0.0);
    t.set_target(4.0);
    assert_eq!(t.target(), 1.0);
    assert_eq!(t.settle(), 1.0);
    assert_eq!(t.advance(0.016), None);
}

#[test]
fn scalar_progress_source_clamps() {
    assert_eq!(1.7f32.progress(), 1.0);
    assert_eq!((-0.2f32).progress(), 0.0);
}
