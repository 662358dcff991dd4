//! Property and scenario tests for the geometric primitives.

use std::cmp::Ordering;

use proptest::prelude::*;

use paper_reflow::config::ReflowConfig;
use paper_reflow::fragment::{Fragment, FragmentType};
use paper_reflow::geometry::Rect;
use paper_reflow::layout::columns::{normalize_columns, ColumnLayout};
use paper_reflow::lexicon::BuiltinLexicon;

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_intersects_scenarios() {
    let a = Rect::from_edges(0, 0, 10, 10);
    let b = Rect::from_edges(5, 5, 15, 15);
    let c = Rect::from_edges(11, 11, 20, 20);

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(!c.intersects(&a));
    assert!(b.intersects(&c));
    assert!(c.intersects(&b));
}

#[test]
fn test_reading_order_matches_column_layout() {
    // A fragment low in the left column still precedes one high in the
    // right column.
    let left_low = Rect::from_edges(60, 650, 267, 700);
    let right_high = Rect::from_edges(313, 90, 540, 120);
    assert_eq!(left_low.reading_order(&right_high), Ordering::Less);
    assert_eq!(right_high.reading_order(&left_low), Ordering::Greater);
}

// ============================================================================
// Properties
// ============================================================================

fn narrative(left: i32, top: i32, right: i32, bottom: i32) -> Fragment {
    Fragment::new(
        FragmentType::NarrativeText,
        "body",
        1,
        Rect::from_edges(left, top, right, bottom),
        &BuiltinLexicon,
    )
}

proptest! {
    #[test]
    fn prop_intersects_is_symmetric(
        ax in 0..600i32, aw in 1..300i32, ay in 0..800i32, ah in 1..300i32,
        bx in 0..600i32, bw in 1..300i32, by in 0..800i32, bh in 1..300i32,
    ) {
        let a = Rect::from_edges(ax, ay, ax + aw, ay + ah);
        let b = Rect::from_edges(bx, by, bx + bw, by + bh);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn prop_reading_order_total_for_disjoint_spans(
        ax in 0..300i32, aw in 1..150i32, gap in 0..150i32, bw in 1..150i32,
        ay in 0..800i32, ah in 1..150i32, by in 0..800i32, bh in 1..150i32,
    ) {
        let a = Rect::from_edges(ax, ay, ax + aw, ay + ah);
        let b_left = ax + aw + gap;
        let b = Rect::from_edges(b_left, by, b_left + bw, by + bh);

        // Exactly one direction holds, and it is left-to-right.
        prop_assert_eq!(a.reading_order(&b), Ordering::Less);
        prop_assert_eq!(b.reading_order(&a), Ordering::Greater);
    }

    #[test]
    fn prop_column_snap_is_idempotent(
        bounds in proptest::collection::vec(
            (0..600i32, 1..400i32, 0..700i32, 1..100i32),
            1..20,
        ),
        two_column in any::<bool>(),
    ) {
        let area = Rect::from_edges(50, 80, 550, 720);
        let config = ReflowConfig::default();
        let layout = if two_column { ColumnLayout::Two } else { ColumnLayout::Single };

        let fragments: Vec<Fragment> = bounds
            .iter()
            .map(|&(left, width, top, height)| {
                narrative(left, top, left + width, top + height)
            })
            .collect();

        let once = normalize_columns(&fragments, &area, layout, &config);
        let twice = normalize_columns(&once, &area, layout, &config);
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert_eq!(a.bounds, b.bounds);
        }
    }
}
