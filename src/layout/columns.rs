//! Column layout detection and normalization.
//!
//! Raw bounding boxes from the layout engine are too noisy for a naive
//! x-then-y sort to get two-column reading order right. This module snaps
//! every fragment's horizontal bounds onto a canonical one- or two-column
//! grid before sorting, making column membership unambiguous for the
//! reading-order comparator. Vertical bounds are never touched.

use crate::config::ReflowConfig;
use crate::fragment::{Fragment, FragmentType};
use crate::geometry::Rect;
use crate::stats;

/// Detected page column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// One column spanning the text area
    Single,
    /// Two columns with a central gutter
    Two,
}

/// Detect whether the document is set in one or two columns.
///
/// A document is two-column when the mean width of its NarrativeText
/// fragments is smaller than the text-area width divided by
/// `config.two_column_ratio`. Documents with no NarrativeText at all are
/// treated as single-column.
pub fn detect_column_layout(
    fragments: &[Fragment],
    text_area: &Rect,
    config: &ReflowConfig,
) -> ColumnLayout {
    let widths: Vec<f64> = fragments
        .iter()
        .filter(|f| f.kind == FragmentType::NarrativeText)
        .map(|f| f.bounds.width() as f64)
        .collect();
    if widths.is_empty() {
        return ColumnLayout::Single;
    }

    if stats::mean(&widths) < text_area.width() as f64 / config.two_column_ratio {
        ColumnLayout::Two
    } else {
        ColumnLayout::Single
    }
}

/// Snap every fragment's horizontal bounds onto the canonical column grid.
///
/// Returns a new fragment list; the input is left untouched. In
/// single-column layout all fragments span the inset text area. In
/// two-column layout each fragment is pinned to the left or right column
/// slot depending on which side of the text area's horizontal midpoint its
/// right edge falls; the slot width is the text-area width divided by
/// `config.column_slot_divisor`, leaving a gutter between slots.
///
/// The snap converges: applying it to an already-normalized list
/// reproduces identical bounds.
pub fn normalize_columns(
    fragments: &[Fragment],
    text_area: &Rect,
    layout: ColumnLayout,
    config: &ReflowConfig,
) -> Vec<Fragment> {
    let inset = config.column_inset;

    match layout {
        ColumnLayout::Single => fragments
            .iter()
            .map(|f| with_horizontal_span(f, text_area.left() + inset, text_area.right() - inset))
            .collect(),
        ColumnLayout::Two => {
            let slot = text_area.width() as f64 / config.column_slot_divisor;
            let midpoint = text_area.left() as f64 + text_area.width() as f64 / 2.0;

            fragments
                .iter()
                .map(|f| {
                    if (f.bounds.right() as f64) < midpoint {
                        let right = (text_area.left() as f64 + slot).round() as i32 - inset;
                        with_horizontal_span(f, text_area.left() + inset, right)
                    } else {
                        let left = (text_area.right() as f64 - slot).round() as i32 - inset;
                        with_horizontal_span(f, left, text_area.right() - inset)
                    }
                })
                .collect()
        },
    }
}

/// Copy a fragment with its horizontal bounds replaced.
fn with_horizontal_span(fragment: &Fragment, left: i32, right: i32) -> Fragment {
    let mut snapped = fragment.clone();
    snapped.bounds.top_left.x = left;
    snapped.bounds.bottom_left.x = left;
    snapped.bounds.top_right.x = right;
    snapped.bounds.bottom_right.x = right;
    snapped
}
