//! Classification filters over positioned fragments.
//!
//! Pure, order-independent predicates that decide whether a fragment is
//! genuine body text or something the text-building pass must skip: a
//! caption, part of a table, a mis-tagged title outlier, or content
//! outside the estimated text area. Each predicate takes the fragment plus
//! the full, unfiltered fragment list of the document.

use lazy_static::lazy_static;
use regex::Regex;

use crate::fragment::{Fragment, FragmentType};
use crate::geometry::Rect;
use crate::stats;

lazy_static! {
    /// Regex matching a references heading ("Reference"/"References").
    static ref RE_REFERENCES: Regex = Regex::new(r"(?i)references?$").unwrap();
}

/// Check that a fragment lies inside the estimated text area.
///
/// The fraction of the fragment's own area covered by the exact (clamped)
/// intersection with `text_area` must exceed `threshold`. Zero-area
/// fragments are never in the text area.
pub fn in_text_area(fragment: &Fragment, text_area: &Rect, threshold: f64) -> bool {
    let own_area = fragment.bounds.area();
    if own_area <= 0 {
        return false;
    }
    fragment.bounds.overlap_area(text_area) as f64 / own_area as f64 > threshold
}

/// Check whether a fragment is, or overlaps, a table on its page.
pub fn is_table_member(fragment: &Fragment, fragments: &[Fragment]) -> bool {
    if fragment.kind == FragmentType::Table {
        return true;
    }
    fragments
        .iter()
        .filter(|f| f.kind == FragmentType::Table && f.page_number == fragment.page_number)
        .any(|table| fragment.bounds.intersects(&table.bounds))
}

/// Check whether a fragment is a figure caption.
///
/// True when the fragment's own type is FigureCaption, or when a same-page
/// Image exists such that the fragment overlaps it, or sits within `gap`
/// pixels directly below its bottom edge, and the fragment's text starts
/// with "fig" (case-insensitive).
pub fn is_figure_caption(fragment: &Fragment, fragments: &[Fragment], gap: i32) -> bool {
    if fragment.kind == FragmentType::FigureCaption {
        return true;
    }

    let captionish = fragment.text.to_lowercase().starts_with("fig");
    for image in fragments
        .iter()
        .filter(|f| f.kind == FragmentType::Image && f.page_number == fragment.page_number)
    {
        if captionish && fragment.bounds.intersects(&image.bounds) {
            return true;
        }
        let y_gap = fragment.bounds.top() - image.bounds.bottom();
        if captionish && y_gap > 0 && y_gap < gap {
            return true;
        }
    }
    false
}

/// Check whether a fragment is a table caption.
///
/// Symmetric to [`is_figure_caption`] against Table fragments: the text
/// must start with "table" and the caption either overlaps the table or
/// sits within `gap` pixels directly above its top edge.
pub fn is_table_caption(fragment: &Fragment, fragments: &[Fragment], gap: i32) -> bool {
    // TODO: introduce a table-caption type at the engine boundary; until
    // then this mirrors the figure-caption self check.
    if fragment.kind == FragmentType::FigureCaption {
        return true;
    }

    let captionish = fragment.text.to_lowercase().starts_with("table");
    for table in fragments
        .iter()
        .filter(|f| f.kind == FragmentType::Table && f.page_number == fragment.page_number)
    {
        if captionish && fragment.bounds.intersects(&table.bounds) {
            return true;
        }
        let y_gap = table.bounds.top() - fragment.bounds.bottom();
        if captionish && y_gap > 0 && y_gap < gap {
            return true;
        }
    }
    false
}

/// Reject Title fragments whose height is an outlier.
///
/// A Title is plausible when its height lies within three standard
/// deviations of the mean height of all Title fragments in the document.
/// Rejects mis-tagged running headers and footers that the engine labels
/// Title.
pub fn is_plausible_title(fragment: &Fragment, fragments: &[Fragment]) -> bool {
    let heights: Vec<f64> = fragments
        .iter()
        .filter(|f| f.kind == FragmentType::Title)
        .map(|f| f.bounds.height() as f64)
        .collect();
    if heights.is_empty() {
        return false;
    }

    let mean = stats::mean(&heights);
    let spread = 3.0 * stats::std_dev(&heights);
    let height = fragment.bounds.height() as f64;
    mean - spread <= height && height <= mean + spread
}

/// Detect the references heading that terminates body text.
///
/// True iff the fragment is a Title, its trimmed text ends with
/// "reference" or "references" (case-insensitive), and the raw text is
/// shorter than `max_len` characters. The tight length bound avoids false
/// positives on body sentences that merely end in "references".
pub fn is_reference_heading(fragment: &Fragment, max_len: usize) -> bool {
    fragment.kind == FragmentType::Title
        && RE_REFERENCES.is_match(fragment.text.trim())
        && fragment.text.len() < max_len
}
