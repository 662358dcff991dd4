//! Text-area estimation.
//!
//! Derives, per document, the rectangular region that bounds genuine
//! content, excluding margins, running headers, and footers. The estimate
//! takes the median of per-page content edges so that a handful of outlier
//! pages (a title page, an appendix full of marginal tables) cannot skew
//! the result.

use crate::error::{Error, Result};
use crate::fragment::{Fragment, FragmentType};
use crate::geometry::Rect;
use crate::stats;

/// Fragment types that count as genuine page content.
const CONTENT_TYPES: &[FragmentType] = &[
    FragmentType::NarrativeText,
    FragmentType::ListItem,
    FragmentType::Image,
    FragmentType::Table,
    FragmentType::FigureCaption,
];

fn is_content(fragment: &Fragment) -> bool {
    CONTENT_TYPES.contains(&fragment.kind)
}

/// Estimate the document's content region.
///
/// For every page, the minimum top and left edges (ignoring non-positive
/// coordinates, which denote "unset") and the maximum right and bottom
/// edges are collected over content-typed fragments. Pages with no
/// qualifying fragment fall back to 0 for top/left and to the global
/// maximum for right/bottom. The median across pages of each edge yields
/// one page-independent rectangle.
///
/// # Errors
///
/// [`Error::EmptyDocument`] when `fragments` is empty;
/// [`Error::NoContentFragments`] when no fragment has a content type.
pub fn estimate_text_area(fragments: &[Fragment]) -> Result<Rect> {
    if fragments.is_empty() {
        return Err(Error::EmptyDocument);
    }

    // Global fallbacks for pages without any qualifying fragment.
    let right_max = fragments
        .iter()
        .filter(|f| is_content(f))
        .map(|f| f.bounds.right())
        .max()
        .ok_or(Error::NoContentFragments)?;
    let bottom_max = fragments
        .iter()
        .filter(|f| is_content(f))
        .map(|f| f.bounds.bottom())
        .max()
        .ok_or(Error::NoContentFragments)?;

    let page_count = fragments.iter().map(|f| f.page_number).max().unwrap_or(0);

    let mut tops = Vec::with_capacity(page_count as usize);
    let mut lefts = Vec::with_capacity(page_count as usize);
    let mut rights = Vec::with_capacity(page_count as usize);
    let mut bottoms = Vec::with_capacity(page_count as usize);

    for page in 1..=page_count {
        let on_page = || fragments.iter().filter(move |f| f.page_number == page && is_content(f));

        tops.push(
            on_page()
                .map(|f| f.bounds.top())
                .filter(|&y| y > 0)
                .min()
                .unwrap_or(0),
        );
        lefts.push(
            on_page()
                .map(|f| f.bounds.left())
                .filter(|&x| x > 0)
                .min()
                .unwrap_or(0),
        );
        rights.push(on_page().map(|f| f.bounds.right()).max().unwrap_or(right_max));
        bottoms.push(
            on_page()
                .map(|f| f.bounds.bottom())
                .max()
                .unwrap_or(bottom_max),
        );
    }

    let top = stats::median(&mut tops).round() as i32;
    let left = stats::median(&mut lefts).round() as i32;
    let right = stats::median(&mut rights).round() as i32;
    let bottom = stats::median(&mut bottoms).round() as i32;

    Ok(Rect::from_edges(left, top, right, bottom))
}
