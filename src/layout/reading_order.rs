//! Per-page reading-order sorting.

use std::collections::BTreeMap;

use crate::fragment::Fragment;

/// Order fragments into the document's linear reading sequence.
///
/// Fragments are bucketed by page number and each page is sorted with the
/// column-aware comparator ([`crate::geometry::Rect::reading_order`]);
/// pages concatenate in ascending page order. The sort is stable, so
/// fragments comparing equal (overlapping horizontal spans, same top edge)
/// keep their input order.
///
/// Call this after column normalization; raw engine bounds are too noisy
/// for the comparator to place two-column text correctly.
pub fn sort_reading_order(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let total = fragments.len();
    let mut pages: BTreeMap<u32, Vec<Fragment>> = BTreeMap::new();
    for fragment in fragments {
        pages.entry(fragment.page_number).or_default().push(fragment);
    }

    let mut ordered = Vec::with_capacity(total);
    for (_, mut page_fragments) in pages {
        page_fragments.sort_by(|a, b| a.bounds.reading_order(&b.bounds));
        ordered.extend(page_fragments);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::FragmentType;
    use crate::geometry::Rect;
    use crate::lexicon::BuiltinLexicon;

    fn frag(text: &str, page: u32, left: i32, top: i32, right: i32, bottom: i32) -> Fragment {
        Fragment::new(
            FragmentType::NarrativeText,
            text,
            page,
            Rect::from_edges(left, top, right, bottom),
            &BuiltinLexicon,
        )
    }

    fn texts(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_reading_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_column_major_order_within_page() {
        // Two snapped columns: the left column reads top to bottom first.
        let fragments = vec![
            frag("right-top", 1, 320, 100, 540, 150),
            frag("left-bottom", 1, 60, 600, 267, 650),
            frag("left-top", 1, 60, 100, 267, 150),
            frag("right-bottom", 1, 320, 600, 540, 650),
        ];
        let ordered = sort_reading_order(fragments);
        assert_eq!(
            texts(&ordered),
            vec!["left-top", "left-bottom", "right-top", "right-bottom"]
        );
    }

    #[test]
    fn test_pages_concatenate_in_order() {
        let fragments = vec![
            frag("page two", 2, 60, 100, 540, 150),
            frag("page one", 1, 60, 100, 540, 150),
        ];
        let ordered = sort_reading_order(fragments);
        assert_eq!(texts(&ordered), vec!["page one", "page two"]);
    }

    #[test]
    fn test_stable_for_equal_fragments() {
        // Same span, same top edge: input order is preserved.
        let fragments = vec![
            frag("first", 1, 60, 100, 540, 150),
            frag("second", 1, 60, 100, 540, 150),
        ];
        let ordered = sort_reading_order(fragments);
        assert_eq!(texts(&ordered), vec!["first", "second"]);
    }
}
