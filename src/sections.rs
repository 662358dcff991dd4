//! Section segmentation over ordered body fragments.
//!
//! A small state machine walks the filtered, reading-ordered fragments and
//! buckets their text under section names: Abstract, Introduction,
//! top-level numbered headers, and appendix headers each open a section;
//! everything else flows into the current one.

use indexmap::IndexMap;

use crate::fragment::{Fragment, FragmentType};
use crate::layout::headings::header_level;

/// Section the machine starts in before any heading is seen.
const OPENING_SECTION: &str = "Abstract";

/// Bucket ordered body fragments into named sections.
///
/// The input must already be filtered to {Title, NarrativeText, ListItem}
/// and truncated at the references heading. Per fragment, in order:
///
/// - a Title containing "abstract" (case-insensitive) resets the current
///   section to "Abstract", re-zeroing its buffer;
/// - a Title containing "introduction" opens a section named by the
///   verbatim title text;
/// - a Title classified as a top-level or appendix header opens a section
///   named by the trimmed title text;
/// - any other fragment (deeper headers included) appends its trimmed text
///   to the current section's buffer.
///
/// Sections whose buffer is empty after trimming are dropped; surviving
/// sections keep first-appearance order.
pub fn segment_sections(fragments: &[&Fragment]) -> IndexMap<String, String> {
    let mut current = OPENING_SECTION.to_string();
    let mut sections: IndexMap<String, String> = IndexMap::new();
    sections.insert(current.clone(), String::new());

    for fragment in fragments {
        if fragment.kind == FragmentType::Title {
            log::debug!("processing title: {}", fragment.text);

            let lower = fragment.text.to_lowercase();
            if lower.contains("abstract") {
                current = OPENING_SECTION.to_string();
                sections.insert(current.clone(), String::new());
                continue;
            }
            if lower.contains("introduction") {
                current = fragment.text.clone();
                sections.insert(current.clone(), String::new());
                continue;
            }
            if header_level(&fragment.text).starts_section() {
                current = fragment.text.trim().to_string();
                sections.insert(current.clone(), String::new());
                continue;
            }
        }

        let buffer = sections.entry(current.clone()).or_default();
        buffer.push_str(fragment.text.trim());
        buffer.push(' ');
    }

    sections.retain(|_, text| !text.trim().is_empty());
    for text in sections.values_mut() {
        *text = text.trim().to_string();
    }
    sections
}
