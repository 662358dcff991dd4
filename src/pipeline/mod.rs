//! End-to-end reconstruction pipeline.
//!
//! Wires the stages together: text-area estimation, column normalization,
//! reading-order sorting, classification filtering, and section
//! segmentation. The pipeline owns the configuration and the lexicon
//! collaborator; each document is processed in isolation, so one pipeline
//! may serve many documents, including concurrently from separate threads.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::ReflowConfig;
use crate::error::{Error, Result};
use crate::fragment::{Fragment, FragmentType, RawFragment};
use crate::geometry::Rect;
use crate::layout::{columns, filters, reading_order, text_area};
use crate::lexicon::{BuiltinLexicon, Lexicon};
use crate::sections;

/// The document reconstruction pipeline.
///
/// # Examples
///
/// ```no_run
/// use paper_reflow::pipeline::ReflowPipeline;
/// use paper_reflow::fragment::parse_raw_fragments;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = std::fs::read_to_string("partitions.json")?;
/// let records = parse_raw_fragments(&json)?;
///
/// let pipeline = ReflowPipeline::new();
/// let sections = pipeline.reconstruct_raw(&records)?;
/// for (name, text) in &sections {
///     println!("{}: {} chars", name, text.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ReflowPipeline {
    config: ReflowConfig,
    lexicon: Arc<dyn Lexicon>,
}

impl Default for ReflowPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflowPipeline {
    /// Create a pipeline with default configuration and the built-in
    /// lexicon.
    pub fn new() -> Self {
        Self {
            config: ReflowConfig::default(),
            lexicon: Arc::new(BuiltinLexicon),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReflowConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the lexicon collaborator.
    pub fn with_lexicon(mut self, lexicon: Arc<dyn Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// The lexicon fragments are constructed with.
    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    /// Reconstruct section text from raw engine records.
    pub fn reconstruct_raw(&self, records: &[RawFragment]) -> Result<IndexMap<String, String>> {
        let fragments = records
            .iter()
            .map(|record| Fragment::from_raw(record, self.lexicon.as_ref()))
            .collect();
        self.reconstruct(fragments)
    }

    /// Reconstruct section text from typed fragments.
    ///
    /// Runs the full pipeline and returns the ordered section map:
    /// iteration order is order of first appearance, keys are unique, and
    /// no value is empty.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDocument`] for a document with no fragments;
    /// [`Error::NoContentFragments`] when the text area cannot be
    /// estimated.
    pub fn reconstruct(&self, fragments: Vec<Fragment>) -> Result<IndexMap<String, String>> {
        if fragments.is_empty() {
            return Err(Error::EmptyDocument);
        }
        log::info!("reconstructing document from {} fragments", fragments.len());

        let area = text_area::estimate_text_area(&fragments)?;
        let layout = columns::detect_column_layout(&fragments, &area, &self.config);
        log::debug!(
            "text area {}x{} at ({}, {}), {:?} column layout",
            area.width(),
            area.height(),
            area.left(),
            area.top(),
            layout
        );

        let normalized = columns::normalize_columns(&fragments, &area, layout, &self.config);
        let ordered = reading_order::sort_reading_order(normalized);

        let page_count = ordered.iter().map(|f| f.page_number).max().unwrap_or(0);
        log::info!("{} pages, {} fragments", page_count, ordered.len());

        let body = self.select_body_fragments(&ordered, &area);
        log::info!("{} body fragments after filtering", body.len());

        Ok(sections::segment_sections(&body))
    }

    /// Select the body fragments the segmenter consumes.
    ///
    /// Walks the ordered sequence, stopping at the references heading, and
    /// keeps text-typed fragments that survive every classification
    /// filter.
    fn select_body_fragments<'a>(
        &self,
        ordered: &'a [Fragment],
        area: &Rect,
    ) -> Vec<&'a Fragment> {
        let config = &self.config;
        let mut body = Vec::new();

        for fragment in ordered {
            if filters::is_reference_heading(fragment, config.reference_max_len) {
                break;
            }
            let is_text_type = matches!(
                fragment.kind,
                FragmentType::Title | FragmentType::NarrativeText | FragmentType::ListItem
            );
            if !is_text_type {
                continue;
            }
            if !filters::in_text_area(fragment, area, config.text_area_threshold) {
                continue;
            }
            if filters::is_figure_caption(fragment, ordered, config.caption_gap) {
                continue;
            }
            if filters::is_table_caption(fragment, ordered, config.caption_gap) {
                continue;
            }
            if filters::is_table_member(fragment, ordered) {
                continue;
            }
            if fragment.kind == FragmentType::Title && !filters::is_plausible_title(fragment, ordered)
            {
                continue;
            }
            body.push(fragment);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_errors() {
        let pipeline = ReflowPipeline::new();
        assert!(matches!(
            pipeline.reconstruct(Vec::new()),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn test_no_content_errors() {
        let pipeline = ReflowPipeline::new();
        let lone_header = Fragment::new(
            FragmentType::Header,
            "running header",
            1,
            Rect::from_edges(50, 10, 550, 30),
            pipeline.lexicon(),
        );
        assert!(matches!(
            pipeline.reconstruct(vec![lone_header]),
            Err(Error::NoContentFragments)
        ));
    }
}
