//! Configuration for the reconstruction pipeline.

/// Tuning knobs for the geometric heuristics.
///
/// The defaults reproduce the behavior the pipeline was calibrated with on
/// arXiv-style papers; they rarely need adjustment.
#[derive(Debug, Clone)]
pub struct ReflowConfig {
    /// Horizontal inset, in pixels, applied when snapping fragments onto a
    /// column slot.
    pub column_inset: i32,

    /// Divisor of the text-area width that yields the two-column slot
    /// width. Slightly larger than 2.0 so a gutter remains between slots.
    pub column_slot_divisor: f64,

    /// A document is two-column when the mean NarrativeText width is
    /// smaller than `text_area_width / two_column_ratio`.
    pub two_column_ratio: f64,

    /// Minimum fraction of a fragment's own area that must fall inside the
    /// text area for the fragment to count as in-area.
    pub text_area_threshold: f64,

    /// Maximum vertical gap, in pixels, between an image or table and a
    /// caption line for the caption association to hold.
    pub caption_gap: i32,

    /// Maximum text length for a Title fragment to qualify as the
    /// references heading. Keeps body sentences ending in "references"
    /// from terminating the document early.
    pub reference_max_len: usize,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            column_inset: 10,
            column_slot_divisor: 2.2,
            two_column_ratio: 1.5,
            text_area_threshold: 0.7,
            caption_gap: 50,
            reference_max_len: 15,
        }
    }
}
