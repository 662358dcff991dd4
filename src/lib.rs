//! # paper_reflow
//!
//! Reconstructs a clean, ordered, section-labeled plain-text view of a
//! scientific paper from the raw, page-positioned fragments an external
//! PDF layout/OCR engine produces.
//!
//! ## Pipeline
//!
//! - **Text-area estimation**: the per-document rectangle bounding genuine
//!   content, robust to outlier pages via per-edge medians
//! - **Column normalization**: one- vs two-column detection, with every
//!   fragment snapped onto a canonical column grid
//! - **Reading order**: column-major, top-to-bottom ordering per page
//! - **Classification**: caption, table, title-outlier, and margin filters
//! - **Section segmentation**: Abstract/Introduction/numbered/appendix
//!   headings, truncated at the references heading
//!
//! ## Quick Start
//!
//! ```no_run
//! use paper_reflow::fragment::parse_raw_fragments;
//! use paper_reflow::pipeline::ReflowPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("partitions.json")?;
//! let records = parse_raw_fragments(&json)?;
//!
//! let sections = ReflowPipeline::new().reconstruct_raw(&records)?;
//! for (name, text) in &sections {
//!     println!("## {}\n{}\n", name, text);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and fragment model
pub mod fragment;
pub mod geometry;

// Lexicon collaborator
pub mod lexicon;

// Layout analysis
pub mod layout;

// Section segmentation
pub mod sections;

// Pipeline façade
pub mod pipeline;

// Re-exports
pub use config::ReflowConfig;
pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentType, RawFragment};
pub use geometry::{Point, Rect};
pub use layout::{ColumnLayout, HeaderLevel};
pub use lexicon::{BuiltinLexicon, Lexicon};
pub use pipeline::ReflowPipeline;

// Internal utilities
pub(crate) mod stats {
    //! Small statistical helpers shared by the layout heuristics.

    /// Arithmetic mean. The caller guards against empty input.
    pub fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation. The caller guards against empty
    /// input.
    pub fn std_dev(values: &[f64]) -> f64 {
        let m = mean(values);
        (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
    }

    /// Median of integer samples: the middle value, or the mean of the two
    /// middle values for even counts. Sorts in place. Zero for an empty
    /// slice.
    pub fn median(values: &mut [i32]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.sort_unstable();
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            values[mid] as f64
        } else {
            (values[mid - 1] as f64 + values[mid] as f64) / 2.0
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
