//! Header level classification for Title fragments.
//!
//! Scientific papers number their section headers ("4 Experiments",
//! "4.1 Setup", …). The segmenter only opens a new section for top-level
//! and appendix headers; deeper levels flow into the enclosing section's
//! text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_FIRST: Regex = Regex::new(r"^\d\.?\s").unwrap();
    static ref RE_SECOND: Regex = Regex::new(r"^\d\.\d\.?\s").unwrap();
    static ref RE_THIRD: Regex = Regex::new(r"^\d\.\d\.\d\.?\s").unwrap();
    static ref RE_FOURTH: Regex = Regex::new(r"^\d\.\d\.\d\.\d\.?\s").unwrap();
    static ref RE_FIFTH: Regex = Regex::new(r"^\d\.\d\.\d\.\d\.\d\.?\s").unwrap();
}

/// Numbering depth of a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderLevel {
    /// Top-level numbered header ("4 Experiments")
    First,
    /// Second-level header ("4.1 Setup")
    Second,
    /// Third-level header
    Third,
    /// Fourth-level header
    Fourth,
    /// Fifth-level header
    Fifth,
    /// Appendix header ("Appendix A")
    Appendix,
    /// No recognized numbering
    Unknown,
}

impl HeaderLevel {
    /// Whether a header at this level opens a new output section.
    ///
    /// # Examples
    ///
    /// ```
    /// use paper_reflow::layout::headings::HeaderLevel;
    ///
    /// assert!(HeaderLevel::First.starts_section());
    /// assert!(HeaderLevel::Appendix.starts_section());
    /// assert!(!HeaderLevel::Second.starts_section());
    /// ```
    pub fn starts_section(&self) -> bool {
        matches!(self, HeaderLevel::First | HeaderLevel::Appendix)
    }
}

/// Classify a header's numbering depth from its text.
///
/// Matches a leading `"N "`, `"N.N "`, … prefix (each level tolerating a
/// trailing dot), or a text starting with "appendix" (case-insensitive).
///
/// # Examples
///
/// ```
/// use paper_reflow::layout::headings::{header_level, HeaderLevel};
///
/// assert_eq!(header_level("4 Experiments"), HeaderLevel::First);
/// assert_eq!(header_level("4.1. Setup"), HeaderLevel::Second);
/// assert_eq!(header_level("Appendix A"), HeaderLevel::Appendix);
/// assert_eq!(header_level("Conclusion"), HeaderLevel::Unknown);
/// ```
pub fn header_level(text: &str) -> HeaderLevel {
    if RE_FIRST.is_match(text) {
        HeaderLevel::First
    } else if RE_SECOND.is_match(text) {
        HeaderLevel::Second
    } else if RE_THIRD.is_match(text) {
        HeaderLevel::Third
    } else if RE_FOURTH.is_match(text) {
        HeaderLevel::Fourth
    } else if RE_FIFTH.is_match(text) {
        HeaderLevel::Fifth
    } else if text.trim().to_lowercase().starts_with("appendix") {
        HeaderLevel::Appendix
    } else {
        HeaderLevel::Unknown
    }
}
