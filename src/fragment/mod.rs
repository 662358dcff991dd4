//! Fragment model: typed records over the layout engine's raw output.
//!
//! The external partitioning engine emits loosely-typed records (a type
//! label string, free text, page-positioned corner coordinates, provenance
//! metadata). [`RawFragment`] mirrors that boundary format verbatim so a
//! JSON dump of engine output loads directly; [`Fragment`] is the typed,
//! cleaned record the rest of the pipeline operates on.

pub mod hyphen;

use serde::Deserialize;

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::lexicon::Lexicon;

/// The closed set of fragment types the pipeline distinguishes.
///
/// Labels from the upstream engine are folded onto this set with
/// [`FragmentType::parse`]; anything unrecognized becomes
/// `UncategorizedText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentType {
    /// Caption attached to a figure
    FigureCaption,
    /// Running footer
    Footer,
    /// Running header
    Header,
    /// Embedded image or figure body
    Image,
    /// Bulleted or numbered list item
    ListItem,
    /// Ordinary paragraph text
    NarrativeText,
    /// Table region
    Table,
    /// Heading or title line
    Title,
    /// Anything the engine could not classify
    UncategorizedText,
}

impl FragmentType {
    /// Fold an engine type label onto the closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use paper_reflow::fragment::FragmentType;
    ///
    /// assert_eq!(FragmentType::parse("Title"), FragmentType::Title);
    /// assert_eq!(
    ///     FragmentType::parse("Formula"),
    ///     FragmentType::UncategorizedText
    /// );
    /// ```
    pub fn parse(label: &str) -> Self {
        match label {
            "FigureCaption" => Self::FigureCaption,
            "Footer" => Self::Footer,
            "Header" => Self::Header,
            "Image" => Self::Image,
            "ListItem" => Self::ListItem,
            "NarrativeText" => Self::NarrativeText,
            "Table" => Self::Table,
            "Title" => Self::Title,
            _ => Self::UncategorizedText,
        }
    }
}

/// One positioned, typed unit of extracted document content.
///
/// Constructed once from engine output and never mutated afterwards; the
/// column normalizer produces fresh copies rather than rewriting bounds in
/// place. `text` is repaired at construction by the hyphen-rejoin pass.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Classified fragment type
    pub kind: FragmentType,
    /// Cleaned fragment text
    pub text: String,
    /// 1-based page number
    pub page_number: u32,
    /// Bounding rectangle in page-pixel space
    pub bounds: Rect,
    /// Width of the source page layout
    pub layout_width: i32,
    /// Height of the source page layout
    pub layout_height: i32,
    /// Directory the source file was read from, if known
    pub file_directory: String,
    /// Source file name, if known
    pub filename: String,
    /// Source file type, if known
    pub filetype: String,
    /// Language tags reported by the engine
    pub languages: Vec<String>,
}

impl Fragment {
    /// Create a fragment, repairing hyphenation in `text`.
    ///
    /// Provenance fields default to empty; [`Fragment::from_raw`] fills
    /// them from an engine record.
    pub fn new(
        kind: FragmentType,
        text: impl Into<String>,
        page_number: u32,
        bounds: Rect,
        lexicon: &dyn Lexicon,
    ) -> Self {
        Self {
            kind,
            text: hyphen::repair_hyphenation(&text.into(), lexicon),
            page_number,
            bounds,
            layout_width: 0,
            layout_height: 0,
            file_directory: String::new(),
            filename: String::new(),
            filetype: String::new(),
            languages: Vec::new(),
        }
    }

    /// Build a fragment from a raw engine record.
    pub fn from_raw(raw: &RawFragment, lexicon: &dyn Lexicon) -> Self {
        let meta = &raw.metadata;
        let corner = |i: usize| {
            Point::new(
                meta.coordinates.points[i][0] as i32,
                meta.coordinates.points[i][1] as i32,
            )
        };
        // Engine corner order: top-left, bottom-left, bottom-right, top-right.
        let bounds = Rect::new(corner(0), corner(3), corner(1), corner(2));

        let mut fragment = Self::new(
            FragmentType::parse(&raw.label),
            raw.text.clone(),
            meta.page_number,
            bounds,
            lexicon,
        );
        fragment.layout_width = meta.coordinates.layout_width as i32;
        fragment.layout_height = meta.coordinates.layout_height as i32;
        fragment.file_directory = meta.file_directory.clone();
        fragment.filename = meta.filename.clone();
        fragment.filetype = meta.filetype.clone();
        fragment.languages = meta.languages.clone();
        fragment
    }
}

/// A boundary record exactly as the partitioning engine serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFragment {
    /// Engine type label (open set)
    #[serde(rename = "type")]
    pub label: String,
    /// Raw fragment text
    pub text: String,
    /// Positional and provenance metadata
    pub metadata: RawMetadata,
}

/// Metadata object of a raw engine record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMetadata {
    /// 1-based page number
    pub page_number: u32,
    /// Corner coordinates and page layout dimensions
    pub coordinates: RawCoordinates,
    /// Language tags, when reported
    #[serde(default)]
    pub languages: Vec<String>,
    /// Directory of the source file, when reported
    #[serde(default)]
    pub file_directory: String,
    /// Name of the source file, when reported
    #[serde(default)]
    pub filename: String,
    /// Type of the source file, when reported
    #[serde(default)]
    pub filetype: String,
}

/// Coordinate block of a raw engine record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCoordinates {
    /// Corner points in engine order: top-left, bottom-left, bottom-right,
    /// top-right
    pub points: [[f64; 2]; 4],
    /// Page layout width
    pub layout_width: f64,
    /// Page layout height
    pub layout_height: f64,
}

/// Deserialize a JSON array of engine records.
///
/// # Examples
///
/// ```
/// use paper_reflow::fragment::parse_raw_fragments;
///
/// let json = r#"[{
///     "type": "NarrativeText",
///     "text": "Hello.",
///     "metadata": {
///         "page_number": 1,
///         "coordinates": {
///             "points": [[10, 20], [10, 40], [200, 40], [200, 20]],
///             "layout_width": 612,
///             "layout_height": 792
///         }
///     }
/// }]"#;
///
/// let records = parse_raw_fragments(json).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].label, "NarrativeText");
/// ```
pub fn parse_raw_fragments(json: &str) -> Result<Vec<RawFragment>> {
    Ok(serde_json::from_str(json)?)
}
