//! Lexical dictionary lookup used by the hyphen-repair pass.
//!
//! The repair pass only needs one question answered: is this token, on its
//! own, a recognized word? The [`Lexicon`] trait is that seam. The built-in
//! implementation carries a compact word set compiled in via `phf`, so no
//! runtime corpus provisioning happens; callers backed by a real dictionary
//! service implement the trait and hand it to the pipeline constructor.

use phf::phf_set;

/// A single-word dictionary lookup collaborator.
///
/// `root` returns the canonical root form of a known word (for example
/// `"networks"` → `"network"`), or `None` when the word is not recognized.
pub trait Lexicon: Send + Sync {
    /// Look up a word and return its canonical root form, if any.
    fn root(&self, word: &str) -> Option<String>;
}

/// Built-in lexicon backed by a compiled-in word set.
///
/// Lookup lowercases the query, checks the set directly, then retries with
/// morphy-style suffix detachment (plural, participle, and comparative
/// endings). Stateless and free to construct.
///
/// # Examples
///
/// ```
/// use paper_reflow::lexicon::{BuiltinLexicon, Lexicon};
///
/// let lexicon = BuiltinLexicon;
/// assert_eq!(lexicon.root("Networks").as_deref(), Some("network"));
/// assert_eq!(lexicon.root("ment"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLexicon;

/// Suffix detachment rules tried in order: (suffix, replacement).
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("ses", "s"),
    ("ies", "y"),
    ("xes", "x"),
    ("zes", "z"),
    ("ing", ""),
    ("ing", "e"),
    ("ied", "y"),
    ("ed", ""),
    ("ed", "e"),
    ("iest", "y"),
    ("ier", "y"),
    ("est", ""),
    ("er", ""),
    ("es", ""),
    ("s", ""),
];

static WORDS: phf::Set<&'static str> = phf_set! {
    "abstract", "accuracy", "analysis", "appendix", "approach", "area",
    "art", "attention", "baseline", "body", "caption", "column", "compound",
    "content", "corpus", "data", "deep", "document", "end", "error",
    "experiment", "feature", "figure", "fine", "fragment", "grid", "header",
    "height", "image", "introduction", "known", "label", "language",
    "layer", "layout", "learn", "level", "line", "long", "margin", "matrix",
    "mean", "median", "method", "model", "network", "noise", "order",
    "page", "paper", "paragraph", "performance", "pixel", "point",
    "process", "rate", "read", "rectangle", "reference", "region", "result",
    "sample", "science", "score", "section", "self", "sentence", "short",
    "state", "structure", "study", "table", "task", "term", "test", "text",
    "time", "title", "token", "train", "tune", "type", "well", "width",
    "word", "work",
};

impl Lexicon for BuiltinLexicon {
    fn root(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        if lower.is_empty() {
            return None;
        }
        if WORDS.contains(lower.as_str()) {
            return Some(lower);
        }
        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{}{}", stem, replacement);
                if WORDS.contains(candidate.as_str()) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}
