//! Hyphen-rejoin repair for fragment text.
//!
//! Layout engines emit line-wrapped text inside a single fragment, leaving
//! artifacts like `"exam- ple"` where a word was split at a line break.
//! This pass scans adjacent tokens and rejoins such splits, consulting the
//! lexicon to decide whether the hyphen itself belongs to the word.

use crate::lexicon::Lexicon;

/// Token pairs that always merge back into one fixed compound.
const FIXED_COMPOUNDS: &[&str] = &["end-to-end", "state-of-the-art"];

/// Rejoin spuriously hyphenated words in `text`.
///
/// Tokens are split on single spaces and scanned left to right. For each
/// adjacent pair, a single trailing `.` on the second token is stripped
/// before any check and the stripped form is what a merge emits:
///
/// - a pair whose concatenation is a known fixed compound merges
///   unconditionally;
/// - otherwise, when the first token ends in `-`, the pair merges: the
///   hyphen stays if both the hyphen-stripped prefix and the second token
///   are recognized by the lexicon, and is dropped if not.
///
/// A merge consumes both tokens. Text with fewer than two tokens is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use paper_reflow::fragment::hyphen::repair_hyphenation;
/// use paper_reflow::lexicon::BuiltinLexicon;
///
/// let repaired = repair_hyphenation("an end-to- end pipeline", &BuiltinLexicon);
/// assert_eq!(repaired, "an end-to-end pipeline");
/// ```
pub fn repair_hyphenation(text: &str, lexicon: &dyn Lexicon) -> String {
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() < 2 {
        return text.to_string();
    }

    let mut repaired: Vec<String> = Vec::with_capacity(tokens.len());
    let mut idx = 0;
    while idx < tokens.len() {
        if idx + 1 == tokens.len() {
            repaired.push(tokens[idx].to_string());
            break;
        }

        let prev = tokens[idx];
        let next = tokens[idx + 1].strip_suffix('.').unwrap_or(tokens[idx + 1]);
        let fused = format!("{}{}", prev, next);

        if FIXED_COMPOUNDS.contains(&fused.to_lowercase().as_str()) {
            repaired.push(fused);
            idx += 2;
        } else if let Some(prefix) = prev.strip_suffix('-') {
            let legitimate_compound =
                lexicon.root(prefix).is_some() && lexicon.root(next).is_some();
            if legitimate_compound {
                repaired.push(fused);
            } else {
                repaired.push(format!("{}{}", prefix, next));
            }
            idx += 2;
        } else {
            repaired.push(prev.to_string());
            idx += 1;
        }
    }

    repaired.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::BuiltinLexicon;

    #[test]
    fn test_no_hyphens_unchanged() {
        let text = "plain text with no splits";
        assert_eq!(repair_hyphenation(text, &BuiltinLexicon), text);
    }

    #[test]
    fn test_single_token_unchanged() {
        assert_eq!(repair_hyphenation("word", &BuiltinLexicon), "word");
        assert_eq!(repair_hyphenation("", &BuiltinLexicon), "");
    }

    #[test]
    fn test_fixed_compound_merges() {
        assert_eq!(
            repair_hyphenation("an end-to- end pipeline", &BuiltinLexicon),
            "an end-to-end pipeline"
        );
        assert_eq!(
            repair_hyphenation("the state-of-the- art results", &BuiltinLexicon),
            "the state-of-the-art results"
        );
    }

    #[test]
    fn test_fixed_compound_strips_trailing_period() {
        assert_eq!(
            repair_hyphenation("state-of-the- art.", &BuiltinLexicon),
            "state-of-the-art"
        );
    }

    #[test]
    fn test_line_wrap_split_drops_hyphen() {
        // "ment" is not a recognized word, so the hyphen is a wrap artifact.
        assert_eq!(
            repair_hyphenation("a state- ment here", &BuiltinLexicon),
            "a statement here"
        );
        assert_eq!(
            repair_hyphenation("the Govern- ment said", &BuiltinLexicon),
            "the Government said"
        );
    }

    #[test]
    fn test_dictionary_pair_keeps_hyphen() {
        // Both halves are recognized words: treated as a real compound.
        assert_eq!(
            repair_hyphenation("a well- known method", &BuiltinLexicon),
            "a well-known method"
        );
        assert_eq!(
            repair_hyphenation("fine- tuning", &BuiltinLexicon),
            "fine-tuning"
        );
    }

    #[test]
    fn test_merge_at_end_consumes_token() {
        assert_eq!(
            repair_hyphenation("issued a state- ment", &BuiltinLexicon),
            "issued a statement"
        );
    }

    #[test]
    fn test_double_space_preserved() {
        let text = "two  spaces";
        assert_eq!(repair_hyphenation(text, &BuiltinLexicon), text);
    }
}
