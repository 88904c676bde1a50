//! Text normalization applied before tokenization.
//!
//! User messages arrive as free text and may carry HTML fragments, digits,
//! punctuation or arbitrary unicode. The model was trained on lowercase
//! letters-and-spaces input, so everything else is stripped here.

use once_cell::sync::Lazy;
use regex::Regex;

// Anything that looks like an HTML tag, shortest match
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

// Everything except ASCII letters and whitespace
static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

// Runs of whitespace of any kind
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a raw message into the canonical form the tokenizer expects:
/// lowercase ASCII letters separated by single spaces, no leading or
/// trailing whitespace.
///
/// Pure and total: never fails, and the empty string maps to itself.
/// Applying it twice gives the same result as applying it once.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = TAG_RE.replace_all(&text, " ");
    let text = NON_LETTER_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_punctuation() {
        assert_eq!(clean_text("<b>GREAT</b> movie!!"), "great movie");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(clean_text("LOVED It"), "loved it");
    }

    #[test]
    fn test_strips_digits_symbols_and_non_ascii() {
        assert_eq!(clean_text("rated 10/10 — très bien #1!"), "rated trs bien");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  so \t\n  good   "), "so good");
    }

    #[test]
    fn test_tag_replaced_by_space_separates_words() {
        // The tag itself becomes a space, keeping adjacent words apart
        assert_eq!(clean_text("good<br>bad"), "good bad");
    }

    #[test]
    fn test_only_noise_yields_empty() {
        assert_eq!(clean_text("123 !!! <div></div> 456"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "<b>GREAT</b> movie!!",
            "  MIXED case   and\tnumbers 42  ",
            "already clean text",
            "",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn test_output_alphabet() {
        let out = clean_text("Some <i>Wild</i> INPUT: 99% @here, naïve\n\ttabs");
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
        assert!(!out.contains("  "));
        assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
    }
}
