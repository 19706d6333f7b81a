//! Query and document tokenization.
//!
//! Patent search relies on a deliberately simple token model: lowercase runs
//! of Unicode letters, digits, and hyphens. Hyphenated terms such as
//! "anti-lock" stay intact because patent vocabulary leans heavily on
//! compound terms. Token order is preserved and duplicates are retained so
//! the lexical scorer can weigh repeated query terms.
//!
//! # Examples
//!
//! ```
//! use patlex::analysis::tokenize;
//!
//! let tokens = tokenize("Anti-lock braking system");
//! assert_eq!(tokens, vec!["anti-lock", "braking", "system"]);
//! assert!(tokenize("").is_empty());
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of Unicode letters, digits, and hyphens.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"[\p{L}\p{N}-]+").unwrap();
}

/// Split text into lowercase tokens of Unicode letters, digits, and hyphens.
///
/// The sequence is finite, order-preserving, and keeps duplicates. Empty
/// input yields an empty vector. Tokens consisting solely of hyphens are
/// dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Wireless CHARGING Coil"), vec![
            "wireless", "charging", "coil"
        ]);
    }

    #[test]
    fn test_tokenize_keeps_hyphens_and_digits() {
        assert_eq!(tokenize("H02J 50/10 anti-lock"), vec![
            "h02j", "50", "10", "anti-lock"
        ]);
    }

    #[test]
    fn test_tokenize_retains_duplicates_in_order() {
        assert_eq!(tokenize("coil to coil"), vec!["coil", "to", "coil"]);
    }

    #[test]
    fn test_tokenize_unicode_letters() {
        assert_eq!(tokenize("Übertragung énergie"), vec![
            "übertragung",
            "énergie"
        ]);
    }

    #[test]
    fn test_tokenize_drops_punctuation_and_bare_hyphens() {
        assert_eq!(tokenize("a, b; --- (c)"), vec!["a", "b", "c"]);
    }
}
