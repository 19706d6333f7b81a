//! HTML-safe snippet highlighting for search results.
//!
//! Highlight fragments are interpolated directly into rendered pages
//! downstream, so escaping is a security boundary: the raw field text is
//! HTML-escaped first, and only then are token matches wrapped in emphasis
//! tags. Source text can never smuggle markup through this module.

use regex::{Regex, RegexBuilder};

use crate::error::{PatlexError, Result};

/// Configuration for snippet highlighting.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// HTML tag wrapped around matched tokens.
    pub tag: String,
    /// Snippet length for abstract and claims text, in characters.
    pub snippet_length: usize,
    /// Snippet length for titles.
    pub title_length: usize,
    /// Snippet length for classification code strings.
    pub classification_length: usize,
    /// How far before an out-of-window match the window is shifted back.
    pub shift_margin: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "em".to_string(),
            snippet_length: 220,
            title_length: 140,
            classification_length: 120,
            shift_margin: 60,
        }
    }
}

/// Escape HTML-significant characters.
///
/// The ampersand is handled by the same single pass as the rest, so
/// already-escaped entities in the input are themselves escaped rather than
/// preserved; the input is always treated as plain text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Token highlighter for one search request.
///
/// Compiles a single case-insensitive alternation over the query tokens and
/// reuses it across every field of every result in the request.
pub struct Highlighter {
    config: HighlightConfig,
    matcher: Option<Regex>,
    replacement: String,
}

impl Highlighter {
    /// Create a highlighter for a token set.
    ///
    /// An empty token set produces a highlighter that only escapes and
    /// truncates.
    pub fn new(config: HighlightConfig, tokens: &[String]) -> Result<Self> {
        let matcher = if tokens.is_empty() {
            None
        } else {
            let pattern = tokens
                .iter()
                .map(|token| regex::escape(token))
                .collect::<Vec<String>>()
                .join("|");
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| PatlexError::analysis(format!("invalid highlight pattern: {e}")))?;
            Some(regex)
        };

        let replacement = format!("<{0}>${{0}}</{0}>", config.tag);

        Ok(Self {
            config,
            matcher,
            replacement,
        })
    }

    /// The highlighter's configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Produce an escaped, highlighted snippet of at most `max_len`
    /// characters.
    ///
    /// The window normally starts at the beginning of the text. When the
    /// first token match would fall past the window's end, the window is
    /// shifted so it starts `shift_margin` characters before that match,
    /// keeping the match visible instead of truncated.
    pub fn snippet(&self, text: &str, max_len: usize) -> String {
        if text.is_empty() || max_len == 0 {
            return String::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let start = match &self.matcher {
            Some(regex) => match regex.find(text) {
                Some(m) => {
                    let match_pos = text[..m.start()].chars().count();
                    if match_pos >= max_len {
                        match_pos.saturating_sub(self.config.shift_margin)
                    } else {
                        0
                    }
                }
                None => 0,
            },
            None => 0,
        };

        let end = (start + max_len).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let escaped = escape_html(&window);

        match &self.matcher {
            Some(regex) => regex
                .replace_all(&escaped, self.replacement.as_str())
                .into_owned(),
            None => escaped,
        }
    }

    /// Snippet sized for abstract/claims text.
    pub fn body_snippet(&self, text: &str) -> String {
        self.snippet(text, self.config.snippet_length)
    }

    /// Snippet sized for titles.
    pub fn title_snippet(&self, text: &str) -> String {
        self.snippet(text, self.config.title_length)
    }

    /// Snippet sized for classification code strings.
    pub fn classification_snippet(&self, text: &str) -> String {
        self.snippet(text, self.config.classification_length)
    }
}
