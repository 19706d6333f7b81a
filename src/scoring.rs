//! Lexical scoring and score blending.
//!
//! The lexical score is a crude term-frequency heuristic, not TF-IDF: each
//! query token is counted as a case-insensitive substring of the document
//! text, per-token counts are normalized by the maximum count across the
//! token set, and the score is the mean of the normalized counts. The
//! simplicity is deliberate; ranking quality beyond this comes from the
//! semantic component.

/// Score document text against a token list using substring term frequency.
///
/// Returns a value in [0, 1]. An empty token list scores 0 for any text.
pub fn lexical_score(text: &str, tokens: &[String]) -> f32 {
    if tokens.is_empty() {
        return 0.0;
    }

    let haystack = text.to_lowercase();
    let counts: Vec<usize> = tokens
        .iter()
        .map(|token| count_occurrences(&haystack, &token.to_lowercase()))
        .collect();

    // Normalize by the max per-token count, or 1 when nothing matched.
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);

    let sum: f32 = counts
        .iter()
        .map(|&count| count as f32 / max_count as f32)
        .sum();
    sum / tokens.len() as f32
}

/// Blend semantic and lexical scores with the given weights.
///
/// Both inputs are clamped to [0, 1] before weighting, so with weights that
/// sum to at most 1 the blended score stays within [0, 1].
pub fn blend_scores(semantic: f32, lexical: f32, semantic_weight: f32, lexical_weight: f32) -> f32 {
    semantic_weight * semantic.clamp(0.0, 1.0) + lexical_weight * lexical.clamp(0.0, 1.0)
}

/// Count non-overlapping case-sensitive occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.match_indices(needle).count()
}
