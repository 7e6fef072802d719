//! Tiered string similarity for place names and addresses
//!
//! Scores sit on fixed tiers so exact and substring matches are always
//! distinguishable from partial token overlap. All scores are in [0.0, 1.0]
//! where 1.0 means identical after normalization.

use std::collections::HashSet;

/// Score assigned when one normalized string contains the other
const SUBSTRING_SCORE: f64 = 0.8;

/// Scale applied to token overlap, keeping the partial tier strictly below
/// the substring tier even when the token sets are equal
const PARTIAL_SCALE: f64 = 0.75;

/// Calculate similarity between two strings
///
/// # Arguments
/// * `a` - First text value
/// * `b` - Second text value
///
/// # Returns
/// Similarity score in [0.0, 1.0]:
/// - 0.0 if either string is empty after trimming
/// - 1.0 on case-insensitive equality
/// - 0.8 when one normalized string contains the other
/// - otherwise scaled token overlap in [0.0, 0.75]
///
/// Symmetric in its arguments, and never decreases as the two strings share
/// more tokens.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a_norm = a.trim().to_lowercase();
    let b_norm = b.trim().to_lowercase();

    if a_norm.is_empty() || b_norm.is_empty() {
        return 0.0;
    }
    if a_norm == b_norm {
        return 1.0;
    }
    if a_norm.contains(&b_norm) || b_norm.contains(&a_norm) {
        return SUBSTRING_SCORE;
    }

    token_overlap(&a_norm, &b_norm)
}

/// Overlap coefficient over whitespace tokens, scaled into [0, PARTIAL_SCALE].
///
/// Measures how much of the shorter string's tokens appear in the longer one.
fn token_overlap(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    let shorter = tokens_a.len().min(tokens_b.len());
    if shorter == 0 {
        return 0.0;
    }

    let shared = tokens_a.intersection(&tokens_b).count();
    PARTIAL_SCALE * shared as f64 / shorter as f64
}
