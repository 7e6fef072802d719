//! Reporting helpers for the import pipeline
//!
//! Summary statistics over a verdict's candidate list, and the one-call
//! assessment combining duplicate detection with confidence blending.

use campdex_core::{Candidate, Result};
use serde::Serialize;

use crate::confidence::{ConfidenceBlender, ConfidenceBreakdown, TypeClassification};
use crate::lookup::EntryLookup;
use crate::matcher::{DuplicateMatcher, DuplicateVerdict};

/// Summary statistics for one duplicate-detection run
#[derive(Debug, Clone, Serialize)]
pub struct MatchStats {
    /// Number of distinct catalog entries considered
    pub candidates_count: usize,
    /// Score of the best match
    pub best_score: f64,
    /// Average score across all matches
    pub avg_score: f64,
    /// Leading signal of the best match
    pub top_signal: Option<String>,
}

impl MatchStats {
    /// Compute stats from a verdict (candidates are already sorted)
    pub fn compute(verdict: &DuplicateVerdict) -> Self {
        if verdict.candidates.is_empty() {
            return Self {
                candidates_count: 0,
                best_score: 0.0,
                avg_score: 0.0,
                top_signal: None,
            };
        }

        let scores: Vec<f64> = verdict.candidates.iter().map(|c| c.score).collect();
        let avg_score = scores.iter().sum::<f64>() / scores.len() as f64;

        Self {
            candidates_count: verdict.candidates.len(),
            best_score: scores[0],
            avg_score,
            top_signal: verdict.candidates[0].signals.first().cloned(),
        }
    }
}

/// Combined output of duplicate detection and confidence blending
#[derive(Debug, Clone, Serialize)]
pub struct ImportAssessment {
    pub verdict: DuplicateVerdict,
    pub confidence: ConfidenceBreakdown,
}

/// Run the full scoring pipeline for one candidate.
///
/// Convenience wrapper for callers that want both halves at once; the
/// matcher and blender remain independently callable.
pub fn assess_candidate(
    matcher: &DuplicateMatcher,
    blender: &ConfidenceBlender,
    catalog: &dyn EntryLookup,
    candidate: &Candidate,
    classification: Option<&TypeClassification>,
) -> Result<ImportAssessment> {
    let verdict = matcher.detect(catalog, candidate)?;
    let confidence = blender.blend(candidate, &verdict, classification);
    Ok(ImportAssessment { verdict, confidence })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MemoryCatalog;
    use campdex_core::ExistingEntry;

    #[test]
    fn test_stats_for_empty_verdict() {
        let verdict = DuplicateVerdict {
            is_duplicate: false,
            duplicate_of: None,
            similarity_score: 0.0,
            candidates: Vec::new(),
        };

        let stats = MatchStats::compute(&verdict);

        assert_eq!(stats.candidates_count, 0);
        assert_eq!(stats.best_score, 0.0);
        assert!(stats.top_signal.is_none());
    }

    #[test]
    fn test_stats_over_ranked_candidates() {
        let catalog = MemoryCatalog::new(vec![
            ExistingEntry::new("strong", "Sunset Camping Ground", "123 Mountain Road"),
            ExistingEntry::new("weak", "Sunset Viewpoint Trail", "Elsewhere"),
        ]);
        let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road");

        let matcher = DuplicateMatcher::default();
        let verdict = matcher.detect(&catalog, &candidate).unwrap();
        let stats = MatchStats::compute(&verdict);

        assert_eq!(stats.candidates_count, 2);
        assert!((stats.best_score - 1.0).abs() < 1e-9);
        assert!(stats.avg_score < stats.best_score);
        assert!(stats.top_signal.is_some());
    }

    #[test]
    fn test_assess_candidate_combines_both_halves() {
        let catalog = MemoryCatalog::new(vec![ExistingEntry::new(
            "camp-001",
            "Sunset Camping Ground",
            "123 Mountain Road",
        )]);
        let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road");

        let matcher = DuplicateMatcher::default();
        let blender = ConfidenceBlender::default();
        let assessment = assess_candidate(&matcher, &blender, &catalog, &candidate, None).unwrap();

        assert!(assessment.verdict.is_duplicate);
        assert!(assessment.confidence.overall_score >= 0.9);
    }
}
