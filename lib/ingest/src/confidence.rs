//! Import-confidence blending and data-quality validation
//!
//! Folds the type-classifier's own confidence, the duplicate verdict, and
//! field completeness into one overall score, emitting a human-readable
//! warning per missing or low-quality field.

use campdex_core::Candidate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::DuplicateVerdict;

/// Output of the upstream campsite-type classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeClassification {
    /// Classified campsite type, e.g. "tent", "rv_park", "glamping"
    pub label: String,
    /// The classifier's own confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// Blended trust score plus data-quality warnings for a candidate
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceBreakdown {
    /// Overall confidence in [0.0, 1.0]
    pub overall_score: f64,
    /// One entry per detected issue; empty when the record is clean
    pub warnings: Vec<String>,
}

/// Tunables for the confidence blend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Starting score when no type classification is available
    pub baseline: f64,
    /// Added when the candidate is a confirmed duplicate of a known place
    pub duplicate_boost: f64,
    /// Subtracted independently per missing or low-quality field
    pub missing_field_penalty: f64,
    /// Ratings at or below this are flagged as low quality
    pub low_rating_threshold: f64,
    /// Confirmed duplicates never score below this
    pub duplicate_floor: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            duplicate_boost: 0.25,
            missing_field_penalty: 0.1,
            low_rating_threshold: 3.0,
            duplicate_floor: 0.9,
        }
    }
}

/// Stateless confidence blender
#[derive(Debug, Clone, Default)]
pub struct ConfidenceBlender {
    config: ConfidenceConfig,
}

impl ConfidenceBlender {
    pub fn new(config: ConfidenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Blend per-field signals into one overall confidence score.
    ///
    /// Starts from the classifier's confidence when provided, boosts
    /// confirmed duplicates (a match against a known place is near-certainty
    /// the record is real), penalizes each missing expected field with one
    /// warning apiece, clamps to [0, 1], and finally floors confirmed
    /// duplicates at the configured minimum.
    pub fn blend(
        &self,
        candidate: &Candidate,
        verdict: &DuplicateVerdict,
        classification: Option<&TypeClassification>,
    ) -> ConfidenceBreakdown {
        let mut score = classification
            .map(|c| c.confidence)
            .unwrap_or(self.config.baseline);
        let mut warnings = Vec::new();

        if verdict.is_duplicate {
            score += self.config.duplicate_boost;
        }

        if candidate.phone.as_deref().map_or(true, |p| p.trim().is_empty()) {
            score -= self.config.missing_field_penalty;
            warnings.push("Missing phone number".to_string());
        }

        if candidate.website.as_deref().map_or(true, |w| w.trim().is_empty()) {
            score -= self.config.missing_field_penalty;
            warnings.push("Missing website".to_string());
        }

        if candidate
            .rating
            .map_or(true, |r| r <= self.config.low_rating_threshold)
        {
            score -= self.config.missing_field_penalty;
            warnings.push("Low or missing rating".to_string());
        }

        score = score.clamp(0.0, 1.0);
        if verdict.is_duplicate {
            score = score.max(self.config.duplicate_floor);
        }

        debug!(
            overall_score = score,
            warnings = warnings.len(),
            "confidence blend complete"
        );

        ConfidenceBreakdown {
            overall_score: score,
            warnings,
        }
    }
}
