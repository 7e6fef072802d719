//! # campdex
//!
//! Duplicate detection and import-confidence scoring for a campsite
//! directory.
//!
//! campdex evaluates externally sourced place listings (Google-Places-style
//! candidates) against an existing catalog: it finds likely duplicate
//! entries by blending fuzzy name/address similarity, geographic proximity,
//! and exact phone/website signals, and it rates how trustworthy an import
//! is, with human-readable warnings for missing data.
//!
//! ## Quick Start
//!
//! ```rust
//! use campdex::prelude::*;
//!
//! // The existing catalog, behind the EntryLookup trait
//! let catalog = MemoryCatalog::new(vec![
//!     ExistingEntry::new("camp-001", "Sunset Camping Ground", "123 Mountain Road, Chiang Mai")
//!         .with_phone("081-234-5678"),
//! ]);
//!
//! // An incoming listing from the import pipeline
//! let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road, Chiang Mai")
//!     .with_rating(4.6);
//!
//! let matcher = DuplicateMatcher::default();
//! let verdict = matcher.detect(&catalog, &candidate).unwrap();
//! assert!(verdict.is_duplicate);
//!
//! let blender = ConfidenceBlender::default();
//! let confidence = blender.blend(&candidate, &verdict, None);
//! assert!(confidence.overall_score >= 0.9);
//! ```
//!
//! ## Crate Structure
//!
//! campdex is composed of two crates:
//!
//! - [`campdex-core`](https://docs.rs/campdex-core) - Place records, entry
//!   ids, geo distance, contact normalization
//! - [`campdex-ingest`](https://docs.rs/campdex-ingest) - String similarity,
//!   duplicate matching, confidence blending, match reporting
//!
//! ## Features
//!
//! - **Tiered string similarity**: exact / substring / token-overlap scoring
//! - **Multi-strategy matching**: name search, proximity radius, exact phone
//!   and website signals, deduplicated into one ranked candidate list
//! - **Confidence blending**: classifier confidence, duplicate verdict, and
//!   field completeness folded into one clamped score with warnings
//! - **Pure functions**: no I/O, no shared state, safe to call concurrently

// Re-export core types
pub use campdex_core::{
    haversine_km, in_valid_range, normalize_phone, normalize_website, Candidate, EntryId, Error,
    ExistingEntry, ListingSource, Result,
};

// Re-export the scoring pipeline
pub use campdex_ingest::{
    assess_candidate, string_similarity, ConfidenceBlender, ConfidenceBreakdown, ConfidenceConfig,
    ConfigError, DuplicateMatcher, DuplicateVerdict, EntryLookup, ImportAssessment, MatchStats,
    MatcherConfig, MemoryCatalog, SimilarityResult, TypeClassification,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        assess_candidate, haversine_km, string_similarity, Candidate, ConfidenceBlender,
        ConfidenceBreakdown, ConfidenceConfig, DuplicateMatcher, DuplicateVerdict, EntryId,
        EntryLookup, Error, ExistingEntry, ImportAssessment, ListingSource, MatchStats,
        MatcherConfig, MemoryCatalog, Result, SimilarityResult, TypeClassification,
    };
}
