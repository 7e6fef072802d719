//! # campdex Ingest
//!
//! Scoring pipeline for importing third-party place listings into the
//! campsite catalog.
//!
//! Given a [`Candidate`](campdex_core::Candidate) and access to the existing
//! catalog behind the [`EntryLookup`] trait, this crate decides whether the
//! candidate duplicates a known entry and how trustworthy the imported data
//! is.
//!
//! ## Features
//!
//! - **Tiered string similarity**: exact / substring / token-overlap scoring
//! - **Multi-strategy matching**: name search, proximity radius, exact phone
//!   and website signals, deduplicated into one ranked candidate list
//! - **Confidence blending**: classifier confidence, duplicate verdict, and
//!   field completeness folded into one score with per-field warnings
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Candidate │────>│ Duplicate    │────>│ DuplicateVerdict │
//! │  (record) │     │ Matcher      │     │ (ranked matches) │
//! └───────────┘     └──────────────┘     └──────────────────┘
//!       │              │ EntryLookup             │
//!       │              ▼                         ▼
//!       │        ┌──────────────┐     ┌──────────────────────┐
//!       └───────>│ Confidence   │────>│ ConfidenceBreakdown  │
//!                │ Blender      │     │ (score + warnings)   │
//!                └──────────────┘     └──────────────────────┘
//! ```
//!
//! All routines are pure synchronous computations over already-fetched data:
//! no I/O, no shared mutable state, safe to call concurrently.

pub mod config;
pub mod confidence;
pub mod lookup;
pub mod matcher;
pub mod report;
pub mod text;

// Re-export main types for convenience
pub use config::{ConfigError, MatcherConfig};
pub use confidence::{ConfidenceBlender, ConfidenceBreakdown, ConfidenceConfig, TypeClassification};
pub use lookup::{EntryLookup, MemoryCatalog};
pub use matcher::{DuplicateMatcher, DuplicateVerdict, SimilarityResult};
pub use report::{assess_candidate, ImportAssessment, MatchStats};
pub use text::string_similarity;
