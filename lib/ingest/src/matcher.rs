//! Duplicate detection for incoming candidates
//!
//! Pulls a candidate pool from up to three lookup strategies (name search,
//! proximity radius, exact phone/website signals), scores every pooled entry,
//! and classifies the candidate as a duplicate when the best score clears the
//! configured threshold.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use campdex_core::{
    haversine_km, in_valid_range, normalize_phone, normalize_website, Candidate, EntryId, ExistingEntry,
    Result,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::lookup::EntryLookup;
use crate::text::string_similarity;

/// Similarity of one catalog entry to the candidate under evaluation
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult {
    /// The matched catalog entry
    pub entry_id: EntryId,
    /// Similarity score in [0.0, 1.0]
    pub score: f64,
    /// Human-readable contributing signals
    pub signals: Vec<String>,
}

/// The matcher's decision for one candidate.
///
/// `is_duplicate` holds exactly when a best match exists and its score
/// strictly exceeds the configured threshold; `duplicate_of` is that entry's
/// id, absent otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateVerdict {
    pub is_duplicate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<EntryId>,
    /// Score of the best match, 0.0 when no candidates were found
    pub similarity_score: f64,
    /// All pooled matches, deduplicated by entry id, sorted descending by score
    pub candidates: Vec<SimilarityResult>,
}

/// Stateless duplicate matcher.
///
/// Holds only validated configuration; the catalog is passed explicitly to
/// [`detect`](DuplicateMatcher::detect), so a single matcher can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct DuplicateMatcher {
    config: MatcherConfig,
}

impl Default for DuplicateMatcher {
    fn default() -> Self {
        // The default config always validates
        Self::new(MatcherConfig::default()).expect("default matcher config is valid")
    }
}

impl DuplicateMatcher {
    /// Create a matcher, validating and normalizing the configuration
    pub fn new(mut config: MatcherConfig) -> Result<Self> {
        config.validate_and_normalize()?;
        Ok(Self { config })
    }

    /// Get a reference to the validated configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Evaluate a candidate against the catalog.
    ///
    /// Lookup failures propagate to the caller; a candidate with no matches
    /// anywhere yields a clean non-duplicate verdict with an empty candidate
    /// list.
    pub fn detect(&self, catalog: &dyn EntryLookup, candidate: &Candidate) -> Result<DuplicateVerdict> {
        let mut pool: AHashMap<EntryId, SimilarityResult> = AHashMap::new();

        // Exact contact signals are deterministic full matches
        if let Some(phone) = candidate.phone.as_deref() {
            let digits = normalize_phone(phone);
            if !digits.is_empty() {
                for entry in catalog.find_by_phone(&digits)? {
                    merge_result(&mut pool, exact_match(&entry, "exact phone match"));
                }
            }
        }

        if let Some(website) = candidate.website.as_deref() {
            let domain = normalize_website(website);
            if !domain.is_empty() {
                for entry in catalog.find_by_website(&domain)? {
                    merge_result(&mut pool, exact_match(&entry, "exact website match"));
                }
            }
        }

        // Fuzzy pool: name search always, radius search when the candidate
        // carries usable coordinates
        let mut fuzzy_pool = catalog.search_by_name(&candidate.name)?;
        if let (Some(lat), Some(lon)) = (candidate.latitude, candidate.longitude) {
            if in_valid_range(lat, lon) {
                fuzzy_pool.extend(catalog.search_near(lat, lon, self.config.proximity_radius_km)?);
            }
        }

        for entry in &fuzzy_pool {
            let result = self.score_entry(candidate, entry);
            trace!(entry = %result.entry_id, score = result.score, "scored catalog entry");
            merge_result(&mut pool, result);
        }

        let mut candidates: Vec<SimilarityResult> = pool.into_values().collect();
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let similarity_score = candidates.first().map(|best| best.score).unwrap_or(0.0);
        let is_duplicate = similarity_score > self.config.duplicate_threshold;
        let duplicate_of = is_duplicate
            .then(|| candidates.first().map(|best| best.entry_id.clone()))
            .flatten();

        debug!(
            candidates = candidates.len(),
            best_score = similarity_score,
            is_duplicate,
            "duplicate detection complete"
        );

        Ok(DuplicateVerdict {
            is_duplicate,
            duplicate_of,
            similarity_score,
            candidates,
        })
    }

    /// Weighted composite of name similarity, address similarity, and
    /// proximity, re-normalized over the signals actually available
    fn score_entry(&self, candidate: &Candidate, entry: &ExistingEntry) -> SimilarityResult {
        let name_sim = string_similarity(&candidate.name, &entry.name);
        let address_sim = string_similarity(&candidate.address, &entry.address);

        let mut score = self.config.name_weight * name_sim + self.config.address_weight * address_sim;
        let mut weight_total = self.config.name_weight + self.config.address_weight;
        let mut signals = vec![
            format!("name similarity {:.2}", name_sim),
            format!("address similarity {:.2}", address_sim),
        ];

        if let Some(km) = self.entry_distance(candidate, entry) {
            let proximity = (-km / self.config.proximity_decay_km).exp();
            score += self.config.proximity_weight * proximity;
            weight_total += self.config.proximity_weight;
            signals.push(format!("{:.2} km away", km));
        }

        let score = if weight_total > 0.0 { score / weight_total } else { 0.0 };

        SimilarityResult {
            entry_id: entry.id.clone(),
            score,
            signals,
        }
    }

    /// Distance between candidate and entry in km, if a finite one is known.
    ///
    /// Prefers the lookup's precomputed `distance_km`; otherwise derives it
    /// from coordinates when both sides carry an in-range pair. NaN from bad
    /// geometry is treated as "no proximity signal".
    fn entry_distance(&self, candidate: &Candidate, entry: &ExistingEntry) -> Option<f64> {
        let km = entry.distance_km.or_else(|| {
            let (cand_lat, cand_lon) = (candidate.latitude?, candidate.longitude?);
            let (entry_lat, entry_lon) = (entry.latitude?, entry.longitude?);
            (in_valid_range(cand_lat, cand_lon) && in_valid_range(entry_lat, entry_lon))
                .then(|| haversine_km(cand_lat, cand_lon, entry_lat, entry_lon))
        })?;
        km.is_finite().then_some(km)
    }
}

fn exact_match(entry: &ExistingEntry, signal: &str) -> SimilarityResult {
    SimilarityResult {
        entry_id: entry.id.clone(),
        score: 1.0,
        signals: vec![signal.to_string()],
    }
}

/// Keep the highest score seen for each entry id across all strategies
fn merge_result(pool: &mut AHashMap<EntryId, SimilarityResult>, result: SimilarityResult) {
    match pool.entry(result.entry_id.clone()) {
        Entry::Occupied(mut occupied) => {
            if result.score > occupied.get().score {
                occupied.insert(result);
            }
        }
        Entry::Vacant(vacant) => {
            vacant.insert(result);
        }
    }
}
