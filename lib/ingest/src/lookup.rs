//! Catalog access for the duplicate matcher
//!
//! The matcher never talks to a database directly: the catalog sits behind
//! [`EntryLookup`], and the concrete query mechanism (full-text search,
//! radius query, exact index lookup) is the caller's collaborator. A lookup
//! failure is an error, never an empty result - the matcher must not report
//! "no duplicates" when it could not actually search.

use campdex_core::{haversine_km, normalize_phone, normalize_website, ExistingEntry, Result};

use crate::text::string_similarity;

/// Data-access capability for fetching existing catalog entries.
///
/// `find_by_phone` and `find_by_website` receive already-normalized values
/// (see [`normalize_phone`] and [`normalize_website`]); implementations are
/// expected to normalize their stored side the same way.
pub trait EntryLookup {
    /// Entries whose names are likely matches for `name`
    fn search_by_name(&self, name: &str) -> Result<Vec<ExistingEntry>>;

    /// Entries within `radius_km` of the given point, with `distance_km`
    /// filled in on each returned entry
    fn search_near(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<ExistingEntry>>;

    /// Entries sharing a normalized phone number
    fn find_by_phone(&self, phone: &str) -> Result<Vec<ExistingEntry>>;

    /// Entries sharing a normalized website
    fn find_by_website(&self, website: &str) -> Result<Vec<ExistingEntry>>;
}

/// In-memory catalog with linear-scan lookups.
///
/// Suitable for tests, small datasets, and embedding the scorer without a
/// backing store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: Vec<ExistingEntry>,
}

impl MemoryCatalog {
    pub fn new(entries: Vec<ExistingEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: ExistingEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryLookup for MemoryCatalog {
    fn search_by_name(&self, name: &str) -> Result<Vec<ExistingEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| string_similarity(name, &entry.name) > 0.0)
            .cloned()
            .collect())
    }

    fn search_near(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<ExistingEntry>> {
        Ok(self
            .entries
            .iter()
            .filter_map(|entry| {
                let (entry_lat, entry_lon) = (entry.latitude?, entry.longitude?);
                let distance = haversine_km(lat, lon, entry_lat, entry_lon);
                if distance.is_finite() && distance <= radius_km {
                    Some(entry.clone().with_distance_km(distance))
                } else {
                    None
                }
            })
            .collect())
    }

    fn find_by_phone(&self, phone: &str) -> Result<Vec<ExistingEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .phone
                    .as_deref()
                    .is_some_and(|stored| normalize_phone(stored) == phone)
            })
            .cloned()
            .collect())
    }

    fn find_by_website(&self, website: &str) -> Result<Vec<ExistingEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .website
                    .as_deref()
                    .is_some_and(|stored| normalize_website(stored) == website)
            })
            .cloned()
            .collect())
    }
}
