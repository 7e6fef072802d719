use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    String(String),
    Uuid(Uuid),
    Integer(u64),
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryId::String(s) => write!(f, "{}", s),
            EntryId::Uuid(u) => write!(f, "{}", u),
            EntryId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId::String(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::String(s.to_string())
    }
}

impl From<u64> for EntryId {
    fn from(i: u64) -> Self {
        EntryId::Integer(i)
    }
}

impl From<Uuid> for EntryId {
    fn from(u: Uuid) -> Self {
        EntryId::Uuid(u)
    }
}

/// Where a candidate record was sourced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingSource {
    /// Imported from a Google Places lookup
    #[default]
    GooglePlaces,
    /// Entered by hand (owner submission, admin backfill)
    Manual,
}

/// An externally sourced place record being evaluated for import.
///
/// Candidates are ephemeral: they exist only for the duration of one import
/// evaluation and are never persisted by this crate. All optional fields are
/// modeled as `Option` - absence is meaningful and lowers both the duplicate
/// signal weight and the import confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Provider rating, typically on a 0-5 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub source: ListingSource,
    /// Provider-side record id (e.g. a Google place_id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
}

impl Candidate {
    /// Create a candidate with the two always-present fields
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: None,
            website: None,
            latitude: None,
            longitude: None,
            rating: None,
            source: ListingSource::default(),
            source_ref: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_source(mut self, source: ListingSource, source_ref: impl Into<String>) -> Self {
        self.source = source;
        self.source_ref = Some(source_ref.into());
        self
    }
}

/// A catalog record considered as a possible duplicate target.
///
/// Owned by the catalog and read-only to the scorer. `distance_km` is the
/// precomputed distance from the candidate under evaluation, filled in by
/// radius lookups when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingEntry {
    pub id: EntryId,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl ExistingEntry {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            phone: None,
            website: None,
            latitude: None,
            longitude: None,
            distance_km: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }
}
