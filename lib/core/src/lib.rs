//! # campdex Core
//!
//! Core types for the campdex listing-import scorer.
//!
//! This crate provides the fundamental data structures and primitives:
//!
//! - [`Candidate`] - An externally sourced place record under evaluation
//! - [`ExistingEntry`] - A catalog record considered as a duplicate target
//! - [`EntryId`] - Catalog entry identifier (string, UUID, or integer)
//! - [`haversine_km`] - Great-circle distance between two coordinates
//! - [`normalize_phone`] / [`normalize_website`] - Exact-signal normalization
//!
//! ## Example
//!
//! ```rust
//! use campdex_core::{Candidate, ExistingEntry, EntryId, haversine_km};
//!
//! let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road, Chiang Mai")
//!     .with_phone("081-234-5678")
//!     .with_coordinates(18.7883, 98.9853);
//!
//! let entry = ExistingEntry::new(
//!     EntryId::from("camp-001"),
//!     "Sunset Camping Ground",
//!     "123 Mountain Road, Chiang Mai",
//! );
//!
//! let km = haversine_km(13.7563, 100.5018, 18.7883, 98.9853);
//! assert!(km > 500.0);
//! # let _ = (candidate, entry);
//! ```

pub mod error;
pub mod geo;
pub mod normalize;
pub mod place;

pub use error::{Error, Result};
pub use geo::{haversine_km, in_valid_range};
pub use normalize::{normalize_phone, normalize_website};
pub use place::{Candidate, EntryId, ExistingEntry, ListingSource};
