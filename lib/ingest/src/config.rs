//! Matcher configuration
//!
//! Tunables for the duplicate matcher: composite-score weights, the
//! "nearby" pool radius, proximity decay, and the duplicate threshold.
//! Weights are re-normalized to sum to 1.0 at validation time.

use serde::{Deserialize, Serialize};

/// Configuration for the duplicate matcher.
///
/// Name and address dominate proximity in the defaults: raw proximity is a
/// weak duplicate signal (two different businesses can share a street).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatcherConfig {
    /// Weight of name similarity in the composite score
    pub name_weight: f64,
    /// Weight of address similarity in the composite score
    pub address_weight: f64,
    /// Weight of the proximity signal in the composite score
    pub proximity_weight: f64,
    /// Radius of the location-based candidate pool, in kilometers
    pub proximity_radius_km: f64,
    /// E-folding distance of the proximity score; entries further than
    /// about one kilometer contribute near-zero
    pub proximity_decay_km: f64,
    /// A candidate is a duplicate when its best score strictly exceeds this
    pub duplicate_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            name_weight: 0.45,
            address_weight: 0.35,
            proximity_weight: 0.20,
            proximity_radius_km: 3.0,
            proximity_decay_km: 0.2,
            duplicate_threshold: 0.8,
        }
    }
}

impl MatcherConfig {
    /// Validate the configuration
    /// - Checks that weights are non-negative and sum to a positive total
    /// - Checks that distances are positive and the threshold is in (0, 1)
    /// - Normalizes the three weights to sum to 1.0 if they don't
    pub fn validate_and_normalize(&mut self) -> Result<(), ConfigError> {
        for (name, weight) in [
            ("name_weight", self.name_weight),
            ("address_weight", self.address_weight),
            ("proximity_weight", self.proximity_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::NegativeWeight(name));
            }
        }

        let weight_sum = self.name_weight + self.address_weight + self.proximity_weight;
        if weight_sum <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        for (name, distance) in [
            ("proximity_radius_km", self.proximity_radius_km),
            ("proximity_decay_km", self.proximity_decay_km),
        ] {
            if !distance.is_finite() || distance <= 0.0 {
                return Err(ConfigError::InvalidDistance(name));
            }
        }

        if !self.duplicate_threshold.is_finite()
            || self.duplicate_threshold <= 0.0
            || self.duplicate_threshold >= 1.0
        {
            return Err(ConfigError::InvalidThreshold(self.duplicate_threshold));
        }

        if (weight_sum - 1.0).abs() > 0.001 {
            self.name_weight /= weight_sum;
            self.address_weight /= weight_sum;
            self.proximity_weight /= weight_sum;
        }

        Ok(())
    }
}

/// Errors that can occur during matcher configuration validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Weight '{0}' must be a non-negative finite number")]
    NegativeWeight(&'static str),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,

    #[error("Distance '{0}' must be positive and finite")]
    InvalidDistance(&'static str),

    #[error("Duplicate threshold must be in (0, 1), got {0}")]
    InvalidThreshold(f64),
}

impl From<ConfigError> for campdex_core::Error {
    fn from(err: ConfigError) -> Self {
        campdex_core::Error::InvalidConfig(err.to_string())
    }
}
