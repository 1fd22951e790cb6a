//! Planet entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A planet as returned by the `/planets/` collection.
///
/// Numeric-looking fields are kept as strings because the API reports
/// missing values as words such as `"unknown"`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    /// Average sentient population, or a non-numeric marker such as `"unknown"`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub population: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub residents: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub films: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

impl Planet {
    /// Returns the population as an integer, or `None` when it is not numeric.
    pub fn population_value(&self) -> Option<i64> {
        self.population.trim().parse().ok()
    }
}
