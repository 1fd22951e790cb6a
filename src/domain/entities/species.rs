//! Species entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A species as returned by `/species/{id}/`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    pub name: String,
    /// Classification such as `"mammal"` or `"artificial"`; absent on some records.
    pub classification: Option<String>,
    pub designation: String,
    pub average_height: String,
    pub average_lifespan: String,
    pub eye_colors: String,
    pub hair_colors: String,
    pub skin_colors: String,
    pub language: String,
    pub homeworld: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub people: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub films: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}
