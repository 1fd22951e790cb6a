//! Person entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A person as returned by the `/people/` collection and its search.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub films: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub species: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vehicles: Vec<String>,
    /// Links to the starships this person has piloted.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub starships: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}
