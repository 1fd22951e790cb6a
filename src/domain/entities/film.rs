//! Film entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A film as returned by the `/films/` collection.
///
/// Related entities are only reachable through the hyperlink arrays.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub characters: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub planets: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub starships: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vehicles: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub species: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}
