//! Starship entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A starship as returned by `/starships/{id}/`.
///
/// Serialized back to clients with the upstream field names.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pilots: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub films: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}
