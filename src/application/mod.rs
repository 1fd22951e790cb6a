//! Application layer: turns each logical query into a set of remote fetches.
//!
//! Services consume the [`crate::domain::client::EntityClient`] trait and
//! reduce the fetched entities into one [`crate::domain::aggregate::AggregateResult`].
//!
//! # Modules
//!
//! - [`pagination`] - Concurrent walk over every page of a collection
//! - [`fan_out`] - One concurrent fetch per hyperlink, kept in link order
//! - [`services`] - The three aggregate queries
//!
//! # Available Services
//!
//! - [`services::PopulationService`] - Total population of all planets
//! - [`services::SpeciesService`] - Species classifications of episode 1
//! - [`services::StarshipService`] - Starships flown by a named person

pub mod fan_out;
pub mod pagination;
pub mod services;
