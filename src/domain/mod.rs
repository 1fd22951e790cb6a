//! Domain layer: entities, references and the upstream client contract.
//!
//! The domain layer has no dependency on HTTP, configuration or the web
//! surface. Everything the aggregate queries know about the upstream API is
//! expressed here.
//!
//! # Architecture
//!
//! - [`entities`] - Decoded records (planets, films, people, species, starships, pages)
//! - [`collection`] - Names of the upstream collections
//! - [`reference`] - Hyperlink-to-identifier resolution
//! - [`client`] - [`client::EntityClient`] trait implemented by infrastructure
//! - [`aggregate`] - [`aggregate::AggregateResult`] envelope returned by queries

pub mod aggregate;
pub mod client;
pub mod collection;
pub mod entities;
pub mod reference;
