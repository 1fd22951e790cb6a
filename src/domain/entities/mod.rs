//! Entities decoded from the Star Wars API.
//!
//! Entities are plain data records, fetched fresh per query and dropped once
//! the query has been reduced. Relations between them are hyperlinks stored as
//! strings (see [`crate::domain::reference`]).
//!
//! # Entity Types
//!
//! - [`Planet`] - Summed by the population query
//! - [`Film`] - Anchor of the species classification query
//! - [`Person`] - Anchor of the starship query
//! - [`Species`] - Fetched per link from a film
//! - [`Starship`] - Fetched per link from a person
//! - [`Page`] - One page of any collection

pub mod film;
pub mod page;
pub mod person;
pub mod planet;
pub mod species;
pub mod starship;

pub use film::Film;
pub use page::Page;
pub use person::Person;
pub use planet::Planet;
pub use species::Species;
pub use starship::Starship;
