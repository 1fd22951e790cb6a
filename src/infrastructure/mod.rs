//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`swapi`] - reqwest client for the Star Wars API

pub mod swapi;
