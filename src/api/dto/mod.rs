//! Data Transfer Objects for API requests and responses.
//!
//! Query results are serialized straight from
//! [`crate::domain::aggregate::AggregateResult`]; the types here cover
//! request parameters and the health report.

pub mod health;
pub mod starships;
