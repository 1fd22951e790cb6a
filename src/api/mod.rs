//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into aggregate queries and maps their
//! results onto status codes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request parameters and health reports
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
