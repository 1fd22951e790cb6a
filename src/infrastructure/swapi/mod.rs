//! HTTP access to the Star Wars API.
//!
//! Provides [`HttpEntityClient`], the production implementation of
//! [`crate::domain::client::EntityClient`].

mod client;
mod http;

pub use client::HttpEntityClient;
