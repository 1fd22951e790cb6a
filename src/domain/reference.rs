//! Hyperlink references between entities.
//!
//! The API never exposes foreign keys directly: a person lists its starships
//! as URLs such as `https://swapi.dev/api/starships/12/`. [`EntityRef`] wraps
//! such a link so callers resolve and fetch it without splitting strings
//! themselves.

use std::future::Future;

use crate::error::{ClientError, MalformedReference, QueryError};

/// Extracts the opaque identifier from a hyperlink.
///
/// Any query string or fragment is ignored. The remaining path is split on
/// `/`. For paths ending in `/` the next-to-last segment is the identifier,
/// otherwise the last one. Identifiers are never assumed to be numeric.
///
/// # Errors
///
/// Returns [`MalformedReference`] if the link has fewer than two segments or
/// the identifier segment is empty.
pub fn resolve(link: &str) -> Result<&str, MalformedReference> {
    let path = link.find(['?', '#']).map_or(link, |end| &link[..end]);

    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return Err(malformed(link));
    }

    let id = if path.ends_with('/') {
        segments[segments.len() - 2]
    } else {
        segments[segments.len() - 1]
    };

    if id.is_empty() {
        return Err(malformed(link));
    }

    Ok(id)
}

fn malformed(link: &str) -> MalformedReference {
    MalformedReference {
        link: link.to_string(),
    }
}

/// A related entity known only by its hyperlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef<'a> {
    link: &'a str,
}

impl<'a> EntityRef<'a> {
    pub fn new(link: &'a str) -> Self {
        Self { link }
    }

    /// The raw hyperlink.
    pub fn link(&self) -> &'a str {
        self.link
    }

    /// Resolves the hyperlink to its identifier.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self) -> Result<&'a str, MalformedReference> {
        resolve(self.link)
    }

    /// Resolves the hyperlink and fetches the entity with `fetch`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Reference`] when the link is malformed (no fetch
    /// is issued) and [`QueryError::Client`] when the fetch fails.
    pub async fn fetch<T, F, Fut>(self, fetch: F) -> Result<T, QueryError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let id = self.resolve()?;
        Ok(fetch(id.to_string()).await?)
    }
}
