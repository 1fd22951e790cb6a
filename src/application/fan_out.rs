//! Concurrent fetching of entities referenced by hyperlinks.

use std::future::Future;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::domain::collection::Collection;
use crate::domain::reference::EntityRef;
use crate::error::{ClientError, QueryError};

/// Fetches one entity per link concurrently and keeps those that resolved.
///
/// The returned entities follow the order of `links`, not the order in which
/// fetches complete. A malformed link or a failed fetch drops only that item.
pub async fn fetch_related<T, F, Fut>(collection: Collection, links: &[String], fetch: F) -> Vec<T>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let batch = links
        .iter()
        .map(|link| EntityRef::new(link).fetch(&fetch));

    join_all(batch)
        .await
        .into_iter()
        .zip(links)
        .filter_map(|(outcome, link)| match outcome {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(%collection, link = %link, error = %e, "Dropping related entity");
                None
            }
        })
        .collect()
}

/// Runs `query` unless `token` is cancelled first.
///
/// Cancellation drops the query future and with it every fetch still in
/// flight.
pub async fn cancellable<T, Fut>(token: &CancellationToken, query: Fut) -> Result<T, QueryError>
where
    Fut: Future<Output = Result<T, QueryError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(QueryError::Cancelled),
        outcome = query => outcome,
    }
}
