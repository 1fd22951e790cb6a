//! Total population across every planet.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use super::finish;
use crate::application::fan_out::cancellable;
use crate::application::pagination::PaginationWalker;
use crate::domain::aggregate::AggregateResult;
use crate::domain::client::EntityClient;
use crate::domain::collection::Collection;
use crate::domain::entities::{Page, Planet};
use crate::error::QueryError;

/// Service summing the population of all planets.
///
/// Walks the whole planet collection. Planets whose population is not a
/// number (the API reports `"unknown"`) are left out of the sum rather than
/// counted as zero.
pub struct PopulationService<C: EntityClient + ?Sized = dyn EntityClient> {
    client: Arc<C>,
    walker: PaginationWalker,
    shutdown: CancellationToken,
}

impl<C: EntityClient + ?Sized> PopulationService<C> {
    /// Creates a new population service.
    pub fn new(client: Arc<C>, walker: PaginationWalker, shutdown: CancellationToken) -> Self {
        Self {
            client,
            walker,
            shutdown,
        }
    }

    /// Computes the total population as a decimal string.
    ///
    /// Always succeeds once every page has been fetched; an empty collection
    /// sums to `"0"`. A failed page fetch fails the whole query.
    pub async fn compute_total_population(&self) -> AggregateResult<String> {
        let outcome = cancellable(&self.shutdown, self.sum_population()).await;
        finish("total_population", outcome.map(|total| total.to_string()))
    }

    async fn sum_population(&self) -> Result<i128, QueryError> {
        let pages = self
            .walker
            .fetch_all_pages(Collection::Planets, |page| self.client.planets_page(page))
            .await?;

        let total = sum_pages(&pages);
        info!(pages = pages.len(), total = %total, "Summed planet population");

        Ok(total)
    }
}

/// Sums numeric populations; the accumulator is wider than a single value so
/// large totals never overflow.
fn sum_pages(pages: &[Page<Planet>]) -> i128 {
    pages
        .iter()
        .flat_map(|page| &page.results)
        .filter_map(Planet::population_value)
        .map(i128::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregate::FailureKind;
    use crate::domain::client::MockEntityClient;
    use crate::error::ClientError;

    fn planet(population: &str) -> Planet {
        Planet {
            population: population.to_string(),
            ..Default::default()
        }
    }

    fn service(mock: MockEntityClient) -> PopulationService<MockEntityClient> {
        PopulationService::new(
            Arc::new(mock),
            PaginationWalker::default(),
            CancellationToken::new(),
        )
    }

    #[tokio::test]
    async fn test_unknown_population_is_excluded() {
        let mut mock = MockEntityClient::new();
        mock.expect_planets_page()
            .withf(|page| *page == 1)
            .times(1)
            .returning(|_| {
                Ok(Page::new(
                    3,
                    vec![planet("1000"), planet("unknown"), planet("2000")],
                ))
            });

        let result = service(mock).compute_total_population().await;

        assert!(result.success);
        assert_eq!(result.message, "Success");
        assert_eq!(result.data, "3000");
    }

    #[tokio::test]
    async fn test_null_population_is_excluded() {
        let mut mock = MockEntityClient::new();
        mock.expect_planets_page().times(1).returning(|_| {
            let page = serde_json::from_value(serde_json::json!({
                "count": 3,
                "results": [
                    {"name": "Tatooine", "population": "200000"},
                    {"name": "Stewjon", "population": null},
                    {"name": "Yavin IV", "population": "1000"}
                ]
            }))
            .unwrap();
            Ok(page)
        });

        let result = service(mock).compute_total_population().await;

        assert!(result.success);
        assert_eq!(result.data, "201000");
    }

    #[tokio::test]
    async fn test_sums_across_pages() {
        let mut mock = MockEntityClient::new();
        mock.expect_planets_page().times(3).returning(|page| {
            let results = match page {
                1 => (0..10).map(|_| planet("100")).collect(),
                2 => (0..10).map(|_| planet("10")).collect(),
                3 => vec![planet("1"), planet("unknown")],
                _ => panic!("unexpected page {page}"),
            };
            Ok(Page::new(22, results))
        });

        let result = service(mock).compute_total_population().await;

        assert!(result.success);
        assert_eq!(result.data, "1101");
    }

    #[tokio::test]
    async fn test_empty_collection_sums_to_zero() {
        let mut mock = MockEntityClient::new();
        mock.expect_planets_page()
            .times(1)
            .returning(|_| Ok(Page::new(0, vec![])));

        let result = service(mock).compute_total_population().await;

        assert!(result.success);
        assert_eq!(result.data, "0");
    }

    #[tokio::test]
    async fn test_total_exceeding_i64() {
        let mut mock = MockEntityClient::new();
        mock.expect_planets_page().times(1).returning(|_| {
            Ok(Page::new(
                2,
                vec![planet(&i64::MAX.to_string()), planet(&i64::MAX.to_string())],
            ))
        });

        let result = service(mock).compute_total_population().await;

        assert_eq!(result.data, (i128::from(i64::MAX) * 2).to_string());
    }

    #[tokio::test]
    async fn test_failed_page_fails_query() {
        let mut mock = MockEntityClient::new();
        mock.expect_planets_page().returning(|page| {
            if page == 2 {
                Err(ClientError::Api {
                    status: 500,
                    message: "Internal Server Error".to_string(),
                })
            } else {
                Ok(Page::new(15, vec![planet("5")]))
            }
        });

        let result = service(mock).compute_total_population().await;

        assert!(!result.success);
        assert_eq!(result.data, "");
        assert_eq!(result.failure, Some(FailureKind::Upstream));
    }

    #[tokio::test]
    async fn test_shutdown_cancels_query() {
        let mock = MockEntityClient::new();
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let service = PopulationService::new(
            Arc::new(mock),
            PaginationWalker::default(),
            shutdown,
        );
        let result = service.compute_total_population().await;

        assert!(!result.success);
        assert_eq!(result.message, "query cancelled");
        assert_eq!(result.failure, Some(FailureKind::Cancelled));
    }
}
