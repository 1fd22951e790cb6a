use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};
use url::Url;

use super::http::check_response;
use crate::domain::client::EntityClient;
use crate::domain::collection::Collection;
use crate::domain::entities::{Film, Page, Person, Planet, Species, Starship};
use crate::error::ClientError;

/// Upper bound for a single backoff delay between retries.
const MAX_BACKOFF: Duration = Duration::from_secs(2);

/// reqwest-backed [`EntityClient`] for the Star Wars API.
///
/// Every request carries the configured timeout. Transient failures (timeouts,
/// connection errors, 5xx and 429 responses) are retried with jittered
/// exponential backoff; 4xx responses fail immediately.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use swapi_aggregator::infrastructure::swapi::HttpEntityClient;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let base = Url::parse("https://swapi.dev/api")?;
/// let client = HttpEntityClient::new(base, Duration::from_secs(10), "swapi-aggregator", 2)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpEntityClient {
    http: reqwest::Client,
    base_url: Url,
    max_retries: usize,
}

impl HttpEntityClient {
    /// Creates a client rooted at `base_url` (for example `https://swapi.dev/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Url`] when `base_url` cannot carry path segments,
    /// or [`ClientError::Http`] when the HTTP client fails to build.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        user_agent: &str,
        max_retries: usize,
    ) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url,
            max_retries,
        })
    }

    /// Builds `{base}/{segments..}/`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    fn page_url(&self, collection: Collection, page: u32) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&[collection.as_str()])?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    fn search_url(&self, collection: Collection, term: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&[collection.as_str()])?;
        url.query_pairs_mut().append_pair("search", term);
        Ok(url)
    }

    fn entity_url(&self, collection: Collection, id: &str) -> Result<Url, ClientError> {
        self.endpoint(&[collection.as_str(), id])
    }

    /// GETs `url` and decodes the body, retrying transient failures.
    async fn get_json<T: DeserializeOwned>(
        &self,
        collection: Collection,
        url: Url,
    ) -> Result<T, ClientError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(MAX_BACKOFF)
            .map(jitter)
            .take(self.max_retries);

        let outcome = RetryIf::spawn(
            strategy,
            || self.send::<T>(url.clone()),
            ClientError::is_transient,
        )
        .await;

        let label = match &outcome {
            Ok(_) => "ok",
            Err(ClientError::NotFound(_)) => "not_found",
            Err(_) => "error",
        };
        metrics::counter!(
            "swapi_requests_total",
            "collection" => collection.as_str(),
            "outcome" => label
        )
        .increment(1);

        if let Err(e) = &outcome {
            warn!(%collection, %url, error = %e, "SWAPI request failed");
        }

        outcome
    }

    async fn send<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl EntityClient for HttpEntityClient {
    async fn planets_page(&self, page: u32) -> Result<Page<Planet>, ClientError> {
        let url = self.page_url(Collection::Planets, page)?;
        self.get_json(Collection::Planets, url).await
    }

    async fn films_page(&self, page: u32) -> Result<Page<Film>, ClientError> {
        let url = self.page_url(Collection::Films, page)?;
        self.get_json(Collection::Films, url).await
    }

    async fn search_people(&self, name: &str) -> Result<Page<Person>, ClientError> {
        let url = self.search_url(Collection::People, name)?;
        self.get_json(Collection::People, url).await
    }

    async fn species(&self, id: &str) -> Result<Species, ClientError> {
        let url = self.entity_url(Collection::Species, id)?;
        self.get_json(Collection::Species, url).await
    }

    async fn starship(&self, id: &str) -> Result<Starship, ClientError> {
        let url = self.entity_url(Collection::Starships, id)?;
        self.get_json(Collection::Starships, url).await
    }

    async fn health_check(&self) -> bool {
        match self.http.get(self.base_url.clone()).send().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                warn!(status = %resp.status(), "SWAPI health check returned non-success status");
                false
            }
            Err(e) => {
                warn!(error = %e, "SWAPI health check failed");
                false
            }
        }
    }
}
