#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use swapi_aggregator::domain::client::EntityClient;
use swapi_aggregator::domain::entities::{Film, Page, Person, Planet, Species, Starship};
use swapi_aggregator::error::ClientError;
use swapi_aggregator::state::AppState;
use tokio_util::sync::CancellationToken;

pub const PAGE_SIZE: usize = 10;

const API: &str = "https://swapi.dev/api";

/// In-memory stand-in for the Star Wars API.
///
/// Requests are keyed as `planets?page=2`, `people?search=Luke`,
/// `species/3` or `starships/12`. Each key can be delayed or made to fail,
/// and every request is recorded.
#[derive(Default)]
pub struct FakeEntityClient {
    planets: Vec<Planet>,
    films: Vec<Film>,
    people: Vec<Person>,
    species: HashMap<String, Species>,
    starships: HashMap<String, Starship>,
    delays: HashMap<String, Duration>,
    failures: HashSet<String>,
    unhealthy: bool,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeEntityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_planets(mut self, planets: Vec<Planet>) -> Self {
        self.planets = planets;
        self
    }

    pub fn with_films(mut self, films: Vec<Film>) -> Self {
        self.films = films;
        self
    }

    pub fn with_people(mut self, people: Vec<Person>) -> Self {
        self.people = people;
        self
    }

    pub fn with_species(mut self, id: &str, species: Species) -> Self {
        self.species.insert(id.to_string(), species);
        self
    }

    pub fn with_starship(mut self, id: &str, starship: Starship) -> Self {
        self.starships.insert(id.to_string(), starship);
        self
    }

    pub fn with_delay(mut self, key: &str, millis: u64) -> Self {
        self.delays
            .insert(key.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn failing(mut self, key: &str) -> Self {
        self.failures.insert(key.to_string());
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.unhealthy = true;
        self
    }

    /// Keys of every request received, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests whose key starts with `prefix`.
    pub fn request_count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|key| key.starts_with(prefix))
            .count()
    }

    /// Highest number of requests that were in flight at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn hit(&self, key: String) -> Result<(), ClientError> {
        self.requests.lock().unwrap().push(key.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(&key)
            .copied()
            .unwrap_or(Duration::from_millis(1));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failures.contains(&key) {
            return Err(ClientError::Api {
                status: 500,
                message: format!("scripted failure for {key}"),
            });
        }
        Ok(())
    }

    fn page_of<T: Clone>(&self, items: &[T], collection: &str, page: u32) -> Result<Page<T>, ClientError> {
        let not_found = || ClientError::NotFound(format!("{API}/{collection}/?page={page}"));
        if page == 0 {
            return Err(not_found());
        }

        let start = (page as usize - 1) * PAGE_SIZE;
        if start >= items.len() && page > 1 {
            return Err(not_found());
        }

        let end = (start + PAGE_SIZE).min(items.len());
        let mut result = Page::new(items.len() as u64, items[start..end].to_vec());
        if end < items.len() {
            result.next = Some(format!("{API}/{collection}/?page={}", page + 1));
        }
        if page > 1 {
            result.previous = Some(format!("{API}/{collection}/?page={}", page - 1));
        }
        Ok(result)
    }
}

#[async_trait]
impl EntityClient for FakeEntityClient {
    async fn planets_page(&self, page: u32) -> Result<Page<Planet>, ClientError> {
        self.hit(format!("planets?page={page}")).await?;
        self.page_of(&self.planets, "planets", page)
    }

    async fn films_page(&self, page: u32) -> Result<Page<Film>, ClientError> {
        self.hit(format!("films?page={page}")).await?;
        self.page_of(&self.films, "films", page)
    }

    async fn search_people(&self, name: &str) -> Result<Page<Person>, ClientError> {
        self.hit(format!("people?search={name}")).await?;
        let needle = name.to_lowercase();
        let matches: Vec<Person> = self
            .people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Page::new(matches.len() as u64, matches))
    }

    async fn species(&self, id: &str) -> Result<Species, ClientError> {
        self.hit(format!("species/{id}")).await?;
        self.species
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("{API}/species/{id}/")))
    }

    async fn starship(&self, id: &str) -> Result<Starship, ClientError> {
        self.hit(format!("starships/{id}")).await?;
        self.starships
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("{API}/starships/{id}/")))
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }
}

pub fn link(collection: &str, id: &str) -> String {
    format!("{API}/{collection}/{id}/")
}

pub fn planet(name: &str, population: &str) -> Planet {
    Planet {
        name: name.to_string(),
        population: population.to_string(),
        ..Default::default()
    }
}

pub fn film(title: &str, episode_id: u32, species_ids: &[&str]) -> Film {
    Film {
        title: title.to_string(),
        episode_id,
        species: species_ids.iter().map(|id| link("species", id)).collect(),
        ..Default::default()
    }
}

pub fn person(name: &str, starship_ids: &[&str]) -> Person {
    Person {
        name: name.to_string(),
        starships: starship_ids.iter().map(|id| link("starships", id)).collect(),
        ..Default::default()
    }
}

pub fn species(name: &str, classification: Option<&str>) -> Species {
    Species {
        name: name.to_string(),
        classification: classification.map(str::to_string),
        ..Default::default()
    }
}

pub fn starship(name: &str, model: &str) -> Starship {
    Starship {
        name: name.to_string(),
        model: model.to_string(),
        ..Default::default()
    }
}

/// Twelve planets over two pages; the numeric populations sum to
/// `1107631201000`.
pub fn planets() -> Vec<Planet> {
    vec![
        planet("Tatooine", "200000"),
        planet("Alderaan", "2000000000"),
        planet("Yavin IV", "1000"),
        planet("Hoth", "unknown"),
        planet("Dagobah", "unknown"),
        planet("Bespin", "6000000"),
        planet("Endor", "30000000"),
        planet("Naboo", "4500000000"),
        planet("Coruscant", "1000000000000"),
        planet("Kamino", "1000000000"),
        planet("Geonosis", "100000000000"),
        planet("Utapau", "95000000"),
    ]
}

pub const TOTAL_POPULATION: &str = "1107631201000";

/// A small but realistic slice of the API.
pub fn galaxy() -> FakeEntityClient {
    FakeEntityClient::new()
        .with_planets(planets())
        .with_films(vec![
            film("A New Hope", 4, &["1", "2", "3"]),
            film("The Empire Strikes Back", 5, &["1", "2", "6"]),
            film("Return of the Jedi", 6, &["1", "2", "5"]),
            film("The Phantom Menace", 1, &["1", "2", "6", "11", "12"]),
            film("Attack of the Clones", 2, &["1", "2", "6"]),
            film("Revenge of the Sith", 3, &["1", "2", "3"]),
        ])
        .with_people(vec![
            person("Luke Skywalker", &["12", "22"]),
            person("Han Solo", &["10", "22"]),
            person("Darth Vader", &["13"]),
            person("Leia Organa", &[]),
        ])
        .with_species("1", species("Human", Some("mammal")))
        .with_species("2", species("Droid", Some("artificial")))
        .with_species("3", species("Wookie", Some("mammal")))
        .with_species("5", species("Hutt", Some("gastropod")))
        .with_species("6", species("Yoda's species", Some("mammal")))
        .with_species("11", species("Gungan", Some("amphibian")))
        .with_species("12", species("Toydarian", Some("mammal")))
        .with_starship("10", starship("Millennium Falcon", "YT-1300 light freighter"))
        .with_starship("12", starship("X-wing", "T-65 X-wing"))
        .with_starship("13", starship("TIE Advanced x1", "Twin Ion Engine Advanced x1"))
        .with_starship("22", starship("Imperial shuttle", "Lambda-class T-4a shuttle"))
}

pub fn create_test_state(client: Arc<FakeEntityClient>) -> AppState {
    AppState::new(client, PAGE_SIZE as u64, CancellationToken::new())
}
