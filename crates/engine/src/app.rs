//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    fixtures::FixtureData,
    neo4j::Neo4jRepositories,
    ports::{FavoriteRepo, GenreRepo, MovieRepo, PersonRepo, RatingRepo},
};

/// Main application state.
///
/// Holds the repository ports and the pre-loaded fixture data. The
/// embedding web layer clones the `Arc`s it needs into its handlers.
pub struct App {
    pub movies: Arc<dyn MovieRepo>,
    pub people: Arc<dyn PersonRepo>,
    pub genres: Arc<dyn GenreRepo>,
    pub ratings: Arc<dyn RatingRepo>,
    pub favorites: Arc<dyn FavoriteRepo>,
    pub fixtures: Arc<FixtureData>,
}

impl App {
    pub fn new(repos: Neo4jRepositories, fixtures: FixtureData) -> Self {
        Self {
            movies: repos.movie,
            people: repos.person,
            genres: repos.genre,
            ratings: repos.rating,
            favorites: repos.favorite,
            fixtures: Arc::new(fixtures),
        }
    }
}
