//! Neo4j database implementations.

use neo4rs::Graph;
use std::sync::Arc;

mod query_helpers;

mod favorite_repo;
mod genre_repo;
mod movie_repo;
mod person_repo;
mod rating_repo;
pub mod schema;


pub use favorite_repo::Neo4jFavoriteRepo;
pub use genre_repo::Neo4jGenreRepo;
pub use movie_repo::Neo4jMovieRepo;
pub use person_repo::Neo4jPersonRepo;
pub use rating_repo::Neo4jRatingRepo;

/// Create all Neo4j repositories from a graph connection.
pub struct Neo4jRepositories {
    pub movie: Arc<Neo4jMovieRepo>,
    pub person: Arc<Neo4jPersonRepo>,
    pub genre: Arc<Neo4jGenreRepo>,
    pub rating: Arc<Neo4jRatingRepo>,
    pub favorite: Arc<Neo4jFavoriteRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            movie: Arc::new(Neo4jMovieRepo::new(graph.clone())),
            person: Arc::new(Neo4jPersonRepo::new(graph.clone())),
            genre: Arc::new(Neo4jGenreRepo::new(graph.clone())),
            rating: Arc::new(Neo4jRatingRepo::new(graph.clone())),
            favorite: Arc::new(Neo4jFavoriteRepo::new(graph)),
        }
    }
}
