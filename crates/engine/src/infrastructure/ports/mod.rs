//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist so the repository layer can be swapped
//! (Neo4j -> another store) and mocked by embedding applications.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{FavoriteRepo, GenreRepo, MovieRepo, PersonRepo, RatingRepo};
