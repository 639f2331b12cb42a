//! Repository port traits.

use async_trait::async_trait;
use cinegraph_domain::{
    Genre, Movie, MovieDetails, MovieId, MovieSort, Page, Person, PersonDetails, PersonId,
    PersonSort, RatedMovie, RatingSort, Review, SimilarMovie, SimilarPerson, UserId,
};

use super::error::RepoError;

/// Movie listing and detail lookups.
///
/// Every operation takes an optional viewer id; when present, each returned
/// movie carries a `favorite` flag reflecting that user's favorites list.
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Paginated list of movies having a non-null sort property.
    async fn list(
        &self,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError>;

    /// Full detail payload for one movie; `NotFound` when no node matches.
    async fn get(&self, id: &MovieId, viewer: Option<&UserId>)
        -> Result<MovieDetails, RepoError>;

    /// Movies sharing first-degree connections with the given movie,
    /// scored `imdbRating * sharedConnections`, highest score first.
    /// Only the window of `page` applies; the score fixes the order.
    async fn list_similar(
        &self,
        id: &MovieId,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<SimilarMovie>, RepoError>;

    /// Paginated list of movies in a genre.
    async fn list_by_genre(
        &self,
        genre: &str,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError>;

    /// Paginated list of movies a person acted in.
    async fn list_by_actor(
        &self,
        actor: &PersonId,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError>;

    /// Paginated list of movies a person directed.
    async fn list_by_director(
        &self,
        director: &PersonId,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError>;
}

/// Person listing and detail lookups.
#[async_trait]
pub trait PersonRepo: Send + Sync {
    /// Paginated list of people, optionally filtered by a case-sensitive
    /// substring match on the name.
    async fn list(
        &self,
        page: &Page<PersonSort>,
        name_filter: Option<&str>,
    ) -> Result<Vec<Person>, RepoError>;

    /// One person with acted/directed credit counts; `NotFound` when absent.
    async fn get(&self, id: &PersonId) -> Result<PersonDetails, RepoError>;

    /// People sharing credits with the given person, most shared credits
    /// first. Only the window of `page` applies.
    async fn list_similar(
        &self,
        id: &PersonId,
        page: &Page<PersonSort>,
    ) -> Result<Vec<SimilarPerson>, RepoError>;
}

/// Genre catalog lookups.
#[async_trait]
pub trait GenreRepo: Send + Sync {
    /// All genres except the `(no genres listed)` sentinel, ordered by name.
    async fn list(&self) -> Result<Vec<Genre>, RepoError>;

    /// One genre by name; `NotFound` when absent.
    async fn get_by_name(&self, name: &str) -> Result<Genre, RepoError>;
}

/// Review reads and rating writes.
#[async_trait]
pub trait RatingRepo: Send + Sync {
    /// Paginated reviews for a movie.
    async fn list_for_movie(
        &self,
        movie_id: &MovieId,
        page: &Page<RatingSort>,
    ) -> Result<Vec<Review>, RepoError>;

    /// Upsert the user's rating for a movie (one RATED relationship per
    /// user/movie pair, latest write wins). `NotFound` when the user or
    /// movie is missing. The 1-5 range is expected but not enforced here.
    async fn add(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
        rating: i64,
    ) -> Result<RatedMovie, RepoError>;
}

/// Favorites list management.
#[async_trait]
pub trait FavoriteRepo: Send + Sync {
    /// Paginated list of the user's favorited movies, each flagged
    /// `favorite: true`.
    async fn list(
        &self,
        user_id: &UserId,
        page: &Page<MovieSort>,
    ) -> Result<Vec<Movie>, RepoError>;

    /// Create the HAS_FAVORITE relationship. Idempotent: repeating the call
    /// keeps the original `createdAt`. `NotFound` when the user or movie is
    /// missing.
    async fn add(&self, user_id: &UserId, movie_id: &MovieId) -> Result<Movie, RepoError>;

    /// Delete the HAS_FAVORITE relationship and return the movie flagged
    /// `favorite: false`. `NotFound` when the relationship (or either
    /// endpoint) does not exist; nothing is modified in that case.
    async fn remove(&self, user_id: &UserId, movie_id: &MovieId) -> Result<Movie, RepoError>;
}
