pub mod entities;
pub mod ids;
pub mod paging;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    CastMember, Genre, Movie, MovieDetails, Person, PersonDetails, RatedMovie, Review, Reviewer,
    SimilarMovie, SimilarPerson, WorkInCommon,
};

// Re-export ID types
pub use ids::{MovieId, PersonId, UserId};

// Re-export paging value objects
pub use paging::{MovieSort, Page, PersonSort, RatingSort, SortField, SortOrder};
