//! Domain entities - typed projections of the movie graph

mod genre;
mod movie;
mod person;
mod review;

pub use genre::Genre;
pub use movie::{Movie, MovieDetails, RatedMovie, SimilarMovie};
pub use person::{CastMember, Person, PersonDetails, SimilarPerson, WorkInCommon};
pub use review::{Review, Reviewer};
