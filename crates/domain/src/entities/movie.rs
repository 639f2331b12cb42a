//! Movie catalog entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::person::{CastMember, Person};
use crate::ids::MovieId;

/// A movie row as projected by the list queries.
///
/// The scalar columns of the catalog are typed; remaining node properties
/// ride along in `extra` because the property set per movie is open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub tmdb_id: MovieId,
    pub title: String,
    pub year: Option<i64>,
    pub released: Option<String>,
    pub runtime: Option<i64>,
    pub imdb_rating: Option<f64>,
    pub imdb_votes: Option<i64>,
    pub imdb_id: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    pub url: Option<String>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub languages: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
    /// Whether the viewing user has the movie on their favorites list.
    #[serde(default)]
    pub favorite: bool,
    /// Passthrough for node properties not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Full detail payload for one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub movie: Movie,
    pub actors: Vec<CastMember>,
    pub directors: Vec<Person>,
    pub genres: Vec<String>,
    pub rating_count: i64,
    pub rating_avg: Option<f64>,
}

/// A movie scored by the number of first-degree connections it shares
/// with another movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarMovie {
    pub movie: Movie,
    pub score: f64,
}

/// A movie together with the rating a user gave it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
    pub movie: Movie,
    pub rating: i64,
}
