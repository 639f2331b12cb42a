//! People (actors and directors).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{MovieId, PersonId};

/// A person row as projected by the people queries.
///
/// Birth and death dates arrive as ISO-8601 strings from the query
/// projection and are typed as calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub tmdb_id: PersonId,
    pub name: String,
    pub born: Option<NaiveDate>,
    pub died: Option<NaiveDate>,
    pub born_in: Option<String>,
    pub bio: Option<String>,
    pub poster: Option<String>,
    pub url: Option<String>,
    /// Passthrough for node properties not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// An actor credit on a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub person: Person,
    pub role: Option<String>,
}

/// Detail payload for one person: properties plus credit counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub person: Person,
    pub acted_count: i64,
    pub directed_count: i64,
}

/// A credit shared between two people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkInCommon {
    pub tmdb_id: MovieId,
    pub title: String,
    /// Relationship type of the shared credit (`ACTED_IN` or `DIRECTED`).
    pub relation: String,
}

/// A person annotated with the credits shared with another person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarPerson {
    pub person: Person,
    pub acted_count: i64,
    pub directed_count: i64,
    pub in_common: Vec<WorkInCommon>,
}
