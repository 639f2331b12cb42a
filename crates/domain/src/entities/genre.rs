//! Genre catalog entity.

use serde::{Deserialize, Serialize};

/// A genre annotated with its movie count and a representative poster.
///
/// The poster belongs to the highest-rated movie in the genre that has
/// both a rating and a poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub movies: i64,
    pub poster: Option<String>,
}
