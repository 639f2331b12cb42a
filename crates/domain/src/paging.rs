//! Paging and sorting value objects shared by the list operations.
//!
//! Sortable properties are closed enums, so the property name spliced into
//! a query text always comes from a fixed list. Limit and skip are bound as
//! query parameters, never spliced.

use serde::{Deserialize, Serialize};

/// Direction applied to the ORDER BY clause of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_cypher(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A sortable property set for one endpoint.
pub trait SortField: Copy + Default + Send + Sync {
    /// Property name as stored on the node or relationship.
    fn property(&self) -> &'static str;
}

/// Sortable properties of a `Movie` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieSort {
    #[default]
    Title,
    Released,
    ImdbRating,
}

impl SortField for MovieSort {
    fn property(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Released => "released",
            Self::ImdbRating => "imdbRating",
        }
    }
}

/// Sortable properties of a `Person` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonSort {
    #[default]
    Name,
    BornIn,
}

impl SortField for PersonSort {
    fn property(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BornIn => "bornIn",
        }
    }
}

/// Sortable properties of a `RATED` relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingSort {
    #[default]
    Timestamp,
    Rating,
}

impl SortField for RatingSort {
    fn property(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Rating => "rating",
        }
    }
}

/// A paging request: sort field, direction, and result window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<S: SortField> {
    pub sort: S,
    pub order: SortOrder,
    pub limit: i64,
    pub skip: i64,
}

impl<S: SortField> Default for Page<S> {
    fn default() -> Self {
        Self {
            sort: S::default(),
            order: SortOrder::default(),
            limit: 6,
            skip: 0,
        }
    }
}

impl<S: SortField> Page<S> {
    pub fn sort(mut self, sort: S) -> Self {
        self.sort = sort;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = skip;
        self
    }
}
