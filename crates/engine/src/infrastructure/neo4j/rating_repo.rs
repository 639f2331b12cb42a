//! Neo4j rating repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use cinegraph_domain::{MovieId, Page, RatedMovie, RatingSort, Review, SortField, UserId};

use super::query_helpers::{fetch_all, fetch_one};
use crate::infrastructure::ports::{RatingRepo, RepoError};

// MERGE keeps one RATED relationship per user/movie pair; re-rating
// overwrites rating and timestamp. No row comes back when the user or
// movie node is missing, which surfaces as not-found.
const ADD_QUERY: &str = "MATCH (u:User {userId: $userId})
    MATCH (m:Movie {tmdbId: $movieId})
    MERGE (u)-[r:RATED]->(m)
    SET r.rating = $rating, r.timestamp = timestamp()
    RETURN { movie: m { .* }, rating: r.rating } AS rated";

/// Paginated reviews for one movie, newest or highest first per the sort.
fn review_list_query(page: &Page<RatingSort>) -> String {
    let sort = page.sort.property();
    format!(
        "MATCH (:Movie {{tmdbId: $movieId}})<-[r:RATED]-(u:User)
        RETURN {{
            rating: r.rating,
            timestamp: r.timestamp,
            user: {{ userId: u.userId, name: u.name }}
        }} AS review
        ORDER BY r.{sort} {order}
        SKIP $skip
        LIMIT $limit",
        order = page.order.as_cypher()
    )
}

pub struct Neo4jRatingRepo {
    graph: Graph,
}

impl Neo4jRatingRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl RatingRepo for Neo4jRatingRepo {
    async fn list_for_movie(
        &self,
        movie_id: &MovieId,
        page: &Page<RatingSort>,
    ) -> Result<Vec<Review>, RepoError> {
        let text = review_list_query(page);
        let q = query(&text)
            .param("movieId", movie_id.to_string())
            .param("skip", page.skip)
            .param("limit", page.limit);
        fetch_all(&self.graph, q, "review").await
    }

    async fn add(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
        rating: i64,
    ) -> Result<RatedMovie, RepoError> {
        tracing::debug!(user = %user_id, movie = %movie_id, rating, "upserting rating");
        let q = query(ADD_QUERY)
            .param("userId", user_id.to_string())
            .param("movieId", movie_id.to_string())
            .param("rating", rating);
        fetch_one(&self.graph, q, "rated", "Movie", movie_id.as_str()).await
    }
}
