//! Neo4j favorites repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use cinegraph_domain::{Movie, MovieId, MovieSort, Page, SortField, UserId};

use super::query_helpers::{fetch_all, fetch_one};
use crate::infrastructure::ports::{FavoriteRepo, RepoError};

// ON CREATE keeps the original createdAt when the relationship already
// exists, so repeating the call is a no-op beyond the returned row.
const ADD_QUERY: &str = "MATCH (u:User {userId: $userId})
    MATCH (m:Movie {tmdbId: $movieId})
    MERGE (u)-[r:HAS_FAVORITE]->(m)
    ON CREATE SET r.createdAt = timestamp()
    RETURN m { .*, favorite: true } AS movie";

// Matching the relationship itself means a missing edge (or endpoint)
// yields no row and nothing is deleted.
const REMOVE_QUERY: &str = "MATCH (u:User {userId: $userId})-[r:HAS_FAVORITE]->(m:Movie {tmdbId: $movieId})
    DELETE r
    RETURN m { .*, favorite: false } AS movie";

fn favorites_list_query(page: &Page<MovieSort>) -> String {
    let sort = page.sort.property();
    format!(
        "MATCH (u:User {{userId: $userId}})-[:HAS_FAVORITE]->(m:Movie)
        RETURN m {{ .*, favorite: true }} AS movie
        ORDER BY m.{sort} {order}
        SKIP $skip
        LIMIT $limit",
        order = page.order.as_cypher()
    )
}

pub struct Neo4jFavoriteRepo {
    graph: Graph,
}

impl Neo4jFavoriteRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl FavoriteRepo for Neo4jFavoriteRepo {
    async fn list(
        &self,
        user_id: &UserId,
        page: &Page<MovieSort>,
    ) -> Result<Vec<Movie>, RepoError> {
        let text = favorites_list_query(page);
        let q = query(&text)
            .param("userId", user_id.to_string())
            .param("skip", page.skip)
            .param("limit", page.limit);
        fetch_all(&self.graph, q, "movie").await
    }

    async fn add(&self, user_id: &UserId, movie_id: &MovieId) -> Result<Movie, RepoError> {
        tracing::debug!(user = %user_id, movie = %movie_id, "adding favorite");
        let q = query(ADD_QUERY)
            .param("userId", user_id.to_string())
            .param("movieId", movie_id.to_string());
        fetch_one(&self.graph, q, "movie", "Movie", movie_id.as_str()).await
    }

    async fn remove(&self, user_id: &UserId, movie_id: &MovieId) -> Result<Movie, RepoError> {
        tracing::debug!(user = %user_id, movie = %movie_id, "removing favorite");
        let q = query(REMOVE_QUERY)
            .param("userId", user_id.to_string())
            .param("movieId", movie_id.to_string());
        fetch_one(&self.graph, q, "movie", "Movie", movie_id.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_created_at_on_repeat() {
        assert!(ADD_QUERY.contains("ON CREATE SET r.createdAt = timestamp()"));
        assert!(ADD_QUERY.contains("favorite: true"));
    }

    #[test]
    fn remove_matches_the_relationship_before_deleting() {
        assert!(REMOVE_QUERY.contains("[r:HAS_FAVORITE]->"));
        assert!(REMOVE_QUERY.contains("DELETE r"));
        assert!(REMOVE_QUERY.contains("favorite: false"));
    }

    #[test]
    fn list_flags_every_movie_as_favorite() {
        let text = favorites_list_query(&Page::default());
        assert!(text.contains("favorite: true"));
        assert!(text.contains("ORDER BY m.title ASC"));
    }
}
