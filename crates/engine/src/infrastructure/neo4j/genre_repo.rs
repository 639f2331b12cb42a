//! Neo4j genre repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use cinegraph_domain::Genre;

use super::query_helpers::{fetch_all, fetch_one};
use crate::infrastructure::ports::{GenreRepo, RepoError};

// The poster comes from the genre's highest-rated movie that has one.
// OPTIONAL MATCH inside the subquery keeps genres without such a movie
// in the result, with a null poster.
const GENRE_PROJECTION: &str = "CALL {
        WITH g
        OPTIONAL MATCH (g)<-[:IN_GENRE]-(m:Movie)
        WHERE m.imdbRating IS NOT NULL AND m.poster IS NOT NULL
        WITH m
        ORDER BY m.imdbRating DESC
        LIMIT 1
        RETURN m.poster AS poster
    }
    RETURN {
        name: g.name,
        movies: count { (g)<-[:IN_GENRE]-(:Movie) },
        poster: poster
    } AS genre";

const LIST_QUERY_HEAD: &str = "MATCH (g:Genre)
    WHERE g.name <> '(no genres listed)'
    WITH g
    ORDER BY g.name ASC
    ";

const GET_QUERY_HEAD: &str = "MATCH (g:Genre {name: $name})
    ";

pub struct Neo4jGenreRepo {
    graph: Graph,
}

impl Neo4jGenreRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl GenreRepo for Neo4jGenreRepo {
    async fn list(&self) -> Result<Vec<Genre>, RepoError> {
        let text = format!("{LIST_QUERY_HEAD}{GENRE_PROJECTION}");
        fetch_all(&self.graph, query(&text), "genre").await
    }

    async fn get_by_name(&self, name: &str) -> Result<Genre, RepoError> {
        let text = format!("{GET_QUERY_HEAD}{GENRE_PROJECTION}");
        let q = query(&text).param("name", name.to_owned());
        fetch_one(&self.graph, q, "genre", "Genre", name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_excludes_the_unlisted_sentinel() {
        assert!(LIST_QUERY_HEAD.contains("g.name <> '(no genres listed)'"));
        assert!(LIST_QUERY_HEAD.contains("ORDER BY g.name ASC"));
    }

    #[test]
    fn poster_comes_from_highest_rated_movie() {
        assert!(GENRE_PROJECTION.contains("ORDER BY m.imdbRating DESC"));
        assert!(GENRE_PROJECTION.contains("LIMIT 1"));
        assert!(GENRE_PROJECTION.contains("OPTIONAL MATCH"));
    }
}
