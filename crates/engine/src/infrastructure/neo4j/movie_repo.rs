//! Neo4j movie repository implementation.
//!
//! Listing queries and the viewer's favorite-id fetch run inside one
//! explicit read transaction, so the `favorite` flag always reflects the
//! state the listing was read from.

use async_trait::async_trait;
use neo4rs::{query, Graph, Txn};

use cinegraph_domain::{
    Movie, MovieDetails, MovieId, MovieSort, Page, PersonId, SimilarMovie, SortField, UserId,
};

use super::query_helpers::{fetch_all_in_txn, fetch_optional_in_txn};
use crate::infrastructure::ports::{MovieRepo, RepoError};

const DETAILS_QUERY: &str = "MATCH (m:Movie {tmdbId: $id})
    OPTIONAL MATCH (m)<-[r:RATED]-(:User)
    WITH m, count(r) AS ratingCount, avg(r.rating) AS ratingAvg
    RETURN {
        movie: m { .*, favorite: m.tmdbId IN $favorites },
        actors: [ (a:Person)-[rel:ACTED_IN]->(m) | { person: a { .*, born: toString(a.born), died: toString(a.died) }, role: rel.role } ],
        directors: [ (d:Person)-[:DIRECTED]->(m) | d { .*, born: toString(d.born), died: toString(d.died) } ],
        genres: [ (m)-[:IN_GENRE]->(g:Genre) | g.name ],
        ratingCount: ratingCount,
        ratingAvg: ratingAvg
    } AS details";

const SIMILAR_QUERY: &str = "MATCH (:Movie {tmdbId: $id})-[:IN_GENRE|ACTED_IN|DIRECTED]->()<-[:IN_GENRE|ACTED_IN|DIRECTED]-(m)
    WHERE m.imdbRating IS NOT NULL
    WITH m, count(*) AS inCommon
    WITH m, m.imdbRating * inCommon AS score
    ORDER BY score DESC
    SKIP $skip
    LIMIT $limit
    RETURN { movie: m { .*, favorite: m.tmdbId IN $favorites }, score: score } AS similar";

const USER_FAVORITES_QUERY: &str = "MATCH (u:User {userId: $userId})-[:HAS_FAVORITE]->(m:Movie)
    RETURN m.tmdbId AS id";

/// Build a paginated movie listing for the given MATCH clause.
///
/// The sort property comes from a closed enum, so splicing it into the
/// text is safe; skip and limit stay bound parameters.
fn movie_list_query(match_clause: &str, page: &Page<MovieSort>) -> String {
    let sort = page.sort.property();
    format!(
        "{match_clause}
        WHERE m.{sort} IS NOT NULL
        RETURN m {{ .*, favorite: m.tmdbId IN $favorites }} AS movie
        ORDER BY m.{sort} {order}
        SKIP $skip
        LIMIT $limit",
        order = page.order.as_cypher()
    )
}

/// The viewer's favorited movie ids; empty when no viewer is supplied.
async fn user_favorites(txn: &mut Txn, viewer: Option<&UserId>) -> Result<Vec<String>, RepoError> {
    let Some(user_id) = viewer else {
        return Ok(Vec::new());
    };
    let q = query(USER_FAVORITES_QUERY).param("userId", user_id.to_string());
    fetch_all_in_txn(txn, q, "id").await
}

pub struct Neo4jMovieRepo {
    graph: Graph,
}

impl Neo4jMovieRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    async fn start_txn(&self) -> Result<Txn, RepoError> {
        self.graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("start_txn", e))
    }

    async fn fetch_movie_page(
        &self,
        text: String,
        extra_param: Option<(&str, String)>,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError> {
        let mut txn = self.start_txn().await?;
        let favorites = user_favorites(&mut txn, viewer).await?;

        let mut q = query(&text)
            .param("favorites", favorites)
            .param("skip", page.skip)
            .param("limit", page.limit);
        if let Some((key, value)) = extra_param {
            q = q.param(key, value);
        }

        let movies = fetch_all_in_txn(&mut txn, q, "movie").await?;
        txn.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))?;
        Ok(movies)
    }
}

#[async_trait]
impl MovieRepo for Neo4jMovieRepo {
    async fn list(
        &self,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError> {
        self.fetch_movie_page(movie_list_query("MATCH (m:Movie)", page), None, page, viewer)
            .await
    }

    async fn get(
        &self,
        id: &MovieId,
        viewer: Option<&UserId>,
    ) -> Result<MovieDetails, RepoError> {
        let mut txn = self.start_txn().await?;
        let favorites = user_favorites(&mut txn, viewer).await?;

        let q = query(DETAILS_QUERY)
            .param("id", id.to_string())
            .param("favorites", favorites);
        let details: Option<MovieDetails> = fetch_optional_in_txn(&mut txn, q, "details").await?;
        txn.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))?;

        details.ok_or_else(|| RepoError::not_found("Movie", id))
    }

    async fn list_similar(
        &self,
        id: &MovieId,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<SimilarMovie>, RepoError> {
        let mut txn = self.start_txn().await?;
        let favorites = user_favorites(&mut txn, viewer).await?;

        let q = query(SIMILAR_QUERY)
            .param("id", id.to_string())
            .param("favorites", favorites)
            .param("skip", page.skip)
            .param("limit", page.limit);
        let similar = fetch_all_in_txn(&mut txn, q, "similar").await?;
        txn.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))?;
        Ok(similar)
    }

    async fn list_by_genre(
        &self,
        genre: &str,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError> {
        self.fetch_movie_page(
            movie_list_query(
                "MATCH (m:Movie)-[:IN_GENRE]->(:Genre {name: $name})",
                page,
            ),
            Some(("name", genre.to_owned())),
            page,
            viewer,
        )
        .await
    }

    async fn list_by_actor(
        &self,
        actor: &PersonId,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError> {
        self.fetch_movie_page(
            movie_list_query(
                "MATCH (:Person {tmdbId: $personId})-[:ACTED_IN]->(m:Movie)",
                page,
            ),
            Some(("personId", actor.to_string())),
            page,
            viewer,
        )
        .await
    }

    async fn list_by_director(
        &self,
        director: &PersonId,
        page: &Page<MovieSort>,
        viewer: Option<&UserId>,
    ) -> Result<Vec<Movie>, RepoError> {
        self.fetch_movie_page(
            movie_list_query(
                "MATCH (:Person {tmdbId: $personId})-[:DIRECTED]->(m:Movie)",
                page,
            ),
            Some(("personId", director.to_string())),
            page,
            viewer,
        )
        .await
    }
}
