//! Neo4j schema initialization - constraints and indexes.

use neo4rs::{query, Graph};

use super::query_helpers::run;
use crate::infrastructure::ports::RepoError;

/// Initialize Neo4j schema with required constraints and indexes.
///
/// This should be called once on startup. Every statement uses
/// IF NOT EXISTS so the call is idempotent.
pub async fn ensure_schema(graph: &Graph) -> Result<(), RepoError> {
    run(
        graph,
        query(
            "CREATE CONSTRAINT movie_tmdb_id_unique IF NOT EXISTS
             FOR (m:Movie) REQUIRE m.tmdbId IS UNIQUE",
        ),
        "create_movie_constraint",
    )
    .await?;

    run(
        graph,
        query(
            "CREATE CONSTRAINT person_tmdb_id_unique IF NOT EXISTS
             FOR (p:Person) REQUIRE p.tmdbId IS UNIQUE",
        ),
        "create_person_constraint",
    )
    .await?;

    run(
        graph,
        query(
            "CREATE CONSTRAINT user_id_unique IF NOT EXISTS
             FOR (u:User) REQUIRE u.userId IS UNIQUE",
        ),
        "create_user_constraint",
    )
    .await?;

    run(
        graph,
        query(
            "CREATE CONSTRAINT genre_name_unique IF NOT EXISTS
             FOR (g:Genre) REQUIRE g.name IS UNIQUE",
        ),
        "create_genre_constraint",
    )
    .await?;

    // Title drives the default listing sort.
    run(
        graph,
        query(
            "CREATE INDEX movie_title IF NOT EXISTS
             FOR (m:Movie) ON (m.title)",
        ),
        "create_title_index",
    )
    .await?;

    tracing::info!("Neo4j schema initialized (constraints and indexes ensured)");
    Ok(())
}
