//! Neo4j person repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph};

use cinegraph_domain::{Page, Person, PersonDetails, PersonId, PersonSort, SimilarPerson, SortField};

use super::query_helpers::{fetch_all, fetch_one};
use crate::infrastructure::ports::{PersonRepo, RepoError};

const PERSON_PROJECTION: &str = "p { .*, born: toString(p.born), died: toString(p.died) }";

const DETAILS_QUERY: &str = "MATCH (p:Person {tmdbId: $id})
    RETURN {
        person: p { .*, born: toString(p.born), died: toString(p.died) },
        actedCount: count { (p)-[:ACTED_IN]->() },
        directedCount: count { (p)-[:DIRECTED]->() }
    } AS details";

const SIMILAR_QUERY: &str = "MATCH (:Person {tmdbId: $id})-[:ACTED_IN|DIRECTED]->(m)<-[r:ACTED_IN|DIRECTED]-(p)
    WITH p, collect(m { .tmdbId, .title, relation: type(r) }) AS inCommon
    RETURN {
        person: p { .*, born: toString(p.born), died: toString(p.died) },
        actedCount: count { (p)-[:ACTED_IN]->() },
        directedCount: count { (p)-[:DIRECTED]->() },
        inCommon: inCommon
    } AS similar
    ORDER BY size(inCommon) DESC
    SKIP $skip
    LIMIT $limit";

/// Build the paginated people listing, with or without the name filter.
///
/// Two fixed texts instead of a null-checked parameter keep the filtered
/// plan from scanning every person when no filter is given. The sort
/// property comes from a closed enum; skip and limit stay bound.
fn person_list_query(filtered: bool, page: &Page<PersonSort>) -> String {
    let filter = if filtered {
        "WHERE p.name CONTAINS $q"
    } else {
        ""
    };
    let sort = page.sort.property();
    format!(
        "MATCH (p:Person)
        {filter}
        RETURN {PERSON_PROJECTION} AS person
        ORDER BY p.{sort} {order}
        SKIP $skip
        LIMIT $limit",
        order = page.order.as_cypher()
    )
}

pub struct Neo4jPersonRepo {
    graph: Graph,
}

impl Neo4jPersonRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PersonRepo for Neo4jPersonRepo {
    async fn list(
        &self,
        page: &Page<PersonSort>,
        name_filter: Option<&str>,
    ) -> Result<Vec<Person>, RepoError> {
        let text = person_list_query(name_filter.is_some(), page);
        let mut q = query(&text).param("skip", page.skip).param("limit", page.limit);
        if let Some(name) = name_filter {
            q = q.param("q", name.to_owned());
        }
        fetch_all(&self.graph, q, "person").await
    }

    async fn get(&self, id: &PersonId) -> Result<PersonDetails, RepoError> {
        let q = query(DETAILS_QUERY).param("id", id.to_string());
        fetch_one(&self.graph, q, "details", "Person", id.as_str()).await
    }

    async fn list_similar(
        &self,
        id: &PersonId,
        page: &Page<PersonSort>,
    ) -> Result<Vec<SimilarPerson>, RepoError> {
        let q = query(SIMILAR_QUERY)
            .param("id", id.to_string())
            .param("skip", page.skip)
            .param("limit", page.limit);
        fetch_all(&self.graph, q, "similar").await
    }
}
