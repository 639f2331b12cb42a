//! Generic query helpers to reduce Neo4j repository boilerplate.
//!
//! Each helper executes one query and decodes a single named column per
//! row into a domain type. Queries that need more than one value per row
//! project them into a map under one alias.

use neo4rs::{Graph, Query, Row, Txn};
use serde::de::DeserializeOwned;

use crate::infrastructure::ports::RepoError;

fn decode_column<T: DeserializeOwned>(row: &Row, column: &str) -> Result<T, RepoError> {
    row.get::<T>(column)
        .map_err(|e| RepoError::serialization(format!("column `{column}`: {e}")))
}

/// Execute a query and decode the named column of every row.
/// An empty result is an empty vector, not an error.
pub async fn fetch_all<T: DeserializeOwned>(
    graph: &Graph,
    query: Query,
    column: &str,
) -> Result<Vec<T>, RepoError> {
    let mut result = graph
        .execute(query)
        .await
        .map_err(|e| RepoError::database("execute", e))?;

    let mut items = Vec::new();
    while let Some(row) = result
        .next()
        .await
        .map_err(|e| RepoError::database("fetch_row", e))?
    {
        items.push(decode_column(&row, column)?);
    }
    Ok(items)
}

/// Execute a query expected to yield at most one row.
pub async fn fetch_optional<T: DeserializeOwned>(
    graph: &Graph,
    query: Query,
    column: &str,
) -> Result<Option<T>, RepoError> {
    let mut result = graph
        .execute(query)
        .await
        .map_err(|e| RepoError::database("execute", e))?;

    if let Some(row) = result
        .next()
        .await
        .map_err(|e| RepoError::database("fetch_row", e))?
    {
        Ok(Some(decode_column(&row, column)?))
    } else {
        Ok(None)
    }
}

/// Execute a query that must yield a row; an empty result becomes
/// `NotFound` for the given entity.
///
/// Mutations route through here as well: a MERGE or DELETE that RETURNs
/// the affected movie yields no row when an endpoint node or the
/// relationship is missing, which surfaces as not-found.
pub async fn fetch_one<T: DeserializeOwned>(
    graph: &Graph,
    query: Query,
    column: &str,
    entity_type: &'static str,
    id: &str,
) -> Result<T, RepoError> {
    fetch_optional(graph, query, column)
        .await?
        .ok_or_else(|| RepoError::not_found(entity_type, id))
}

/// Execute a write query with no result mapping.
pub async fn run(graph: &Graph, query: Query, operation: &'static str) -> Result<(), RepoError> {
    graph
        .run(query)
        .await
        .map_err(|e| RepoError::database(operation, e))
}

/// Transaction-scoped variant of [`fetch_all`].
pub async fn fetch_all_in_txn<T: DeserializeOwned>(
    txn: &mut Txn,
    query: Query,
    column: &str,
) -> Result<Vec<T>, RepoError> {
    let mut result = txn
        .execute(query)
        .await
        .map_err(|e| RepoError::database("execute", e))?;

    let mut items = Vec::new();
    while let Some(row) = result
        .next(txn.handle())
        .await
        .map_err(|e| RepoError::database("fetch_row", e))?
    {
        items.push(decode_column(&row, column)?);
    }
    Ok(items)
}

/// Transaction-scoped variant of [`fetch_optional`].
pub async fn fetch_optional_in_txn<T: DeserializeOwned>(
    txn: &mut Txn,
    query: Query,
    column: &str,
) -> Result<Option<T>, RepoError> {
    let mut result = txn
        .execute(query)
        .await
        .map_err(|e| RepoError::database("execute", e))?;

    if let Some(row) = result
        .next(txn.handle())
        .await
        .map_err(|e| RepoError::database("fetch_row", e))?
    {
        Ok(Some(decode_column(&row, column)?))
    } else {
        Ok(None)
    }
}
