//! Neo4j test harness for integration testing.
//!
//! Provides testcontainer-based Neo4j instance management for the
//! docker-gated repository tests.

use std::time::Duration;

use neo4rs::{query, Graph};
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, ContainerRequest, GenericImage, ImageExt,
};
use tokio::time::sleep;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Password used for Neo4j test containers.
pub const TEST_NEO4J_PASSWORD: &str = "testpassword";

/// Install a test subscriber honoring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Neo4j test harness managing container lifecycle.
pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    graph: Graph,
}

impl Neo4jTestHarness {
    /// Start a new Neo4j container and establish a connection.
    pub async fn start() -> Result<Self, BoxError> {
        init_tracing();
        let container = neo4j_image(TEST_NEO4J_PASSWORD).start().await?;
        let bolt_port = container.get_host_port_ipv4(7687).await?;
        let uri = format!("bolt://127.0.0.1:{bolt_port}");

        let graph = connect_with_retry(&uri, "neo4j", TEST_NEO4J_PASSWORD).await?;

        Ok(Self {
            _container: container,
            graph,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_clone(&self) -> Graph {
        self.graph.clone()
    }

    /// Clean all data from the database.
    pub async fn clean(&self) -> Result<(), BoxError> {
        self.graph
            .run(query("MATCH (n) DETACH DELETE n"))
            .await
            .map_err(|e| format!("Failed to clean database: {e}"))?;
        Ok(())
    }
}

/// Create a Neo4j container image with the given password.
///
/// Pinned version for consistency across runs, memory limits so the JVM
/// survives resource pressure, and a short fixed wait; actual readiness
/// is verified by `connect_with_retry`.
fn neo4j_image(password: &str) -> ContainerRequest<GenericImage> {
    GenericImage::new("neo4j", "5.26.0-community")
        .with_exposed_port(7687.tcp())
        .with_exposed_port(7474.tcp())
        .with_wait_for(WaitFor::seconds(5))
        .with_env_var("NEO4J_AUTH", format!("neo4j/{password}"))
        .with_env_var(
            "NEO4J_dbms_connector_bolt_advertised__address",
            "localhost:7687",
        )
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_env_var("NEO4J_db_checkpoint_iops_limit", "500")
}

/// Connect to Neo4j with retry logic using exponential backoff.
///
/// Backoff doubles from 500ms up to a 5s cap, for up to 30 attempts.
/// Each attempt verifies the connection with a real query.
async fn connect_with_retry(uri: &str, user: &str, pass: &str) -> Result<Graph, BoxError> {
    let max_attempts = 30;
    let max_delay = Duration::from_secs(5);

    let mut attempt = 0;
    let mut delay = Duration::from_millis(500);
    let mut last_err: Option<String> = None;

    while attempt < max_attempts {
        attempt += 1;

        match Graph::new(uri, user, pass).await {
            Ok(graph) => match graph.run(query("RETURN 1")).await {
                Ok(()) => {
                    tracing::info!(attempt, uri, "Neo4j connection established and verified");
                    return Ok(graph);
                }
                Err(e) => {
                    last_err = Some(format!("Connection test query failed: {e}"));
                }
            },
            Err(e) => {
                last_err = Some(e.to_string());
            }
        }

        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis(),
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying Neo4j connection"
        );

        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!("Failed to connect to Neo4j at {uri} after {max_attempts} attempts: {last_err:?}").into())
}
