//! Connection settings for the Neo4j backend.

use neo4rs::{ConfigBuilder, Graph};

/// Neo4j connection settings, read from the environment with local
/// development defaults.
#[derive(Debug, Clone)]
pub struct Neo4jSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".into(),
            user: "neo4j".into(),
            password: "password".into(),
            database: None,
        }
    }
}

impl Neo4jSettings {
    /// Read `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD` and `NEO4J_DATABASE`
    /// from the environment, falling back to local defaults. A `.env` file
    /// in the working directory is loaded first when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
            database: std::env::var("NEO4J_DATABASE").ok(),
        }
    }

    /// Open a driver connection with these settings.
    pub async fn connect(&self) -> Result<Graph, neo4rs::Error> {
        let mut config = ConfigBuilder::default()
            .uri(&self.uri)
            .user(&self.user)
            .password(&self.password);
        if let Some(db) = &self.database {
            config = config.db(db.as_str());
        }
        Graph::connect(config.build()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_bolt() {
        let settings = Neo4jSettings::default();
        assert_eq!(settings.uri, "bolt://localhost:7687");
        assert_eq!(settings.user, "neo4j");
        assert!(settings.database.is_none());
    }
}
