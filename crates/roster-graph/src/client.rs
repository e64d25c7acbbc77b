//! Neo4j connection management and shared graph client.

use neo4rs::{ConfigBuilder, Graph, Query};

use roster_core::RepoError;

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "roster-dev".to_string(),
            max_connections: 16,
            fetch_size: 256,
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// The caller owns its lifecycle; repositories borrow it and never close it.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, RepoError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a write-only query (CREATE, DELETE, SET).
    pub async fn run(&self, query: Query) -> Result<(), RepoError> {
        self.graph
            .run(query)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, RepoError> {
        let mut stream = self
            .graph
            .execute(query)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        let mut rows = Vec::new();
        while let Some(row) = stream
            .next()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?
        {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, RepoError> {
        let mut stream = self
            .graph
            .execute(query)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        stream
            .next()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }

    /// Begin an explicit transaction. Dropping it uncommitted rolls back.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, RepoError> {
        self.graph
            .start_txn()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}
