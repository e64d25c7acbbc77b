//! Neo4j implementation of the person repository.
//!
//! One parameterized Cypher statement per operation. Results project the
//! `id` and `name` properties only, never the full node. Writes run inside
//! an explicit transaction; an uncommitted transaction rolls back on drop,
//! so every early-return path releases it.

use async_trait::async_trait;
use neo4rs::query;

use roster_core::{Person, PersonId, PersonRepository, RepoError};

use crate::client::GraphClient;

pub struct Neo4jPersonRepository {
    client: GraphClient,
}

impl Neo4jPersonRepository {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PersonRepository for Neo4jPersonRepository {
    async fn all(&self) -> Result<Vec<Person>, RepoError> {
        let q = query(
            "MATCH (p:Person)
             RETURN p.id AS id, p.name AS name
             ORDER BY p.name ASC",
        );

        let rows = self.client.query_rows(q).await?;
        let mut people = Vec::with_capacity(rows.len());
        for row in rows {
            people.push(row_to_person(&row)?);
        }
        Ok(people)
    }

    async fn create(&self, name: &str) -> Result<Person, RepoError> {
        // Id generation is delegated to the database.
        let q = query(
            "CREATE (p:Person {id: randomUuid()})
             SET p.name = $name
             RETURN p.id AS id, p.name AS name",
        )
        .param("name", name);

        let mut txn = self.client.start_txn().await?;
        let mut stream = txn
            .execute(q)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let row = match stream
            .next(txn.handle())
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?
        {
            Some(row) => row,
            None => {
                txn.rollback()
                    .await
                    .map_err(|e| RepoError::Database(e.to_string()))?;
                return Err(RepoError::Database(
                    "CREATE returned no row".to_string(),
                ));
            }
        };

        let person = row_to_person(&row)?;
        txn.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tracing::debug!(id = %person.id, "Created person");
        Ok(person)
    }

    async fn find(&self, id: &PersonId) -> Result<Option<Person>, RepoError> {
        let q = query(
            "MATCH (p:Person {id: $id})
             RETURN p.id AS id, p.name AS name",
        )
        .param("id", id.as_str());

        match self.client.query_one(q).await? {
            Some(row) => Ok(Some(row_to_person(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: &PersonId, name: &str) -> Result<Option<Person>, RepoError> {
        let q = query(
            "MATCH (p:Person {id: $id})
             SET p.name = $name
             RETURN p.id AS id, p.name AS name",
        )
        .param("id", id.as_str())
        .param("name", name);

        let mut txn = self.client.start_txn().await?;
        let mut stream = txn
            .execute(q)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        // Zero rows means nothing matched; that is a None, not an error.
        let row = stream
            .next(txn.handle())
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        match row {
            Some(row) => Ok(Some(row_to_person(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &PersonId) -> Result<(), RepoError> {
        // DETACH DELETE removes attached relationships with the node and
        // matches zero nodes for unknown ids, keeping delete idempotent.
        let q = query(
            "MATCH (p:Person {id: $id})
             DETACH DELETE p",
        )
        .param("id", id.as_str());

        let mut txn = self.client.start_txn().await?;
        txn.run(q)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        txn.commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tracing::debug!(id = %id, "Deleted person");
        Ok(())
    }
}

/// Map a projected row (`id`, `name` columns) to a Person.
fn row_to_person(row: &neo4rs::Row) -> Result<Person, RepoError> {
    let id: String = row
        .get("id")
        .map_err(|e| RepoError::Serialization(format!("missing id column: {e}")))?;
    let name: String = row
        .get("name")
        .map_err(|e| RepoError::Serialization(format!("missing name column: {e}")))?;
    Ok(Person {
        id: PersonId(id),
        name,
    })
}
