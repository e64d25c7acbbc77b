//! Integration tests for roster-graph against a live Neo4j instance.
//!
//! Run with: cargo test --package roster-graph --test integration -- --ignored
//!
//! Skipped automatically if Neo4j is not available.

use roster_core::{PersonId, PersonRepository};
use roster_graph::{GraphClient, GraphConfig, Neo4jPersonRepository};

async fn connect_or_skip() -> Option<GraphClient> {
    let config = GraphConfig::default();
    match GraphClient::connect(&config).await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            None
        }
    }
}

async fn cleanup(client: &GraphClient) {
    let q = neo4rs::query("MATCH (p:Person) DETACH DELETE p");
    let _ = client.run(q).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_create_persists_a_person() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let person = repo.create("Test Person").await.unwrap();

    assert!(!person.id.as_str().is_empty());
    assert_eq!(person.name, "Test Person");

    // Read back through the driver, not the repository.
    let q = neo4rs::query("MATCH (p:Person {id: $id}) RETURN p.id AS id, p.name AS name")
        .param("id", person.id.as_str());
    let rows = client.query_rows(q).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<String>("name").unwrap(), "Test Person");

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_create_assigns_unique_ids() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let a = repo.create("Same Name").await.unwrap();
    let b = repo.create("Same Name").await.unwrap();
    assert_ne!(a.id, b.id);

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_find_returns_created_person() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let person = repo.create("Find Test").await.unwrap();
    let found = repo.find(&person.id).await.unwrap();

    assert_eq!(found, Some(person));

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_find_unknown_id_returns_none() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let found = repo.find(&PersonId::from("no-such-id")).await.unwrap();
    assert_eq!(found, None);

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_all_is_sorted_ascending_by_name() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    for name in ["Person 3", "Person 1", "Person 2"] {
        repo.create(name).await.unwrap();
    }

    let all = repo.all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Person 1", "Person 2", "Person 3"]);

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_update_changes_name_and_preserves_id() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let person = repo.create("Update Test").await.unwrap();
    let updated = repo
        .update(&person.id, "Updated Successfully")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, person.id);
    assert_eq!(updated.name, "Updated Successfully");

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_update_unknown_id_returns_none() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let updated = repo
        .update(&PersonId::from("no-such-id"), "Anyone")
        .await
        .unwrap();
    assert_eq!(updated, None);

    cleanup(&client).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_delete_removes_person_and_is_idempotent() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    cleanup(&client).await;
    let repo = Neo4jPersonRepository::new(client.clone());

    let person = repo.create("Delete Test").await.unwrap();
    repo.delete(&person.id).await.unwrap();

    assert_eq!(repo.find(&person.id).await.unwrap(), None);

    // Deleting again, and deleting an id that never existed, still succeed.
    repo.delete(&person.id).await.unwrap();
    repo.delete(&PersonId::from("no-such-id")).await.unwrap();

    cleanup(&client).await;
}
