//! In-memory person store.
//!
//! Behaves observably like the graph backend (server-assigned ids, name
//! ordering, idempotent delete) so it can stand in for it in tests and in
//! callers that do not need persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::RepoError;
use crate::repository::PersonRepository;
use crate::types::{Person, PersonId};

/// `PersonRepository` backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryPersonRepository {
    people: RwLock<HashMap<PersonId, Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn all(&self) -> Result<Vec<Person>, RepoError> {
        let mut people: Vec<Person> = self.people.read().await.values().cloned().collect();
        people.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(people)
    }

    async fn create(&self, name: &str) -> Result<Person, RepoError> {
        // Locally minted id, standing in for the database's randomUuid().
        let person = Person {
            id: PersonId(Uuid::new_v4().to_string()),
            name: name.to_string(),
        };
        self.people
            .write()
            .await
            .insert(person.id.clone(), person.clone());
        Ok(person)
    }

    async fn find(&self, id: &PersonId) -> Result<Option<Person>, RepoError> {
        Ok(self.people.read().await.get(id).cloned())
    }

    async fn update(&self, id: &PersonId, name: &str) -> Result<Option<Person>, RepoError> {
        let mut people = self.people.write().await;
        match people.get_mut(id) {
            Some(person) => {
                person.name = name.to_string();
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &PersonId) -> Result<(), RepoError> {
        self.people.write().await.remove(id);
        Ok(())
    }
}
