//! The repository contract every person store implements.

use async_trait::async_trait;

use crate::error::RepoError;
use crate::types::{Person, PersonId};

/// CRUD contract for Person records.
///
/// One implementation per backing store; callers hold a `dyn
/// PersonRepository` so stores can be swapped without touching them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All people, sorted ascending by name. The ordering is part of the
    /// contract, not an implementation detail.
    async fn all(&self) -> Result<Vec<Person>, RepoError>;

    /// Create a new person with a freshly generated unique id.
    async fn create(&self, name: &str) -> Result<Person, RepoError>;

    /// Look up a person by id. `None` when no record matches.
    async fn find(&self, id: &PersonId) -> Result<Option<Person>, RepoError>;

    /// Rename a person. `None` when no record matches; the id never changes.
    async fn update(&self, id: &PersonId, name: &str) -> Result<Option<Person>, RepoError>;

    /// Remove a person and any attached relationships. No-op for unknown ids.
    async fn delete(&self, id: &PersonId) -> Result<(), RepoError>;
}
