//! roster-core: Shared types, repository contract, and error handling for roster.
//!
//! This crate provides everything a backend needs to store people:
//! - The `Person` entity and its id newtype
//! - The `PersonRepository` trait that every backing store implements
//! - The `RepoError` type backend failures are reported through
//! - An in-memory repository for tests and callers without persistence

pub mod error;
pub mod memory;
pub mod repository;
pub mod types;

pub use error::RepoError;
pub use memory::InMemoryPersonRepository;
pub use repository::PersonRepository;
pub use types::{Person, PersonId};
