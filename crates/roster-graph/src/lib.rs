//! roster-graph: Neo4j-backed person repository.
//!
//! All graph reads and writes for the roster flow through this crate. It
//! owns connection management and the Cypher templates; the contract it
//! implements lives in roster-core.

pub mod client;
pub mod person;

pub use client::{GraphClient, GraphConfig};
pub use person::Neo4jPersonRepository;
