//! Employee-management records and their persistence.
//!
//! Records are written through the [`store::DocumentStore`] seam, which has a
//! MongoDB implementation for real runs and an in-memory one for tests. Ids
//! for employees, projects, and assignments come from a
//! [`sequence::SequenceGenerator`] backed by counter documents in the same
//! store.

pub mod config;
pub mod errors;
pub mod models;
pub mod sequence;
pub mod store;

pub use mongodb::bson;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use sequence::SequenceGenerator;
pub use store::{Collection, DocumentStore, InMemoryStore, MongoStore};
