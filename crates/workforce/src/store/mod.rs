//! Document store access.
//!
//! [`DocumentStore`] is the only way records reach persistence. It exposes
//! just the operations seeding and verification need, plus the counter
//! primitives the [`SequenceGenerator`](crate::sequence::SequenceGenerator)
//! is built on.

mod memory;
mod mongo;

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::errors::StoreError;
use crate::models::Counter;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;

/// Named collections of the employee-management database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Counter,
    DepartmentParent,
    DepartmentChild,
    Employee,
    Project,
    ProjectEmployee,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Counter,
        Collection::DepartmentParent,
        Collection::DepartmentChild,
        Collection::Employee,
        Collection::Project,
        Collection::ProjectEmployee,
    ];

    /// Returns the collection name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Counter => "Counter",
            Collection::DepartmentParent => "DepartmentParent",
            Collection::DepartmentChild => "DepartmentChild",
            Collection::Employee => "Employee",
            Collection::Project => "Project",
            Collection::ProjectEmployee => "ProjectEmployee",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a single document.
    async fn insert_one(&self, collection: Collection, document: Document)
    -> Result<(), StoreError>;

    /// Counts every document in a collection.
    async fn count_documents(&self, collection: Collection) -> Result<u64, StoreError>;

    /// Greatest integer value of `field`, or `None` if no document carries one.
    async fn max_i64(&self, collection: Collection, field: &str)
    -> Result<Option<i64>, StoreError>;

    /// Distinct integer values of `field`. Nulls and non-integers are skipped.
    async fn distinct_i64(&self, collection: Collection, field: &str)
    -> Result<Vec<i64>, StoreError>;

    /// Looks up a sequence counter by key.
    async fn find_counter(&self, key: &str) -> Result<Option<Counter>, StoreError>;

    /// Creates a counter. Returns false if one with the same key already exists.
    async fn insert_counter(&self, counter: &Counter) -> Result<bool, StoreError>;

    /// Atomically adds `by` to the counter and returns the new value.
    ///
    /// Returns `None` when no counter exists for `key`.
    async fn increment_counter(&self, key: &str, by: i64) -> Result<Option<i64>, StoreError>;
}
