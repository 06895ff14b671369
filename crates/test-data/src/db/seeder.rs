//! Store seeding utilities.

use thiserror::Error;
use tracing::info;
use workforce::bson::Document;
use workforce::models::{ChildDepartment, Employee, ParentDepartment, Project, ProjectAssignment};
use workforce::{Collection, DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Inserts generated records into a document store.
///
/// Records are written one document at a time and the first failure aborts
/// the run. Anything already written stays in place.
pub struct Seeder<S> {
    store: S,
    batch_size: usize,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a new seeder over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            batch_size: 50,
        }
    }

    /// Sets how often progress is logged during long inserts.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    pub async fn seed_parent_departments(
        &self,
        parents: &[ParentDepartment],
    ) -> Result<(), SeedError> {
        self.seed(
            Collection::DepartmentParent,
            "parent departments",
            parents.iter().map(ParentDepartment::to_document),
        )
        .await
    }

    pub async fn seed_child_departments(
        &self,
        children: &[ChildDepartment],
    ) -> Result<(), SeedError> {
        self.seed(
            Collection::DepartmentChild,
            "child departments",
            children.iter().map(ChildDepartment::to_document),
        )
        .await
    }

    pub async fn seed_employee(&self, employee: &Employee) -> Result<(), SeedError> {
        self.insert(Collection::Employee, employee.to_document())
            .await
    }

    pub async fn seed_project(&self, project: &Project) -> Result<(), SeedError> {
        self.insert(Collection::Project, project.to_document()).await
    }

    pub async fn seed_assignment(&self, assignment: &ProjectAssignment) -> Result<(), SeedError> {
        self.insert(Collection::ProjectEmployee, assignment.to_document())
            .await
    }

    /// Logs `done/total` whenever `done` lands on a batch boundary.
    pub fn report_progress(&self, label: &str, done: usize, total: usize) {
        if done % self.batch_size == 0 && done < total {
            info!("  Seeded {done}/{total} {label}");
        }
    }

    /// Inserts every document in order.
    async fn seed(
        &self,
        collection: Collection,
        label: &str,
        documents: impl ExactSizeIterator<Item = Document>,
    ) -> Result<(), SeedError> {
        let total = documents.len();
        info!("Seeding {total} {label}...");

        for (i, document) in documents.enumerate() {
            self.insert(collection, document).await?;
            self.report_progress(label, i + 1, total);
        }

        info!("Seeded {total} {label}");
        Ok(())
    }

    async fn insert(&self, collection: Collection, document: Document) -> Result<(), SeedError> {
        self.store.insert_one(collection, document).await?;
        Ok(())
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use workforce::InMemoryStore;

    use super::*;
    use crate::generators::{DepartmentGenerator, EmployeeGenerator};

    #[tokio::test]
    async fn test_seed_departments() {
        let store = InMemoryStore::new();
        let seeder = Seeder::new(store.clone()).with_batch_size(4);
        let departments = DepartmentGenerator::new().generate(1, 1, OffsetDateTime::now_utc());

        seeder
            .seed_parent_departments(&departments.parents)
            .await
            .unwrap();
        seeder
            .seed_child_departments(&departments.children)
            .await
            .unwrap();

        let children = store.documents(Collection::DepartmentChild);
        assert_eq!(store.documents(Collection::DepartmentParent).len(), 5);
        assert_eq!(children.len(), 12);
        assert_eq!(children[0].get_str("departmentName").unwrap(), "Frontend");
        assert_eq!(children[0].get_i64("parentDeptId").unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_nothing() {
        let store = InMemoryStore::new();
        Seeder::new(store.clone())
            .seed_parent_departments(&[])
            .await
            .unwrap();
        assert_eq!(
            store.count_documents(Collection::DepartmentParent).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_seed_single_employee() {
        let store = InMemoryStore::new();
        let mut rng = rand::thread_rng();
        let employee =
            EmployeeGenerator::new().generate(1000, &[1], OffsetDateTime::now_utc(), &mut rng);

        Seeder::new(store.clone())
            .seed_employee(&employee)
            .await
            .unwrap();

        let stored = store.documents(Collection::Employee);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].get_i64("employeeId").unwrap(), 1000);
    }
}
