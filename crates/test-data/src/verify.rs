//! Post-seed verification: document counts and reference integrity.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use workforce::{Collection, DocumentStore, StoreError};

/// Document counts of the seeded collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub employees: u64,
    pub projects: u64,
    pub assignments: u64,
    pub parent_departments: u64,
    pub child_departments: u64,
}

impl CollectionCounts {
    pub async fn fetch(store: &impl DocumentStore) -> Result<Self, StoreError> {
        Ok(Self {
            employees: store.count_documents(Collection::Employee).await?,
            projects: store.count_documents(Collection::Project).await?,
            assignments: store.count_documents(Collection::ProjectEmployee).await?,
            parent_departments: store.count_documents(Collection::DepartmentParent).await?,
            child_departments: store.count_documents(Collection::DepartmentChild).await?,
        })
    }
}

impl fmt::Display for CollectionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Database Verification ---")?;
        writeln!(f, "Employees: {}", self.employees)?;
        writeln!(f, "Projects: {}", self.projects)?;
        writeln!(f, "Project Assignments: {}", self.assignments)?;
        writeln!(f, "Parent Departments: {}", self.parent_departments)?;
        writeln!(f, "Child Departments: {}", self.child_departments)?;
        writeln!(f, "---------------------------")
    }
}

/// Referenced ids that have no matching record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceReport {
    /// `DepartmentChild.parentDeptId` values with no parent department.
    pub child_parents: Vec<i64>,
    /// `Employee.deptId` values with no child department.
    pub employee_departments: Vec<i64>,
    /// `Project.leadByEmpId` values with no employee.
    pub project_leads: Vec<i64>,
    /// `ProjectEmployee.projectId` values with no project.
    pub assignment_projects: Vec<i64>,
    /// `ProjectEmployee.empId` values with no employee.
    pub assignment_employees: Vec<i64>,
}

impl ReferenceReport {
    pub async fn fetch(store: &impl DocumentStore) -> Result<Self, StoreError> {
        let parents = ids(store, Collection::DepartmentParent, "departmentId").await?;
        let children = ids(store, Collection::DepartmentChild, "childDeptId").await?;
        let employees = ids(store, Collection::Employee, "employeeId").await?;
        let projects = ids(store, Collection::Project, "projectId").await?;

        Ok(Self {
            child_parents: dangling(store, Collection::DepartmentChild, "parentDeptId", &parents)
                .await?,
            employee_departments: dangling(store, Collection::Employee, "deptId", &children)
                .await?,
            project_leads: dangling(store, Collection::Project, "leadByEmpId", &employees).await?,
            assignment_projects: dangling(
                store,
                Collection::ProjectEmployee,
                "projectId",
                &projects,
            )
            .await?,
            assignment_employees: dangling(store, Collection::ProjectEmployee, "empId", &employees)
                .await?,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.issues().all(|(_, missing)| missing.is_empty())
    }

    /// Each reference kind with its dangling ids.
    pub fn issues(&self) -> impl Iterator<Item = (&'static str, &[i64])> {
        [
            ("child department -> parent department", self.child_parents.as_slice()),
            ("employee -> child department", self.employee_departments.as_slice()),
            ("project lead -> employee", self.project_leads.as_slice()),
            ("assignment -> project", self.assignment_projects.as_slice()),
            ("assignment -> employee", self.assignment_employees.as_slice()),
        ]
        .into_iter()
    }
}

async fn ids(
    store: &impl DocumentStore,
    collection: Collection,
    field: &str,
) -> Result<BTreeSet<i64>, StoreError> {
    Ok(store
        .distinct_i64(collection, field)
        .await?
        .into_iter()
        .collect())
}

async fn dangling(
    store: &impl DocumentStore,
    collection: Collection,
    field: &str,
    known: &BTreeSet<i64>,
) -> Result<Vec<i64>, StoreError> {
    Ok(store
        .distinct_i64(collection, field)
        .await?
        .into_iter()
        .filter(|id| !known.contains(id))
        .collect())
}

#[cfg(test)]
mod tests {
    use workforce::InMemoryStore;
    use workforce::bson::doc;

    use super::*;

    #[tokio::test]
    async fn test_counts_of_empty_store() {
        let counts = CollectionCounts::fetch(&InMemoryStore::new()).await.unwrap();
        assert_eq!(counts, CollectionCounts::default());
    }

    #[test]
    fn test_report_format() {
        let counts = CollectionCounts {
            employees: 25,
            projects: 8,
            assignments: 44,
            parent_departments: 5,
            child_departments: 12,
        };

        assert_eq!(
            counts.to_string(),
            "--- Database Verification ---\n\
             Employees: 25\n\
             Projects: 8\n\
             Project Assignments: 44\n\
             Parent Departments: 5\n\
             Child Departments: 12\n\
             ---------------------------\n"
        );
    }

    #[tokio::test]
    async fn test_dangling_references_are_reported() {
        let store = InMemoryStore::new();
        store
            .insert_one(Collection::Employee, doc! { "employeeId": 1000_i64, "deptId": 42_i64 })
            .await
            .unwrap();
        store
            .insert_one(
                Collection::ProjectEmployee,
                doc! { "empProjectId": 7000_i64, "projectId": 5000_i64, "empId": 1000_i64 },
            )
            .await
            .unwrap();

        let report = ReferenceReport::fetch(&store).await.unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.employee_departments, vec![42]);
        assert_eq!(report.assignment_projects, vec![5000]);
        assert!(report.assignment_employees.is_empty());
    }

    #[tokio::test]
    async fn test_null_references_are_not_dangling() {
        let store = InMemoryStore::new();
        store
            .insert_one(
                Collection::Project,
                doc! { "projectId": 5000_i64, "leadByEmpId": null },
            )
            .await
            .unwrap();

        let report = ReferenceReport::fetch(&store).await.unwrap();
        assert!(report.is_clean());
    }
}
