//! Department hierarchy generation.

use time::OffsetDateTime;
use workforce::models::{ChildDepartment, ParentDepartment};

use crate::config::{DepartmentSpec, default_departments};

/// Generated parent departments and their child teams.
#[derive(Debug, Clone, Default)]
pub struct GeneratedDepartments {
    pub parents: Vec<ParentDepartment>,
    pub children: Vec<ChildDepartment>,
}

impl GeneratedDepartments {
    /// Ids of every child department, the ones employees can belong to.
    pub fn child_ids(&self) -> Vec<i64> {
        self.children.iter().map(|c| c.child_dept_id).collect()
    }
}

/// Builds department records from a catalog.
///
/// Department ids are not drawn from a sequence counter. Parents and children
/// are numbered consecutively from the first free id the caller supplies,
/// usually one past the highest id already stored.
pub struct DepartmentGenerator {
    catalog: Vec<DepartmentSpec>,
}

impl DepartmentGenerator {
    /// Creates a generator over the default catalog.
    pub fn new() -> Self {
        Self {
            catalog: default_departments(),
        }
    }

    pub fn with_catalog(catalog: Vec<DepartmentSpec>) -> Self {
        Self { catalog }
    }

    pub fn generate(
        &self,
        first_parent_id: i64,
        first_child_id: i64,
        base_time: OffsetDateTime,
    ) -> GeneratedDepartments {
        let mut result = GeneratedDepartments::default();
        let mut child_id = first_child_id;

        for (parent_id, spec) in (first_parent_id..).zip(&self.catalog) {
            result.parents.push(ParentDepartment {
                department_id: parent_id,
                name: spec.name.clone(),
                description: format!("{} Department", spec.name),
                created_at: base_time,
            });

            for child_name in &spec.children {
                result.children.push(ChildDepartment {
                    child_dept_id: child_id,
                    name: child_name.clone(),
                    parent_dept_id: parent_id,
                    description: format!("{child_name} Team"),
                    created_at: base_time,
                });
                child_id += 1;
            }
        }

        result
    }
}

impl Default for DepartmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
