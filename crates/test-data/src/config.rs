//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// A top-level department and the teams nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSpec {
    pub name: String,
    pub children: Vec<String>,
}

impl DepartmentSpec {
    pub fn new(name: impl Into<String>, children: &[&str]) -> Self {
        Self {
            name: name.into(),
            children: children.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The fixed department catalog: 5 departments, 12 teams.
pub fn default_departments() -> Vec<DepartmentSpec> {
    vec![
        DepartmentSpec::new("Engineering", &["Frontend", "Backend", "DevOps", "QA"]),
        DepartmentSpec::new("Product", &["Product Management", "Design"]),
        DepartmentSpec::new("HR", &["Recruitment", "Employee Relations"]),
        DepartmentSpec::new("Sales", &["Direct Sales", "Partner Sales"]),
        DepartmentSpec::new("Marketing", &["Digital Marketing", "Content"]),
    ]
}

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Departments to create, in order.
    pub departments: Vec<DepartmentSpec>,

    /// Number of employees to generate.
    pub employee_count: usize,

    /// Number of projects to generate.
    pub project_count: usize,

    /// Employees assigned per project (inclusive range).
    pub team_size: (usize, usize),

    /// Log progress every this many inserted records.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            departments: default_departments(),
            employee_count: 25,
            project_count: 8,
            team_size: (3, 8),
            batch_size: 50,
        }
    }
}
