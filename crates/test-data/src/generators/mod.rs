//! Record generators for test data.
//!
//! This module provides generators for the employee-management records:
//! - [`DepartmentGenerator`]: Parent departments and their teams from a catalog
//! - [`EmployeeGenerator`]: Employees with fake names, contacts, and skills
//! - [`ProjectGenerator`]: Projects with clients, schedules, and leads
//! - [`AssignmentGenerator`]: Project teams and per-member assignments
//!
//! Generators never touch the store. Ids are passed in by the caller, which
//! allocates them from a sequence first.

pub mod assignment;
pub mod department;
pub mod employee;
pub mod project;

pub use assignment::{AssignmentGenConfig, AssignmentGenerator};
pub use department::{DepartmentGenerator, GeneratedDepartments};
pub use employee::{EmployeeGenConfig, EmployeeGenerator};
pub use project::{ProjectGenConfig, ProjectGenerator};
