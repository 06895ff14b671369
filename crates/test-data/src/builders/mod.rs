//! Fluent builder APIs for seeding scenarios.
//!
//! The [`ScenarioBuilder`] provides a convenient way to generate and seed a
//! complete dataset of departments, employees, projects, and assignments.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioResult};
