//! Synthetic data generation for workforce.
//!
//! This crate generates departments, employees, projects, and project
//! assignments and seeds them into a document store, then verifies what was
//! written.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let store = MongoStore::connect(&StoreConfig::from_env()).await?;
//! let result = ScenarioBuilder::standard()
//!     .build(&store, &mut rand::thread_rng())
//!     .await?;
//!
//! println!("{}", CollectionCounts::fetch(&store).await?);
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod verify;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioResult};
    pub use crate::config::{DepartmentSpec, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        AssignmentGenerator, DepartmentGenerator, EmployeeGenerator, ProjectGenerator,
    };
    pub use crate::verify::{CollectionCounts, ReferenceReport};
    pub use workforce::{
        Collection, DocumentStore, InMemoryStore, MongoStore, SequenceGenerator, StoreConfig,
    };
}
