//! Store integration for seeding test data.
//!
//! The [`Seeder`] inserts generated records into a
//! [`DocumentStore`](workforce::DocumentStore) with progress reporting.

mod seeder;

pub use seeder::{SeedError, Seeder};
