//! Example: Seed the standard scenario into an in-memory store.
//!
//! Useful for eyeballing generated records without a database:
//! - Runs the full standard scenario with a fixed seed
//! - Prints the verification report and a few sample records
//!
//! Run with:
//! ```
//! cargo run -p test-data --example seed_in_memory
//! ```

use rand::SeedableRng;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = InMemoryStore::new();
    let mut rng = rand::rngs::StdRng::seed_from_u64(54321);

    let result = ScenarioBuilder::standard().build(&store, &mut rng).await?;

    print!("{}", CollectionCounts::fetch(&store).await?);

    let references = ReferenceReport::fetch(&store).await?;
    tracing::info!("References clean: {}", references.is_clean());

    // Team size distribution
    for project in &result.projects {
        tracing::info!(
            "  {} ({}): team of {}",
            project.name,
            project.status.as_str(),
            result.team_size(project.project_id)
        );
    }

    tracing::info!("Sample employees:");
    for employee in result.employees.iter().take(3) {
        tracing::info!(
            "  #{} {} <{}> {} in {}",
            employee.employee_id,
            employee.name,
            employee.email,
            employee.role,
            employee.location
        );
    }

    Ok(())
}
