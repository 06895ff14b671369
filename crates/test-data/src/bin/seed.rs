//! Default seed script - populates the employee-management database
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```

use test_data::builders::ScenarioBuilder;
use tracing_subscriber::EnvFilter;
use workforce::{MongoStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StoreConfig::from_env();
    let store = MongoStore::connect(&config).await?;

    tracing::info!("Starting synthetic data generation...");

    let mut rng = rand::thread_rng();
    let result = ScenarioBuilder::standard().build(&store, &mut rng).await?;

    // Summary output
    tracing::info!("Data generation completed successfully!");
    tracing::info!("  Parent departments: {}", result.parents.len());
    tracing::info!("  Child departments: {}", result.children.len());
    tracing::info!("  Employees: {}", result.employees.len());
    tracing::info!("  Projects: {}", result.projects.len());
    tracing::info!("  Project assignments: {}", result.assignments.len());

    Ok(())
}
