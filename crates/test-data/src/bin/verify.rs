//! Prints document counts of the employee-management database
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin verify
//! ```

use test_data::verify::{CollectionCounts, ReferenceReport};
use tracing_subscriber::EnvFilter;
use workforce::{MongoStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = MongoStore::connect(&StoreConfig::from_env()).await?;

    let counts = CollectionCounts::fetch(&store).await?;
    print!("{counts}");

    let references = ReferenceReport::fetch(&store).await?;
    for (kind, missing) in references.issues().filter(|(_, m)| !m.is_empty()) {
        tracing::warn!("{} dangling {kind} reference(s): {missing:?}", missing.len());
    }

    Ok(())
}
