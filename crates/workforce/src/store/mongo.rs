//! MongoDB-backed store.

use async_trait::async_trait;
use mongodb::{
    Client, Database, IndexModel,
    bson::{Document, doc},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
};
use time::OffsetDateTime;
use tracing::{debug, info};

use super::{Collection, DocumentStore};
use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::models::{Counter, bson_as_i64, to_bson_datetime};

const DUPLICATE_KEY: i32 = 11000;

/// A [`DocumentStore`] over one MongoDB database.
#[derive(Clone, Debug)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connects, pings the server so a bad URI fails here rather than mid-run,
    /// and ensures the counter index exists.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 }).await?;

        let store = Self { db };
        store.ensure_indexes().await?;

        info!("Connected to database {}", config.database);
        Ok(store)
    }

    /// Wraps an existing database handle. Call [`MongoStore::ensure_indexes`]
    /// before allocating sequence values through it.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Creates the unique index on `Counter.key` that makes counter
    /// initialization race-safe. Idempotent.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection(Collection::Counter)
            .create_index(index)
            .await?;

        debug!("Ensured unique index on {}.key", Collection::Counter);
        Ok(())
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.db.collection(collection.as_str())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), StoreError> {
        self.collection(collection).insert_one(document).await?;
        Ok(())
    }

    async fn count_documents(&self, collection: Collection) -> Result<u64, StoreError> {
        Ok(self.collection(collection).count_documents(doc! {}).await?)
    }

    async fn max_i64(
        &self,
        collection: Collection,
        field: &str,
    ) -> Result<Option<i64>, StoreError> {
        let top = self
            .collection(collection)
            .find_one(doc! { field: { "$type": "number" } })
            .sort(doc! { field: -1 })
            .await?;

        Ok(top.and_then(|doc| doc.get(field).and_then(bson_as_i64)))
    }

    async fn distinct_i64(
        &self,
        collection: Collection,
        field: &str,
    ) -> Result<Vec<i64>, StoreError> {
        let values = self
            .collection(collection)
            .distinct(field, doc! {})
            .await?;

        let mut ints: Vec<i64> = values.iter().filter_map(bson_as_i64).collect();
        ints.sort_unstable();
        ints.dedup();
        Ok(ints)
    }

    async fn find_counter(&self, key: &str) -> Result<Option<Counter>, StoreError> {
        let found = self
            .collection(Collection::Counter)
            .find_one(doc! { "key": key })
            .await?;

        Ok(found.as_ref().and_then(Counter::from_document))
    }

    async fn insert_counter(&self, counter: &Counter) -> Result<bool, StoreError> {
        match self
            .collection(Collection::Counter)
            .insert_one(counter.to_document())
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => {
                debug!("Counter '{}' was created concurrently", counter.key);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn increment_counter(&self, key: &str, by: i64) -> Result<Option<i64>, StoreError> {
        let updated = self
            .collection(Collection::Counter)
            .find_one_and_update(
                doc! { "key": key },
                doc! {
                    "$inc": { "value": by },
                    "$set": { "updatedAt": to_bson_datetime(OffsetDateTime::now_utc()) },
                },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.and_then(|doc| doc.get("value").and_then(bson_as_i64)))
    }
}
