//! In-process store used by tests and dry runs.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use time::OffsetDateTime;

use super::{Collection, DocumentStore};
use crate::errors::StoreError;
use crate::models::{Counter, bson_as_i64, to_bson_datetime};

/// A [`DocumentStore`] that keeps every collection in memory.
///
/// Clones share the same data, so one store can back several generators or
/// spawned tasks. Each operation holds a single lock for its whole duration,
/// which makes the counter increment atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<Mutex<HashMap<Collection, Vec<Document>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document in a collection, in insertion order.
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.lock().get(&collection).cloned().unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Collection, Vec<Document>>> {
        // Poisoning is ignored: every write is a single push or field update.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn int_values<'a>(documents: &'a [Document], field: &'a str) -> impl Iterator<Item = i64> + 'a {
    documents
        .iter()
        .filter_map(move |doc| doc.get(field).and_then(bson_as_i64))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), StoreError> {
        self.lock().entry(collection).or_default().push(document);
        Ok(())
    }

    async fn count_documents(&self, collection: Collection) -> Result<u64, StoreError> {
        Ok(self.lock().get(&collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn max_i64(
        &self,
        collection: Collection,
        field: &str,
    ) -> Result<Option<i64>, StoreError> {
        let collections = self.lock();
        let docs = collections.get(&collection).map(Vec::as_slice).unwrap_or(&[]);
        Ok(int_values(docs, field).max())
    }

    async fn distinct_i64(
        &self,
        collection: Collection,
        field: &str,
    ) -> Result<Vec<i64>, StoreError> {
        let collections = self.lock();
        let docs = collections.get(&collection).map(Vec::as_slice).unwrap_or(&[]);
        let distinct: BTreeSet<i64> = int_values(docs, field).collect();
        Ok(distinct.into_iter().collect())
    }

    async fn find_counter(&self, key: &str) -> Result<Option<Counter>, StoreError> {
        let collections = self.lock();
        Ok(collections
            .get(&Collection::Counter)
            .and_then(|docs| docs.iter().find(|doc| doc.get_str("key").ok() == Some(key)))
            .and_then(Counter::from_document))
    }

    async fn insert_counter(&self, counter: &Counter) -> Result<bool, StoreError> {
        let mut collections = self.lock();
        let counters = collections.entry(Collection::Counter).or_default();

        if counters
            .iter()
            .any(|doc| doc.get_str("key").ok() == Some(counter.key.as_str()))
        {
            return Ok(false);
        }

        counters.push(counter.to_document());
        Ok(true)
    }

    async fn increment_counter(&self, key: &str, by: i64) -> Result<Option<i64>, StoreError> {
        let mut collections = self.lock();
        let Some(doc) = collections
            .get_mut(&Collection::Counter)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.get_str("key").ok() == Some(key)))
        else {
            return Ok(None);
        };

        let value = doc.get("value").and_then(bson_as_i64).unwrap_or(0) + by;
        doc.insert("value", Bson::Int64(value));
        doc.insert(
            "updatedAt",
            Bson::DateTime(to_bson_datetime(OffsetDateTime::now_utc())),
        );

        Ok(Some(value))
    }
}
