//! Persistent, named id sequences.
//!
//! Each sequence is a counter document keyed by name. Allocation lazily
//! creates the counter one below its floor, then atomically increments it, so
//! the first id handed out equals the floor and no two callers ever receive
//! the same id, even across processes sharing the store.

use tracing::debug;

use crate::errors::StoreError;
use crate::models::Counter;
use crate::store::DocumentStore;

/// Sequence name and floor for employee ids.
pub const EMPLOYEE: (&str, i64) = ("employee", 1000);
/// Sequence name and floor for project ids.
pub const PROJECT: (&str, i64) = ("project", 5000);
/// Sequence name and floor for project assignment ids.
pub const PROJECT_EMPLOYEE: (&str, i64) = ("projectEmployee", 7000);

/// Hands out ascending ids from counters persisted in a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct SequenceGenerator<S> {
    store: S,
}

impl<S: DocumentStore> SequenceGenerator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Allocates the next value of sequence `key`.
    ///
    /// `start_at` only matters the first time `key` is seen: the counter is
    /// created at `start_at - 1` so this call returns `start_at`. Creating the
    /// counter is a separate check-then-insert step; losing that race to
    /// another caller is harmless because the insert is then skipped. The
    /// increment itself is atomic in the store.
    pub async fn next_value(&self, key: &str, start_at: i64) -> Result<i64, StoreError> {
        if self.store.find_counter(key).await?.is_none() {
            let created = self
                .store
                .insert_counter(&Counter::starting_at(key, start_at))
                .await?;
            debug!(key, start_at, created, "Initialized sequence counter");
        }

        self.store
            .increment_counter(key, 1)
            .await?
            .ok_or_else(|| StoreError::MissingCounter(key.to_string()))
    }

    /// Allocates `count` values from sequence `key`, in order.
    pub async fn next_values(
        &self,
        key: &str,
        start_at: i64,
        count: usize,
    ) -> Result<Vec<i64>, StoreError> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.next_value(key, start_at).await?);
        }
        Ok(values)
    }
}
