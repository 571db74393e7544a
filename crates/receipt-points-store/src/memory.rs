//! In-memory implementation of the PointsStore trait.
//!
//! Records live in a persistent hash trie published through an [`ArcSwap`].
//! Readers take the current map with a single atomic load. Writers hold a
//! mutex, clone the map (which shares every node with the original), add their
//! record and publish the result, so a reader either sees the whole record or
//! nothing. A write copies only the path to the new entry.
//!
//! All data is lost when the store is dropped.

use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use im::HashMap;
use parking_lot::Mutex;
use receipt_points_core::{Points, ReceiptId};
use tracing::trace;

use crate::error::{Result, StoreError};
use crate::traits::PointsStore;

type Records = HashMap<ReceiptId, Points>;

/// In-memory store implementation.
pub struct MemoryStore {
    /// Current committed records.
    records: ArcSwap<Records>,
    /// Serializes writers. Readers never take it.
    write_lock: Mutex<()>,
}

/// A point-in-time view of a [`MemoryStore`].
///
/// Unaffected by writes that commit after it was taken.
#[derive(Clone)]
pub struct Snapshot {
    records: Arc<Records>,
}

impl Snapshot {
    /// Points stored under `id` when the snapshot was taken.
    pub fn get(&self, id: &ReceiptId) -> Option<Points> {
        self.records.get(id).copied()
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: ArcSwap::from_pointee(Records::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Take a consistent view of every committed record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.records.load_full(),
        }
    }

    fn insert(&self, id: &ReceiptId, points: Points) -> Result<()> {
        let _guard = self.write_lock.lock();

        let current = self.records.load();
        if current.contains_key(id) {
            return Err(StoreError::DuplicateId(id.clone()));
        }

        // O(1): the clone shares every node with `current`.
        let mut next = Records::clone(&current);
        next.insert(id.clone(), points);

        self.records.store(Arc::new(next));
        trace!(%id, points, "record committed");
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointsStore for MemoryStore {
    async fn put(&self, id: &ReceiptId, points: Points) -> Result<()> {
        self.insert(id, points)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Points> {
        self.records
            .load()
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn contains(&self, id: &ReceiptId) -> Result<bool> {
        Ok(self.records.load().contains_key(id))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.load().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::{Duration, Instant};

    fn id(s: &str) -> ReceiptId {
        ReceiptId::new(s)
    }

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryStore::new();
        let receipts = [
            ("7335f748-ec9d-417b-a335-36ce7a17290f", 30),
            ("e07db9ff-3e21-4db0-98b2-bba2070c3eac", 35),
            ("2b6c8c7f-f74b-4d2c-91a3-d2403a474007", 0),
            ("f76ff8c4-6737-4bbd-8e68-523f7c253af6", 530),
        ];

        for (rid, points) in receipts {
            store.put(&id(rid), points).await.unwrap();
        }

        assert_eq!(store.get(&id("e07db9ff-3e21-4db0-98b2-bba2070c3eac")).await.unwrap(), 35);
        assert_eq!(store.get(&id("2b6c8c7f-f74b-4d2c-91a3-d2403a474007")).await.unwrap(), 0);
        assert_eq!(store.len().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = MemoryStore::new();
        let missing = id("never-stored");

        assert_eq!(
            store.get(&missing).await,
            Err(StoreError::NotFound(missing.clone()))
        );
        assert!(!store.contains(&missing).await.unwrap());
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_put_keeps_original() {
        let store = MemoryStore::new();
        let rid = id("dup");

        store.put(&rid, 28).await.unwrap();
        let second = store.put(&rid, 109).await;

        assert_eq!(second, Err(StoreError::DuplicateId(rid.clone())));
        assert_eq!(store.get(&rid).await.unwrap(), 28);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_ignores_later_writes() {
        let store = MemoryStore::new();
        store.put(&id("a"), 1).await.unwrap();

        let snapshot = store.snapshot();
        store.put(&id("b"), 2).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(&id("a")), Some(1));
        assert_eq!(snapshot.get(&id("b")), None);
        assert_eq!(store.snapshot().get(&id("b")), Some(2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_on_distinct_ids() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..200u64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.put(&ReceiptId::new(format!("id-{i}")), i).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await.unwrap(), 200);
        for i in 0..200u64 {
            assert_eq!(store.get(&ReceiptId::new(format!("id-{i}"))).await.unwrap(), i);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_on_same_id_admit_one() {
        let store = Arc::new(MemoryStore::new());
        let rid = id("contended");

        let handles: Vec<_> = (0..32u64)
            .map(|i| {
                let store = Arc::clone(&store);
                let rid = rid.clone();
                tokio::spawn(async move { store.put(&rid, i).await })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => winners += 1,
                Err(e) => assert_eq!(e, StoreError::DuplicateId(rid.clone())),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    fn time_inserts(store: &MemoryStore, range: std::ops::Range<u64>) -> Duration {
        let start = Instant::now();
        for i in range {
            store.insert(&ReceiptId::new(format!("id-{i}")), i).unwrap();
        }
        start.elapsed()
    }

    #[test]
    fn test_write_cost_does_not_grow_with_store_size() {
        let store = MemoryStore::new();
        let batch = 1_000;

        let early = time_inserts(&store, 0..batch);
        time_inserts(&store, batch..100_000);
        let late = time_inserts(&store, 100_000..100_000 + batch);

        // A full copy per write would make the late batch ~100x slower.
        let bound = (early * 20).max(Duration::from_millis(200));
        assert!(late <= bound, "early batch {early:?}, late batch {late:?}");
        assert_eq!(store.snapshot().len(), 101_000);
    }

    #[test]
    fn test_snapshot_survives_many_writes() {
        let store = MemoryStore::new();
        time_inserts(&store, 0..10);
        let before = store.snapshot();

        time_inserts(&store, 10..5_000);

        assert_eq!(before.len(), 10);
        assert_eq!(before.get(&ReceiptId::new("id-9")), Some(9));
        assert_eq!(before.get(&ReceiptId::new("id-10")), None);
        assert_eq!(store.snapshot().get(&ReceiptId::new("id-4999")), Some(4999));
    }

    proptest! {
        #[test]
        fn test_put_then_get_round_trips(
            entries in prop::collection::hash_map("[a-f0-9-]{1,36}", any::<u64>(), 0..64)
        ) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let store = MemoryStore::new();
                for (rid, points) in &entries {
                    store.put(&ReceiptId::new(rid.as_str()), *points).await.unwrap();
                }
                for (rid, points) in &entries {
                    assert_eq!(store.get(&ReceiptId::new(rid.as_str())).await.unwrap(), *points);
                }
                assert_eq!(store.len().await.unwrap(), entries.len());
            });
        }
    }
}
