//! Sharded map for concurrent accumulation of per-document scores.
//!
//! Keys are spread over independently locked shards by `key mod shard_count`, so workers
//! only contend when they touch the same shard.

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::collections::BTreeMap;

/// Integer keys that can pick a shard.
pub trait ShardKey: Copy + Ord {
    fn shard(&self, shard_count: usize) -> usize;
}

macro_rules! impl_shard_key {
    ($($t:ty),*) => {
        $(impl ShardKey for $t {
            #[inline]
            fn shard(&self, shard_count: usize) -> usize {
                ((*self as u64) % shard_count as u64) as usize
            }
        })*
    };
}

impl_shard_key!(i32, i64, u32, u64, usize);

pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K: ShardKey, V: Default> ConcurrentMap<K, V> {
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        Self { shards: (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect() }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Lock the key's shard and hand out its value, default-inserting it if absent.
    /// The shard stays locked while the guard lives.
    pub fn access(&self, key: K) -> MappedMutexGuard<'_, V> {
        let guard = self.shard_for(key).lock();
        MutexGuard::map(guard, |map| map.entry(key).or_default())
    }

    pub fn erase(&self, key: K) {
        self.shard_for(key).lock().remove(&key);
    }

    /// Merge all shards into one ordered map.
    pub fn into_ordinary_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for shard in self.shards {
            result.extend(shard.into_inner());
        }
        result
    }

    fn shard_for(&self, key: K) -> &Mutex<BTreeMap<K, V>> {
        &self.shards[key.shard(self.shards.len())]
    }
}
