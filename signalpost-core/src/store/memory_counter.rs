/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
use async_trait::async_trait;
use dashmap::DashMap;

use crate::identity::SourceKey;
use crate::traits::CounterStore;

/// In-memory [`CounterStore`] for tests, demos, and single-process engines.
///
/// Per-key linearizability comes from the map's per-entry locking: an
/// `increment` holds the entry for the whole read-modify-write.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: DashMap<SourceKey, u64>,
}

impl MemoryCounterStore {
    /// Creates an empty counter store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self, key: &SourceKey) -> u64 {
        let mut entry = self.counters.entry(*key).or_insert(0);
        *entry += 1;
        *entry
    }

    async fn get(&self, key: &SourceKey) -> Option<u64> {
        self.counters.get(key).map(|entry| *entry.value())
    }

    async fn set(&self, key: &SourceKey, value: u64) {
        self.counters.insert(*key, value);
    }
}
