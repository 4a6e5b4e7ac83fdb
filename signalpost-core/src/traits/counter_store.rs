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
use std::fmt::Debug;

use async_trait::async_trait;

use crate::identity::SourceKey;

/// Shared key-value counter store allocating per-source sequence numbers.
///
/// `increment` is the protocol's single serialization point: it must be
/// linearizable per key, so that concurrent senders sharing one source
/// identity are totally ordered. Absence is meaningful: a key that was never
/// incremented or set reads back as `None`, never as an implicit zero.
#[async_trait]
pub trait CounterStore: Send + Sync + Debug {
    /// Atomically increments the counter at `key`, creating it at zero first
    /// if absent, and returns the new value.
    async fn increment(&self, key: &SourceKey) -> u64;

    /// Reads the counter at `key`, or `None` if it was never written.
    async fn get(&self, key: &SourceKey) -> Option<u64>;

    /// Overwrites the counter at `key`.
    async fn set(&self, key: &SourceKey, value: u64);
}
