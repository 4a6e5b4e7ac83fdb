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
use std::time::Duration;

use async_trait::async_trait;

use crate::signal::{Signal, SignalAddress, SignalError};

/// Content-addressed, write-once store with blocking availability waits.
///
/// Each [`SignalAddress`] holds at most one payload, forever. Readers
/// discover arrivals through [`wait`](SignalStore::wait) instead of polling a
/// dispatcher.
#[async_trait]
pub trait SignalStore: Send + Sync + Debug {
    /// Publishes `signal` at `address`.
    ///
    /// Write-once: a second publication at the same address must be rejected
    /// with [`SignalError::DuplicateAddress`], never overwrite the first.
    async fn put(&self, address: SignalAddress, signal: Signal) -> Result<(), SignalError>;

    /// Waits until at least `min_ready` of `addresses` hold a payload, or the
    /// timeout elapses, and returns every address that is ready at that
    /// moment.
    ///
    /// A zero timeout never suspends: it reports what is ready right now. A
    /// `None` timeout waits indefinitely (until [`close`](SignalStore::close)).
    async fn wait(
        &self,
        addresses: &[SignalAddress],
        min_ready: usize,
        timeout: Option<Duration>,
    ) -> Vec<SignalAddress>;

    /// Fetches the payload at `address`, if one was published.
    async fn get(&self, address: &SignalAddress) -> Option<Signal>;

    /// Wakes every pending wait and rejects further publications.
    ///
    /// Called once at engine shutdown so blocked readers return promptly with
    /// whatever was already ready.
    fn close(&self);
}
