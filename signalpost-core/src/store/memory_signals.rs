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
use std::time::Duration;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::Notify;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::signal::{Signal, SignalAddress, SignalError};
use crate::traits::SignalStore;

/// In-memory [`SignalStore`] for tests, demos, and single-process engines.
///
/// Publications land in a concurrent map; waiters park on a shared [`Notify`]
/// and re-examine their candidate addresses on every arrival. [`close`]
/// cancels the store's token, releasing every parked waiter.
///
/// [`close`]: SignalStore::close
#[derive(Debug, Default)]
pub struct MemorySignalStore {
    signals: DashMap<SignalAddress, Signal>,
    arrivals: Notify,
    closed: CancellationToken,
}

impl MemorySignalStore {
    /// Creates an empty signal store.
    pub fn new() -> Self {
        Self::default()
    }

    fn ready_among(&self, addresses: &[SignalAddress]) -> Vec<SignalAddress> {
        addresses
            .iter()
            .copied()
            .filter(|address| self.signals.contains_key(address))
            .collect()
    }
}

#[async_trait]
impl SignalStore for MemorySignalStore {
    async fn put(&self, address: SignalAddress, signal: Signal) -> Result<(), SignalError> {
        if self.closed.is_cancelled() {
            return Err(SignalError::StoreClosed);
        }
        match self.signals.entry(address) {
            Entry::Occupied(_) => Err(SignalError::DuplicateAddress(address)),
            Entry::Vacant(slot) => {
                slot.insert(signal);
                trace!(address = %address, "Signal published");
                self.arrivals.notify_waiters();
                Ok(())
            }
        }
    }

    async fn wait(
        &self,
        addresses: &[SignalAddress],
        min_ready: usize,
        timeout: Option<Duration>,
    ) -> Vec<SignalAddress> {
        let deadline = timeout.map(|t| Instant::now() + t);

        loop {
            // Register for wakeups before examining the map, so an arrival
            // landing between the check and the await is not missed.
            let notified = self.arrivals.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let ready = self.ready_among(addresses);
            if ready.len() >= min_ready || self.closed.is_cancelled() {
                return ready;
            }

            match deadline {
                Some(deadline) if Instant::now() >= deadline => return ready,
                Some(deadline) => {
                    tokio::select! {
                        _ = &mut notified => {}
                        _ = tokio::time::sleep_until(deadline) => {}
                        _ = self.closed.cancelled() => {}
                    }
                }
                None => {
                    tokio::select! {
                        _ = &mut notified => {}
                        _ = self.closed.cancelled() => {}
                    }
                }
            }
        }
    }

    async fn get(&self, address: &SignalAddress) -> Option<Signal> {
        self.signals.get(address).map(|entry| entry.value().clone())
    }

    fn close(&self) {
        trace!("Closing signal store");
        self.closed.cancel();
        self.arrivals.notify_waiters();
    }
}
