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

use tracing::{instrument, trace};

use crate::common::{CounterRef, SignalStoreRef};
use crate::identity::{current_source, SourceId};
use crate::mailbox::Mailbox;
use crate::signal::{Signal, SignalAddress, SignalError, START_SEQUENCE};

/// Shared handle to the signal fabric.
///
/// Cloning is cheap; the execution engine's send path and every reader's
/// [`Mailbox`] work against the same pair of backing stores.
#[derive(Debug, Clone)]
pub struct SignalRuntime {
    pub(crate) counters: CounterRef,
    pub(crate) signals: SignalStoreRef,
}

impl SignalRuntime {
    pub(crate) fn new(counters: CounterRef, signals: SignalStoreRef) -> Self {
        Self { counters, signals }
    }

    /// Creates a mailbox for one reader, with fresh cursors.
    ///
    /// Readers are independent: each mailbox replays every source from its
    /// earliest signal until its own cursors say otherwise.
    pub fn mailbox(&self) -> Mailbox {
        Mailbox::new(self.counters.clone(), self.signals.clone())
    }

    /// Emits `signal` on behalf of the ambient caller.
    ///
    /// The caller's identity comes from the enclosing
    /// [`with_source`](crate::identity::with_source) scope, installed by the
    /// execution engine around task and actor method bodies.
    pub async fn send(&self, signal: Signal) -> Result<(), SignalError> {
        let source = current_source().ok_or(SignalError::NoAmbientSource)?;
        self.send_from(&source, signal).await
    }

    /// Emits `signal` on behalf of `source`.
    ///
    /// The counter store's atomic increment assigns the next sequence number;
    /// concurrent senders sharing one source are totally ordered by it and
    /// can never overwrite one another, because the signal store rejects a
    /// second payload at the same address.
    #[instrument(skip(self, signal), fields(source = %source))]
    pub async fn send_from(&self, source: &SourceId, signal: Signal) -> Result<(), SignalError> {
        let key = source.resolve_key();

        let mut index = self.counters.increment(&key).await;
        if index < START_SEQUENCE {
            // The counter was created by something other than this protocol
            // (or by the increment above); claim the key at the reserved base.
            self.counters.set(&key, START_SEQUENCE).await;
            index = START_SEQUENCE;
        }

        let address = SignalAddress::derive(&key, index);
        trace!(sequence = index, address = %address, "Publishing signal");
        self.signals.put(address, signal).await
    }

    /// Publishes the synthetic fault signal for a crashed source.
    ///
    /// The execution engine calls this when a task or actor invocation
    /// terminates with an unhandled fault, before propagating the fault to
    /// any explicit waiter, so that observers learn of the crash as data.
    pub async fn notify_failure(
        &self,
        source: &SourceId,
        reason: impl Into<String>,
    ) -> Result<(), SignalError> {
        self.send_from(source, Signal::error(reason)).await
    }

    /// Publishes the synthetic completion signal for a finished source.
    ///
    /// Long-lived readers drop the source's cursor when they consume it,
    /// bounding their memory.
    pub async fn notify_done(&self, source: &SourceId) -> Result<(), SignalError> {
        self.send_from(source, Signal::Done).await
    }

    /// Shuts the fabric down: wakes every blocked reader and rejects further
    /// publications.
    pub fn shutdown(&self) {
        trace!("Shutting down signal fabric");
        self.signals.close();
    }
}
