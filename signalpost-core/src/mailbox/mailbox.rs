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

use tokio::time::Instant;
use tracing::{instrument, trace, warn};

use crate::common::{CandidateMap, CounterRef, CursorMap, SignalBatch, SignalStoreRef, CONFIG};
use crate::identity::SourceId;
use crate::signal::{Signal, SignalAddress, START_SEQUENCE};

/// A reader's view of the signal fabric.
///
/// A `Mailbox` owns its cursor map: one "next unread sequence number" per
/// source it has ever queried. Cursors live only in this value; dropping the
/// mailbox (or a reader crash) loses them, and a fresh mailbox replays each
/// source from its earliest signal.
///
/// Receive operations take `&mut self`, so one reader cannot run overlapping
/// receives against the same cursors.
#[derive(Debug)]
pub struct Mailbox {
    cursors: CursorMap,
    counters: CounterRef,
    signals: SignalStoreRef,
}

impl Mailbox {
    pub(crate) fn new(counters: CounterRef, signals: SignalStoreRef) -> Self {
        Self {
            cursors: CursorMap::new(),
            counters,
            signals,
        }
    }

    /// Collects every unread signal from `sources`, waiting up to `timeout`
    /// for the first arrival if none are pending.
    ///
    /// Returns `(source, signal)` pairs in discovery order: one source's
    /// signals preserve their emission order, while different sources may
    /// interleave. A timeout of `Some(Duration::ZERO)` harvests the
    /// already-available backlog without suspending at all; `None` waits
    /// indefinitely. Sources that have never emitted, or were never seen
    /// before, simply contribute nothing.
    ///
    /// Consuming a source's `Done` signal drops its cursor; the `Done` itself
    /// is bookkeeping and does not appear in the returned batch.
    #[instrument(skip(self, sources), fields(sources = sources.len()))]
    pub async fn receive(
        &mut self,
        sources: &[SourceId],
        timeout: Option<Duration>,
    ) -> SignalBatch {
        let started = Instant::now();
        let mut results = SignalBatch::new();
        let mut candidates = CandidateMap::new();

        // First sight of a source starts its cursor at the reserved base.
        for source in sources {
            let key = source.resolve_key();
            let next = *self.cursors.entry(key).or_insert(START_SEQUENCE);
            candidates.insert(SignalAddress::derive(&key, next), *source);
        }
        if self.cursors.len() > CONFIG.limits.tracked_sources_high_water_mark {
            warn!(
                tracked = self.cursors.len(),
                "Reader is tracking an unusually large number of sources"
            );
        }

        // Drain phase: harvest the backlog with zero-wait polls.
        loop {
            let pending: Vec<SignalAddress> = candidates.keys().copied().collect();
            if pending.is_empty() {
                // Every queried source has completed.
                return results;
            }
            let ready = self
                .signals
                .wait(&pending, pending.len(), Some(Duration::ZERO))
                .await;
            if ready.is_empty() {
                break;
            }
            for address in ready {
                self.consume_ready(address, &mut candidates, &mut results)
                    .await;
            }
            if Self::budget_exceeded(started, timeout) {
                trace!(collected = results.len(), "Receive budget exhausted mid-drain");
                return results;
            }
        }

        if !results.is_empty() || Self::budget_spent(started, timeout) {
            return results;
        }

        // Escalation: nothing was pending and time remains, so issue one
        // blocking wait for the first arrival, bounded by the remaining
        // budget. Each address the wait reports is consumed exactly where it
        // became ready.
        let pending: Vec<SignalAddress> = candidates.keys().copied().collect();
        let remaining = timeout.map(|t| t.saturating_sub(started.elapsed()));
        let ready = self.signals.wait(&pending, 1, remaining).await;
        for address in ready {
            self.consume_ready(address, &mut candidates, &mut results)
                .await;
        }
        results
    }

    /// [`receive`](Mailbox::receive) with the configured default patience.
    pub async fn receive_default(&mut self, sources: &[SourceId]) -> SignalBatch {
        self.receive(sources, Some(CONFIG.receive_default_timeout()))
            .await
    }

    /// Skips each source's cursor past everything it has emitted so far.
    ///
    /// The new cursor comes from the counter store (the true emission count,
    /// not this reader's position), so signals published before this call
    /// become permanently unreachable here, while anything published after it
    /// is delivered normally.
    #[instrument(skip(self, sources), fields(sources = sources.len()))]
    pub async fn forget(&mut self, sources: &[SourceId]) {
        for source in sources {
            let key = source.resolve_key();
            let next = match self.counters.get(&key).await {
                // A counter still below the reserved base was never written
                // by a sender; treat the source as having emitted nothing.
                Some(emitted) => (emitted + 1).max(START_SEQUENCE),
                None => START_SEQUENCE,
            };
            trace!(source = %source, next, "Skipping cursor past emitted log");
            self.cursors.insert(key, next);
        }
    }

    /// Drops every cursor this reader holds.
    ///
    /// The next receive on any source replays its entire history, as if this
    /// reader had never queried it.
    pub fn reset(&mut self) {
        trace!(dropped = self.cursors.len(), "Resetting all cursors");
        self.cursors.clear();
    }

    /// Number of sources this reader currently tracks a cursor for.
    pub fn tracked_sources(&self) -> usize {
        self.cursors.len()
    }

    /// Consumes one ready address: fetch its payload, record it, advance the
    /// source's cursor, and enroll the next address in the working set. A
    /// `Done` payload instead evicts the cursor and stops tracking the
    /// source.
    async fn consume_ready(
        &mut self,
        address: SignalAddress,
        candidates: &mut CandidateMap,
        results: &mut SignalBatch,
    ) {
        let Some(source) = candidates.remove(&address) else {
            return;
        };
        let Some(signal) = self.signals.get(&address).await else {
            warn!(address = %address, "Ready address had no payload");
            return;
        };

        let key = source.resolve_key();
        match signal {
            Signal::Done => {
                trace!(source = %source, "Source completed; dropping its cursor");
                self.cursors.remove(&key);
            }
            signal => {
                results.push((source, signal));
                if let Some(next) = self.cursors.get_mut(&key) {
                    *next += 1;
                    candidates.insert(SignalAddress::derive(&key, *next), source);
                }
            }
        }
    }

    /// Whether a positive budget expired mid-drain. A zero budget still
    /// drains the already-available backlog, so it never expires here.
    fn budget_exceeded(started: Instant, timeout: Option<Duration>) -> bool {
        timeout.is_some_and(|t| !t.is_zero() && started.elapsed() > t)
    }

    /// Whether the whole budget is gone, barring escalation.
    fn budget_spent(started: Instant, timeout: Option<Duration>) -> bool {
        timeout.is_some_and(|t| started.elapsed() >= t)
    }
}
