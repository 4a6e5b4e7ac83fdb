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

use std::sync::Arc;

use crate::common::SignalRuntime;
use crate::store::{MemoryCounterStore, MemorySignalStore};
use crate::traits::{CounterStore, SignalStore};

/// Entry point of the Signalpost system.
///
/// `SignalpostApp` wires the two backing stores into a [`SignalRuntime`],
/// which senders share and readers draw mailboxes from.
#[derive(Default, Debug, Clone)]
pub struct SignalpostApp;

impl SignalpostApp {
    /// Launches a runtime backed by the in-memory reference stores.
    ///
    /// Suitable for tests, demos, and single-process engines; distributed
    /// engines use [`launch_with_stores`](SignalpostApp::launch_with_stores).
    pub fn launch() -> SignalRuntime {
        Self::launch_with_stores(
            Arc::new(MemoryCounterStore::new()),
            Arc::new(MemorySignalStore::new()),
        )
    }

    /// Launches a runtime over engine-provided store backends.
    pub fn launch_with_stores(
        counters: Arc<dyn CounterStore>,
        signals: Arc<dyn SignalStore>,
    ) -> SignalRuntime {
        SignalRuntime::new(counters, signals)
    }
}
