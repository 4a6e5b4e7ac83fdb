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

//! Defines common internal type aliases used within `signalpost-core`.
//!
//! This module centralizes type definitions for store handles and reader
//! bookkeeping to improve code readability and maintainability. It also
//! defines the public [`SignalBatch`] alias returned by receive operations.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identity::{SourceId, SourceKey};
use crate::signal::{Signal, SignalAddress};
use crate::traits::{CounterStore, SignalStore};

/// Crate-internal: Shared handle to the atomic counter store backend.
pub(crate) type CounterRef = Arc<dyn CounterStore>;

/// Crate-internal: Shared handle to the write-once signal store backend.
pub(crate) type SignalStoreRef = Arc<dyn SignalStore>;

/// Crate-internal: Per-reader cursor bookkeeping (`SourceKey` -> next unread
/// sequence number).
pub(crate) type CursorMap = HashMap<SourceKey, u64>;

/// Crate-internal: Working set of a receive call, mapping each candidate
/// address back to the source it belongs to.
pub(crate) type CandidateMap = HashMap<SignalAddress, SourceId>;

// --- Public Type Aliases ---

/// The ordered collection of `(source, signal)` pairs returned by
/// [`Mailbox::receive`](crate::mailbox::Mailbox::receive).
///
/// Pairs appear in discovery order: signals from one source preserve their
/// emission order, while signals from different sources may interleave.
pub type SignalBatch = Vec<(SourceId, Signal)>;
