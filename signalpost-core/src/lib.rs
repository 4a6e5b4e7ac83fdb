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

#![forbid(unsafe_code)]
// #![warn(missing_docs)]

//! Signalpost Core Library
//!
//! This library provides the core functionality for the Signalpost mailbox
//! protocol: ordered, exactly-once-per-reader notification signals exchanged
//! between concurrent tasks and actors, synthesized from an atomic counter
//! store and a write-once blocking store.

/// Common utilities and structures used throughout the Signalpost protocol.
pub(crate) mod common;

pub(crate) mod identity;
pub(crate) mod mailbox;
pub(crate) mod signal;
pub(crate) mod store;
/// Trait definitions used in the Signalpost protocol.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the protocol modules,
/// as well as the `async_trait` crate.
pub mod prelude {
    pub use async_trait;

    pub use crate::common::{SignalBatch, SignalRuntime, SignalpostApp, SignalpostConfig, CONFIG};
    pub use crate::identity::{current_source, with_source, ActorId, SourceId, SourceKey, TaskId};
    pub use crate::mailbox::Mailbox;
    pub use crate::signal::{
        ErrorSignal, Signal, SignalAddress, SignalError, SignalKind, START_SEQUENCE,
    };
    pub use crate::store::{MemoryCounterStore, MemorySignalStore};
    pub use crate::traits::{CounterStore, SignalStore};
}
