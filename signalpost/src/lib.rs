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

//! # Signalpost
//!
//! This crate provides a signal mailbox protocol for concurrent systems,
//! built on top of Tokio. Independent workers (tasks or actors) emit
//! discrete, ordered notification signals on behalf of a source identity,
//! and any other worker discovers, consumes, and acknowledges those signals
//! asynchronously, without a broker or a push channel: the protocol is
//! synthesized from an atomic counter store and a write-once blocking store.
//!
//! ## Key Concepts
//!
//! - **Sources (`SourceId`)**: the logical origin of a signal stream: one
//!   task invocation, or one actor across its whole lifetime.
//! - **Signals (`Signal`)**: user payloads, plus the synthetic `Error` and
//!   `Done` notifications the execution engine publishes when a source
//!   faults or finishes.
//! - **Runtime (`SignalRuntime`)**: the shared fabric handle; carries the
//!   send path and hands out mailboxes.
//! - **Mailboxes (`Mailbox`)**: per-reader cursors over each source's
//!   append-only log; `receive` drains the backlog and only then blocks.
//! - **Stores**: the two backing contracts (`CounterStore`, `SignalStore`)
//!   with in-memory reference implementations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use signalpost::prelude::*;
//!
//! let runtime = SignalpostApp::launch();
//! let worker: SourceId = TaskId::random().into();
//!
//! runtime.send_from(&worker, Signal::user("ready")?).await?;
//!
//! let mut mailbox = runtime.mailbox();
//! let batch = mailbox.receive(&[worker], None).await;
//! ```

/// Prelude module for convenient imports.
///
/// Re-exports the whole public surface of `signalpost-core`.
pub mod prelude {
    pub use signalpost_core::prelude::*;
}
