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

use std::fmt;
use std::fmt::Debug;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Width in bytes of a stable source key.
pub const KEY_LEN: usize = 20;

/// Stable binary key identifying the logical origin of a signal stream.
///
/// A `SourceKey` is the resolved form of a [`SourceId`]: the counter store
/// allocates sequence numbers under it, and signal addresses are derived from
/// it. Keys are never reused across unrelated sources.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceKey([u8; KEY_LEN]);

impl SourceKey {
    /// Wraps a raw key provided by the execution engine.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub(crate) fn random() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceKey({})", hex::encode(self.0))
    }
}

/// Identity of a single task invocation.
///
/// The execution engine assigns one `TaskId` per task run; every signal the
/// task emits shares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(SourceKey);

impl TaskId {
    /// Wraps an engine-assigned task key.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(SourceKey::from_bytes(bytes))
    }

    /// Generates a fresh task identity.
    pub fn random() -> Self {
        Self(SourceKey::random())
    }

    /// The stable key this task allocates sequence numbers under.
    pub const fn key(&self) -> SourceKey {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task:{}", self.0)
    }
}

/// Identity of an actor across its whole lifetime.
///
/// An actor's signals are keyed by its *creation* identity, not by the
/// identity of whichever method invocation emitted them, so that every method
/// of one actor feeds a single ordered stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId {
    creation: TaskId,
}

impl ActorId {
    /// Builds an actor identity from the engine's creation-task identity.
    pub const fn new(creation: TaskId) -> Self {
        Self { creation }
    }

    /// Generates a fresh actor identity.
    pub fn random() -> Self {
        Self {
            creation: TaskId::random(),
        }
    }

    /// The creation-task identity shared by all of this actor's signals.
    pub const fn creation_task(&self) -> TaskId {
        self.creation
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor:{}", self.creation.key())
    }
}

/// The logical origin of a signal stream: a task invocation or an actor.
///
/// Each variant resolves to a stable [`SourceKey`] through
/// [`SourceId::resolve_key`]; nothing else in the protocol inspects the
/// variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// Signals emitted by (or on behalf of) one task invocation.
    Task(TaskId),
    /// Signals emitted by (or on behalf of) one actor, across all its methods.
    Actor(ActorId),
}

impl SourceId {
    /// Resolves the stable key this source allocates sequence numbers under.
    ///
    /// For actors this is the creation identity, so concurrent method
    /// invocations against one actor share a counter and an address family.
    pub const fn resolve_key(&self) -> SourceKey {
        match self {
            SourceId::Task(task) => task.key(),
            SourceId::Actor(actor) => actor.creation_task().key(),
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Task(task) => fmt::Display::fmt(task, f),
            SourceId::Actor(actor) => fmt::Display::fmt(actor, f),
        }
    }
}

impl From<TaskId> for SourceId {
    fn from(task: TaskId) -> Self {
        SourceId::Task(task)
    }
}

impl From<ActorId> for SourceId {
    fn from(actor: ActorId) -> Self {
        SourceId::Actor(actor)
    }
}
