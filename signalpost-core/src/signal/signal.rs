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
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::signal::SignalError;

/// A single entry in a source's signal stream.
///
/// User payloads are carried as serialized JSON values; the `Error` and `Done`
/// variants are synthetic, published by the execution engine when a source's
/// computation faults or finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Signal {
    /// An application-defined payload.
    User(serde_json::Value),
    /// The source's underlying computation raised an unhandled fault.
    Error(ErrorSignal),
    /// The source completed normally; no further signals will follow.
    ///
    /// Consuming a `Done` tells the reader to stop tracking the source's
    /// cursor.
    Done,
}

impl Signal {
    /// Builds a user signal from any serializable payload.
    pub fn user(payload: impl Serialize) -> Result<Self, SignalError> {
        Ok(Signal::User(serde_json::to_value(payload)?))
    }

    /// Builds the synthetic fault signal the engine publishes for a crashed
    /// source.
    pub fn error(reason: impl Into<String>) -> Self {
        Signal::Error(ErrorSignal::new(reason.into()))
    }

    /// The discriminant of this signal.
    pub const fn kind(&self) -> SignalKind {
        match self {
            Signal::User(_) => SignalKind::User,
            Signal::Error(_) => SignalKind::Error,
            Signal::Done => SignalKind::Done,
        }
    }

    /// The user payload, when this is a user signal.
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Signal::User(value) => Some(value),
            _ => None,
        }
    }
}

/// Discriminant of a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Application-defined payload.
    User,
    /// Synthetic fault notification.
    Error,
    /// Synthetic completion notification.
    Done,
}

/// Payload of a synthetic fault signal.
///
/// Faults in an observed source are delivered as data rather than raised at
/// the reader, so a receive call never fails merely because the thing it
/// watches crashed.
#[derive(new, Debug, Clone, Serialize, Deserialize)]
pub struct ErrorSignal {
    /// Human-readable description of the fault.
    pub reason: String,
}
