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
use crate::signal::SignalAddress;

/// Represents errors that can occur when publishing signals.
///
/// Receiving has no error path of its own: faults in observed sources arrive
/// as [`Signal::Error`](crate::signal::Signal::Error) data, and a timeout
/// simply yields an empty batch.
#[derive(Debug)]
pub enum SignalError {
    /// A payload was already published under this address.
    DuplicateAddress(SignalAddress),
    /// `send` was called outside any ambient source scope and without an
    /// explicit source.
    NoAmbientSource,
    /// The signal store was closed while the operation was in flight.
    StoreClosed,
    /// A user payload could not be serialized.
    Serialization(String),
}

impl std::fmt::Display for SignalError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SignalError::DuplicateAddress(address) => {
                write!(f, "Signal already published at address: {}", address)
            }
            SignalError::NoAmbientSource => {
                write!(f, "No ambient source identity; use send_from or a source scope")
            }
            SignalError::StoreClosed => write!(f, "Signal store is closed"),
            SignalError::Serialization(msg) => write!(f, "Failed to serialize payload: {}", msg),
        }
    }
}

impl std::error::Error for SignalError {}

/// Converts a `serde_json` error raised while encoding a user payload.
impl From<serde_json::Error> for SignalError {
    fn from(e: serde_json::Error) -> Self {
        SignalError::Serialization(e.to_string())
    }
}
