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

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::identity::SourceKey;

/// First usable sequence number for any source.
///
/// The range `[1, START_SEQUENCE)` is reserved: a counter value below it means
/// the counter was created by something other than this protocol (an unrelated
/// increment on the same key), and the send path clamps it before use.
pub const START_SEQUENCE: u64 = 10_000;

/// Width in bytes of a derived signal address.
pub const ADDRESS_LEN: usize = 20;

/// The lookup key under which exactly one signal payload is ever published.
///
/// Derived deterministically from `(source key, sequence number)`; distinct
/// pairs map to distinct addresses, and the signal store enforces write-once
/// per address, so an address is never republished.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalAddress([u8; ADDRESS_LEN]);

impl SignalAddress {
    /// Derives the address of the `sequence`-th signal of the source keyed by
    /// `key`.
    ///
    /// Pure and stateless: senders and readers compute matching addresses
    /// without coordination.
    pub fn derive(key: &SourceKey, sequence: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hasher.update(sequence.to_le_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[..ADDRESS_LEN]);
        Self(bytes)
    }

    /// Returns the raw address bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for SignalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for SignalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignalAddress({})", hex::encode(self.0))
    }
}
