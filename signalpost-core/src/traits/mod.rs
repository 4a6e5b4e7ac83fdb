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

//! Contracts the protocol needs from its backing stores.
//!
//! Production engines implement these against their own infrastructure (a
//! Redis-like counter service, a shared object store); the
//! [`store`](crate::store) module ships in-memory reference implementations.

pub use counter_store::CounterStore;
pub use signal_store::SignalStore;

mod counter_store;
mod signal_store;
