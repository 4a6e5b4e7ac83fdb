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

//! Ambient caller identity, scoped per task.
//!
//! The execution engine wraps each task body and actor method body in
//! [`with_source`], so that [`SignalRuntime::send`](crate::common::SignalRuntime::send)
//! can answer "who is emitting this?" without threading a [`SourceId`]
//! through every call site.

use std::future::Future;

use crate::identity::SourceId;

tokio::task_local! {
    static CURRENT_SOURCE: SourceId;
}

/// Runs `fut` with `source` installed as the ambient caller identity.
///
/// Nested scopes shadow outer ones; the identity is visible to everything
/// awaited inside `fut`, on whichever worker thread it resumes.
pub async fn with_source<F>(source: SourceId, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_SOURCE.scope(source, fut).await
}

/// Returns the ambient caller identity, if the current task runs inside a
/// [`with_source`] scope.
pub fn current_source() -> Option<SourceId> {
    CURRENT_SOURCE.try_with(|source| *source).ok()
}
