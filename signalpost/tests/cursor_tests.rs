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

#![allow(dead_code)]

use std::time::Duration;

use signalpost::prelude::*;

use crate::setup::{initialize_tracing, payload_strings, receive_all};

mod setup;

/// Tests that `forget` hides everything emitted before the call while leaving
/// later emissions deliverable.
///
/// **Scenario:**
/// 1. Emit five signals on behalf of an actor.
/// 2. `forget` the actor on a fresh mailbox.
/// 3. Emit five more signals.
///
/// **Verification:**
/// - The reader collects exactly the five post-forget payloads.
#[tokio::test]
async fn test_forget_hides_past_but_not_future() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source: SourceId = ActorId::random().into();

    for i in 0..5 {
        runtime
            .send_from(&source, Signal::user(format!("old{i}"))?)
            .await?;
    }

    let mut mailbox = runtime.mailbox();
    mailbox.forget(&[source]).await;

    for i in 0..5 {
        runtime
            .send_from(&source, Signal::user(format!("new{i}"))?)
            .await?;
    }

    let batch = receive_all(&mut mailbox, &[source], Duration::from_millis(200)).await;
    assert_eq!(
        payload_strings(&batch),
        ["new0", "new1", "new2", "new3", "new4"]
    );
    Ok(())
}

/// Tests `forget` on a source that has never emitted: the cursor lands on the
/// reserved base, so the very next signal is still delivered.
#[tokio::test]
async fn test_forget_on_silent_source_keeps_future_signals() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source: SourceId = TaskId::random().into();

    let mut mailbox = runtime.mailbox();
    mailbox.forget(&[source]).await;

    runtime.send_from(&source, Signal::user("first ever")?).await?;

    let batch = mailbox.receive(&[source], Some(Duration::ZERO)).await;
    assert_eq!(payload_strings(&batch), ["first ever"]);
    Ok(())
}

/// Tests that `reset` drops all cursors, so a consumed stream replays from
/// its first-ever signal.
#[tokio::test]
async fn test_reset_replays_history() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source: SourceId = TaskId::random().into();

    for payload in ["x", "y", "z"] {
        runtime.send_from(&source, Signal::user(payload)?).await?;
    }

    let mut mailbox = runtime.mailbox();
    let first = mailbox.receive(&[source], Some(Duration::ZERO)).await;
    assert_eq!(payload_strings(&first), ["x", "y", "z"]);
    assert!(mailbox
        .receive(&[source], Some(Duration::ZERO))
        .await
        .is_empty());

    mailbox.reset();

    let replay = mailbox.receive(&[source], Some(Duration::ZERO)).await;
    assert_eq!(payload_strings(&replay), ["x", "y", "z"]);
    Ok(())
}

/// Tests cursor eviction on completion: the `Done` marker is consumed as
/// bookkeeping, not delivered, and the reader stops tracking the source.
#[tokio::test]
async fn test_done_evicts_the_cursor() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source: SourceId = ActorId::random().into();

    runtime.send_from(&source, Signal::user("a")?).await?;
    runtime.send_from(&source, Signal::user("b")?).await?;
    runtime.notify_done(&source).await?;

    let mut mailbox = runtime.mailbox();
    let batch = mailbox.receive(&[source], Some(Duration::ZERO)).await;

    assert_eq!(payload_strings(&batch), ["a", "b"]);
    assert!(
        batch.iter().all(|(_, s)| s.kind() == SignalKind::User),
        "the Done marker must not surface in results"
    );
    assert_eq!(mailbox.tracked_sources(), 0);
    Ok(())
}

/// Tests that consumption stops at a mid-stream `Done`: signals sequenced
/// after it stay hidden for this pass.
#[tokio::test]
async fn test_receive_stops_at_done() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source: SourceId = TaskId::random().into();

    runtime.send_from(&source, Signal::user("before")?).await?;
    runtime.notify_done(&source).await?;
    runtime.send_from(&source, Signal::user("after")?).await?;

    let mut mailbox = runtime.mailbox();
    let batch = mailbox.receive(&[source], Some(Duration::ZERO)).await;

    assert_eq!(payload_strings(&batch), ["before"]);
    assert_eq!(mailbox.tracked_sources(), 0);
    Ok(())
}
