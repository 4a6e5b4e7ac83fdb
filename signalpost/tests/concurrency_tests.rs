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

use std::collections::HashSet;
use std::time::Duration;

use futures::future::join_all;
use signalpost::prelude::*;

use crate::setup::initialize_tracing;

mod setup;

/// Tests two sources emitting concurrently while a reader collects from both.
///
/// **Scenario:**
/// 1. Two actor sources each emit twenty numbered signals from their own
///    tasks, with small pauses so the streams interleave.
/// 2. A reader loops `receive([a, b], 5s)` until it has forty signals.
///
/// **Verification:**
/// - Exactly forty signals arrive, twenty per source.
/// - Each source's subsequence is in emission order.
#[tokio::test]
async fn test_two_sources_interleave() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source_a: SourceId = ActorId::random().into();
    let source_b: SourceId = ActorId::random().into();

    let mut senders = Vec::new();
    for (source, tag) in [(source_a, "a"), (source_b, "b")] {
        let fabric = runtime.clone();
        senders.push(tokio::spawn(async move {
            for i in 0..20u32 {
                fabric
                    .send_from(&source, Signal::user(format!("{tag}{i}")).unwrap())
                    .await
                    .unwrap();
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }));
    }

    let mut mailbox = runtime.mailbox();
    let mut collected = SignalBatch::new();
    while collected.len() < 40 {
        let batch = mailbox
            .receive(&[source_a, source_b], Some(Duration::from_secs(5)))
            .await;
        assert!(!batch.is_empty(), "senders went quiet before 40 signals");
        collected.extend(batch);
    }
    join_all(senders).await;

    assert_eq!(collected.len(), 40);
    for (source, tag) in [(source_a, "a"), (source_b, "b")] {
        let indices: Vec<u32> = collected
            .iter()
            .filter(|(s, _)| *s == source)
            .map(|(_, signal)| {
                let text = signal.payload().and_then(|v| v.as_str()).unwrap();
                text.strip_prefix(tag).unwrap().parse().unwrap()
            })
            .collect();
        assert_eq!(
            indices,
            (0..20).collect::<Vec<u32>>(),
            "source {tag} must arrive gap-free and in order"
        );
    }
    Ok(())
}

/// Tests that concurrent senders sharing one source identity are serialized
/// by the counter store: every payload lands exactly once.
#[tokio::test]
async fn test_concurrent_senders_share_one_counter() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SignalpostApp::launch();
    let source: SourceId = ActorId::random().into();

    // Open the stream first so the workers below race on the counter, not on
    // claiming the reserved base.
    runtime.send_from(&source, Signal::user("open")?).await?;

    let mut workers = Vec::new();
    for worker in 0..2u32 {
        let fabric = runtime.clone();
        workers.push(tokio::spawn(with_source(source, async move {
            for i in 0..10u32 {
                fabric
                    .send(Signal::user(format!("w{worker}-{i}")).unwrap())
                    .await
                    .unwrap();
            }
        })));
    }
    join_all(workers).await;

    let mut mailbox = runtime.mailbox();
    let mut collected = SignalBatch::new();
    while collected.len() < 21 {
        let batch = mailbox
            .receive(&[source], Some(Duration::from_secs(5)))
            .await;
        assert!(!batch.is_empty(), "stream went quiet before 21 signals");
        collected.extend(batch);
    }

    let unique: HashSet<String> = collected
        .iter()
        .filter_map(|(_, s)| s.payload())
        .filter_map(|v| v.as_str())
        .map(str::to_owned)
        .collect();
    assert_eq!(unique.len(), 21, "no payload may be lost or duplicated");
    Ok(())
}
