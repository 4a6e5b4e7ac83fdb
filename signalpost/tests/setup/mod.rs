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
use std::sync::Once;
use std::time::Duration;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use signalpost::prelude::*;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Initializes the global tracing subscriber for tests.
///
/// Sets up a `tracing_subscriber::FmtSubscriber` with an `EnvFilter`
/// controlling log levels for the protocol crates, writing to a non-blocking
/// rolling file. Uses `std::sync::Once` so the initialization runs only once
/// even when called from multiple tests.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        // Ensure logs directory exists
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        // Set up file appender (no rotation, file is logs/mailbox_tests.txt)
        let file_appender = RollingFileAppender::new(Rotation::NEVER, "logs", "mailbox_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the non-blocking writer is not dropped before process exit
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new("info")
            .add_directive("signalpost_core=trace".parse().unwrap())
            .add_directive("signalpost=debug".parse().unwrap());

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
            .with_writer(non_blocking)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default tracing subscriber failed");
    });
}

/// Drains `sources` until one receive window of `timeout` passes with no new
/// signals, and returns everything collected.
pub async fn receive_all(
    mailbox: &mut Mailbox,
    sources: &[SourceId],
    timeout: Duration,
) -> SignalBatch {
    let mut results = SignalBatch::new();
    loop {
        let batch = mailbox.receive(sources, Some(timeout)).await;
        if batch.is_empty() {
            return results;
        }
        results.extend(batch);
    }
}

/// Extracts the string payloads of a batch, in order.
pub fn payload_strings(batch: &SignalBatch) -> Vec<String> {
    batch
        .iter()
        .filter_map(|(_, signal)| signal.payload())
        .filter_map(|value| value.as_str())
        .map(str::to_owned)
        .collect()
}
