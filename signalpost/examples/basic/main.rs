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

use std::time::Duration;

use signalpost::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let runtime = SignalpostApp::launch();

    // One worker task, identified the way an execution engine would identify
    // it. The engine wraps the task body in its source scope, so plain
    // `send` calls inside it need no explicit identity.
    let worker: SourceId = TaskId::random().into();
    let fabric = runtime.clone();
    let producer = tokio::spawn(with_source(worker, async move {
        for step in 0..3 {
            fabric.send(Signal::user(format!("step {step}"))?).await?;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        // A crashed step would be reported the same way by the engine itself.
        fabric
            .notify_failure(&worker, "step 3 hit a simulated fault")
            .await?;
        fabric.notify_done(&worker).await?;
        Ok::<(), SignalError>(())
    }));

    // The reader owns its cursors; nothing here polls a dispatcher.
    let mut mailbox = runtime.mailbox();
    loop {
        let batch = mailbox.receive(&[worker], Some(Duration::from_secs(1))).await;
        for (source, signal) in &batch {
            match signal {
                Signal::User(payload) => println!("{source} says {payload}"),
                Signal::Error(error) => println!("{source} failed: {}", error.reason),
                _ => {}
            }
        }
        if mailbox.tracked_sources() == 0 {
            println!("{worker} finished; cursor dropped");
            break;
        }
    }

    producer.await??;
    runtime.shutdown();
    Ok(())
}
