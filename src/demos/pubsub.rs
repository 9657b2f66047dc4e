//! Publish/subscribe: a chat channel and a one-shot notification.
//!
//! Each round subscribes on a dedicated connection, hands the message stream
//! to a spawned listener, and publishes from the shared connection. The
//! listener reports back through a one-shot channel and gives up at a fixed
//! deadline, so a lost message surfaces as a timeout instead of a hang.

use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use redis::AsyncCommands;
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const CHAT_CHANNEL: &str = "chat:room1";
const NOTIFY_CHANNEL: &str = "notifications";
const CHAT_MESSAGES: usize = 3;
const PUBLISH_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run(
    store: &Store,
    out: Arc<dyn RenderSink>,
    timeout: Duration,
) -> Result<(), DemoError> {
    out.section("Pub/Sub Example");

    out.step("1. Subscribing to channel and publishing messages:");
    let payloads: Vec<String> = (1..=CHAT_MESSAGES)
        .map(|i| format!("Hello {i} from publisher!"))
        .collect();
    let received = publish_round(
        store,
        &out,
        CHAT_CHANNEL,
        &payloads,
        "Subscriber received",
        timeout,
    )
    .await?;
    out.detail(&format!("Subscriber got {} of {CHAT_MESSAGES} messages", received.len()));

    out.step("2. Practical example - Real-time notification system:");
    publish_round(
        store,
        &out,
        NOTIFY_CHANNEL,
        &["You have a new follower!".to_string()],
        "Notification received",
        timeout,
    )
    .await?;

    out.step("3. Pub/Sub demo complete:");
    out.success("No keys to clean up for pub/sub channels");
    Ok(())
}

/// Subscribe, spawn a listener expecting `payloads.len()` messages, publish
/// every payload, then wait for the listener's verdict.
async fn publish_round(
    store: &Store,
    out: &Arc<dyn RenderSink>,
    channel: &str,
    payloads: &[String],
    label: &'static str,
    timeout: Duration,
) -> Result<Vec<String>, DemoError> {
    let mut pubsub = store.pubsub().await?;
    pubsub.subscribe(channel).await?;

    let expected = payloads.len();
    let deadline = Instant::now() + timeout;
    let (done_tx, done_rx) = oneshot::channel();
    let listener_out = Arc::clone(out);
    let listener = tokio::spawn(async move {
        let messages = pubsub.into_on_message().filter_map(|msg| async move {
            match msg.get_payload::<String>() {
                Ok(payload) => Some(payload),
                Err(err) => {
                    tracing::warn!(error = %err, "dropping undecodable pub/sub payload");
                    None
                }
            }
        });
        let result = receive_messages(messages, expected, deadline, listener_out.as_ref(), label).await;
        let _ = done_tx.send(result);
    });

    if let Err(err) = publish_all(store, out.as_ref(), channel, payloads).await {
        listener.abort();
        return Err(err);
    }
    await_listener(done_rx).await
}

async fn publish_all(
    store: &Store,
    out: &dyn RenderSink,
    channel: &str,
    payloads: &[String],
) -> Result<(), DemoError> {
    let mut con = store.connection();
    for payload in payloads {
        let receivers: i64 = con.publish(channel, payload).await?;
        tracing::debug!(channel, receivers, "published");
        out.detail(&format!("Publisher sent: {payload}"));
        tokio::time::sleep(PUBLISH_INTERVAL).await;
    }
    Ok(())
}

/// Completion barrier: wait for the listener's one-shot result.
async fn await_listener(
    done: oneshot::Receiver<Result<Vec<String>, DemoError>>,
) -> Result<Vec<String>, DemoError> {
    done.await.map_err(|_| DemoError::ListenerGone)?
}

/// Collect exactly `expected` payloads from `messages` before `deadline`.
pub(crate) async fn receive_messages<S>(
    messages: S,
    expected: usize,
    deadline: Instant,
    out: &dyn RenderSink,
    label: &str,
) -> Result<Vec<String>, DemoError>
where
    S: Stream<Item = String>,
{
    let mut messages = std::pin::pin!(messages);
    let mut received = Vec::with_capacity(expected);
    while received.len() < expected {
        match tokio::time::timeout_at(deadline, messages.next()).await {
            Ok(Some(payload)) => {
                out.detail(&format!("{label}: {payload}"));
                received.push(payload);
            }
            Ok(None) => {
                return Err(DemoError::ListenerClosed {
                    expected,
                    received: received.len(),
                })
            }
            Err(_) => {
                return Err(DemoError::ListenerTimeout {
                    expected,
                    received: received.len(),
                })
            }
        }
    }
    Ok(received)
}
