//! Two-party relays over handoff channels.

use tracing::debug;

use crate::channel::{HandoffError, Receiver, Sender};

/// Wait for one value from each channel and combine them.
///
/// Both receives run concurrently, so the feeding senders may arrive in any
/// order. Returns only after both values were taken.
pub async fn read_from_both(
    first: &mut Receiver<String>,
    second: &mut Receiver<String>,
) -> Result<String, HandoffError> {
    let (a, b) = tokio::try_join!(first.recv(), second.recv())?;
    Ok(format!("read: {a} & {b}"))
}

/// Start one send per channel and return without waiting for either.
///
/// Each send runs on its own spawned task. The caller gets no completion
/// signal; a send whose receiver is gone is logged and discarded.
///
/// Must be called from within a tokio runtime.
pub fn write_to_both(first: &Sender<String>, second: &Sender<String>, msg: &str) {
    let message = format!("write: {msg}");
    for (lane, tx) in [("first", first.clone()), ("second", second.clone())] {
        let message = message.clone();
        tokio::spawn(async move {
            if let Err(e) = tx.send(message).await {
                debug!(lane, "write_to_both send dropped: {e}");
            }
        });
    }
}

/// Receive one value from `input`, then hand its transform to `output`.
pub async fn read_then_write(
    input: &mut Receiver<String>,
    output: &Sender<String>,
) -> Result<(), HandoffError> {
    let value = input.recv().await?;
    debug!("relay received, forwarding");
    output.send(format!("transform: {value}")).await
}
