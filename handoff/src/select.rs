//! Readiness-ordered select over delayed sources.
//!
//! Each source is a task that sleeps for its delay and then offers one
//! message on its own handoff channel. The caller waits on all channels at
//! once and services whichever is ready first, once per source.

use std::array;
use std::time::Duration;

use tether_types::LineSink;
use tokio::time::sleep;
use tracing::debug;

use crate::channel::{HandoffError, Receiver, Sender, channel};

pub const SOURCE_COUNT: usize = 5;

/// Delays for sources c1..c5, deliberately out of order so the serviced order
/// differs from declaration order.
pub const DEFAULT_SELECT_DELAYS: [Duration; SOURCE_COUNT] = [
    Duration::from_millis(1),
    Duration::from_millis(3),
    Duration::from_millis(5),
    Duration::from_millis(2),
    Duration::from_millis(4),
];

/// Message sent by the source at zero-based `index`.
#[must_use]
pub fn source_message(index: usize) -> String {
    format!("from c{}", index + 1)
}

/// Start one source per delay and service all of them in readiness order.
///
/// Every serviced message is emitted to `sink` as it arrives. The returned
/// vector holds the messages in the order they were serviced.
///
/// Must be called from within a tokio runtime.
pub async fn select_ordered(
    delays: [Duration; SOURCE_COUNT],
    sink: &mut impl LineSink,
) -> Result<Vec<String>, HandoffError> {
    let mut sources: [Receiver<String>; SOURCE_COUNT] = array::from_fn(|index| {
        let (tx, rx) = channel();
        tokio::spawn(fire_after(source_message(index), delays[index], tx));
        rx
    });
    let [c1, c2, c3, c4, c5] = &mut sources;

    // A serviced source's task has exited, so its channel would report
    // SenderDropped immediately; those branches are disabled.
    let mut pending = [true; SOURCE_COUNT];
    let mut serviced = Vec::with_capacity(SOURCE_COUNT);

    for _ in 0..SOURCE_COUNT {
        let (index, message) = tokio::select! {
            msg = c1.recv(), if pending[0] => (0, msg?),
            msg = c2.recv(), if pending[1] => (1, msg?),
            msg = c3.recv(), if pending[2] => (2, msg?),
            msg = c4.recv(), if pending[3] => (3, msg?),
            msg = c5.recv(), if pending[4] => (4, msg?),
        };
        pending[index] = false;
        debug!(source = index + 1, "select serviced source");
        sink.emit(&message);
        serviced.push(message);
    }

    Ok(serviced)
}

async fn fire_after(message: String, delay: Duration, tx: Sender<String>) {
    sleep(delay).await;
    if let Err(e) = tx.send(message).await {
        debug!("select source abandoned: {e}");
    }
}
