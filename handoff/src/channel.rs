//! Zero-buffer handoff channel.
//!
//! A value offered by [`Sender::send`] sits in a single slot until the
//! [`Receiver`] takes it; the receiver then acknowledges over a oneshot, and
//! only that acknowledgement lets the send complete. Sender and receiver
//! therefore always meet: neither side can run ahead of the other by a value.
//!
//! Dropping the opposite end turns a would-be hang into a [`HandoffError`].

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// The one slot that holds an offered value. The slot itself is the only
/// buffering; the ack makes the send synchronous.
const OFFER_SLOTS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandoffError {
    #[error("handoff receiver dropped before taking the value")]
    ReceiverDropped,
    #[error("all handoff senders dropped")]
    SenderDropped,
}

struct Offer<T> {
    value: T,
    ack: oneshot::Sender<()>,
}

/// Create a connected sender/receiver pair.
#[must_use]
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = mpsc::channel(OFFER_SLOTS);
    (Sender { tx }, Receiver { rx })
}

/// Sending half. Cloning yields another sender into the same channel.
pub struct Sender<T> {
    tx: mpsc::Sender<Offer<T>>,
}

impl<T> Sender<T> {
    /// Hand `value` to the receiver, suspending until it has been taken.
    ///
    /// Dropping this future after the value was offered does not retract it:
    /// the receiver still gets the value, nobody observes the ack.
    pub async fn send(&self, value: T) -> Result<(), HandoffError> {
        let (ack, acked) = oneshot::channel();
        self.tx
            .send(Offer { value, ack })
            .await
            .map_err(|_| HandoffError::ReceiverDropped)?;
        tracing::trace!("handoff offered, waiting for receiver");
        acked.await.map_err(|_| HandoffError::ReceiverDropped)
    }

    /// True once the receiver has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sender")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Receiving half. There is exactly one per channel.
pub struct Receiver<T> {
    rx: mpsc::Receiver<Offer<T>>,
}

impl<T> Receiver<T> {
    /// Take the next value, suspending until a sender offers one.
    ///
    /// Cancel safe: if the future is dropped before completing, no value has
    /// been taken and the sender keeps waiting.
    pub async fn recv(&mut self) -> Result<T, HandoffError> {
        let Offer { value, ack } = self.rx.recv().await.ok_or(HandoffError::SenderDropped)?;
        // The sender may have given up waiting; the value is ours regardless.
        let _ = ack.send(());
        Ok(value)
    }
}

impl<T> std::fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver").finish_non_exhaustive()
    }
}
