//! Rendezvous concurrency primitives for Tether.
//!
//! - **`channel`**: zero-buffer handoff channel where every send waits for a
//!   matching receive
//! - **`relay`**: two-party helpers built on the channel (read both, write
//!   both, receive-then-forward)
//! - **`request`**: spawn a server task and await its single reply
//! - **`select`**: service several delayed sources strictly in readiness order

pub mod channel;
pub mod relay;
pub mod request;
pub mod select;

pub use channel::{HandoffError, Receiver, Sender, channel};
pub use relay::{read_from_both, read_then_write, write_to_both};
pub use request::{send_request, serve};
pub use select::{DEFAULT_SELECT_DELAYS, SOURCE_COUNT, select_ordered, source_message};
