//! Single request/response exchange with a spawned server task.

use tracing::debug;

use crate::channel::{HandoffError, Sender, channel};

/// Spawn a server for `input` and wait for its reply.
pub async fn send_request(input: &str) -> Result<String, HandoffError> {
    let (responses, mut replies) = channel();
    let request = input.to_owned();
    tokio::spawn(async move {
        if let Err(e) = serve(request, responses).await {
            debug!("request server could not reply: {e}");
        }
    });
    replies.recv().await
}

/// Server half of [`send_request`]: answer one request on `responses`.
pub async fn serve(request: String, responses: Sender<String>) -> Result<(), HandoffError> {
    responses.send(format!("processed: {request}")).await
}
