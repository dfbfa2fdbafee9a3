//! Future handed back to callers of `send`.

use crate::error::SendError;
use crate::exchange::Exchange;
use crate::observability::events;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::warn;

const COMPONENT: &str = "send_future";

pub(crate) type SendOutcome = Result<Exchange, SendError>;

/// Resolves once the routing engine is done with the exchange.
///
/// Dropping the future does not stop the in-flight dispatch; the engine still
/// completes the exchange and the result is discarded.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct SendFuture {
    exchange_id: String,
    receiver: oneshot::Receiver<SendOutcome>,
}

impl SendFuture {
    pub(crate) fn new(exchange_id: String, receiver: oneshot::Receiver<SendOutcome>) -> Self {
        Self {
            exchange_id,
            receiver,
        }
    }

    /// Id of the exchange this future completes for.
    pub fn exchange_id(&self) -> &str {
        &self.exchange_id
    }
}

impl Future for SendFuture {
    type Output = Result<Exchange, SendError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => {
                warn!(
                    event = events::SEND_ABANDONED,
                    component = COMPONENT,
                    exchange_id = %self.exchange_id,
                    "completion callback dropped without completing the exchange"
                );
                Poll::Ready(Err(SendError::Abandoned))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
