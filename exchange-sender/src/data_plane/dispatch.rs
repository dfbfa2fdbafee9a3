//! Callback-to-future bridge for a single exchange.

use crate::control_plane::SendProcessor;
use crate::data_plane::send_future::{SendFuture, SendOutcome};
use crate::engine::{AsyncCallback, Endpoint};
use crate::error::SendError;
use crate::exchange::Exchange;
use crate::observability::{events, fields};
use tokio::sync::oneshot;
use tracing::{debug, trace};

const COMPONENT: &str = "dispatch";

pub(crate) fn dispatch(
    processor: &SendProcessor,
    exchange: Exchange,
    check_for_failure: bool,
) -> SendFuture {
    let exchange_id = fields::format_exchange_id(&exchange);
    let (sender, receiver) = oneshot::channel::<SendOutcome>();

    debug!(
        event = events::SEND_DISPATCH,
        component = COMPONENT,
        exchange_id = %exchange_id,
        endpoint = processor.endpoint().uri(),
        pattern = %exchange.pattern(),
        "dispatching exchange"
    );

    let callback = AsyncCallback::new(move |exchange, done_sync| {
        let outcome = complete(exchange, check_for_failure, done_sync);
        if sender.send(outcome).is_err() {
            trace!(
                event = events::SEND_RESULT_UNCLAIMED,
                component = COMPONENT,
                "send future dropped before completion"
            );
        }
    });

    let done_sync = processor.process(exchange, callback);
    trace!(
        event = events::SEND_DISPATCH,
        component = COMPONENT,
        exchange_id = %exchange_id,
        done_sync,
        "dispatch returned"
    );
    SendFuture::new(exchange_id, receiver)
}

fn complete(exchange: Exchange, check_for_failure: bool, done_sync: bool) -> SendOutcome {
    if check_for_failure {
        if let Some(failure) = exchange.failure() {
            debug!(
                event = events::SEND_COMPLETE_FAILED,
                component = COMPONENT,
                exchange_id = %fields::format_exchange_id(&exchange),
                failure = %fields::format_failure(&exchange),
                done_sync,
                "exchange completed with failure"
            );
            return Err(SendError::Failed(failure.clone()));
        }
    }

    debug!(
        event = events::SEND_COMPLETE,
        component = COMPONENT,
        exchange_id = %fields::format_exchange_id(&exchange),
        failed = exchange.is_failed(),
        done_sync,
        "exchange completed"
    );
    Ok(exchange)
}

#[cfg(test)]
mod tests {
    use super::{complete, dispatch};
    use crate::control_plane::SendProcessor;
    use crate::error::SendError;
    use crate::exchange::{Exchange, ExchangePattern};
    use crate::test_support::{MockEndpoint, ProducerBehavior};
    use std::sync::Arc;

    fn started(behavior: ProducerBehavior) -> SendProcessor {
        let mut processor =
            SendProcessor::new(MockEndpoint::detached("mock:dispatch", behavior)).unwrap();
        processor.start().unwrap();
        processor
    }

    fn failed_exchange() -> Exchange {
        let mut exchange = Exchange::new(ExchangePattern::InOnly);
        exchange.set_failure(Arc::new(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "too slow",
        )));
        exchange
    }

    #[test]
    fn failure_rejects_only_when_checked() {
        assert!(matches!(
            complete(failed_exchange(), true, true),
            Err(SendError::Failed(_))
        ));

        let delivered = complete(failed_exchange(), false, true).unwrap();
        assert!(delivered.is_failed());
    }

    #[tokio::test]
    async fn inline_completion_is_buffered_until_polled() {
        let processor = started(ProducerBehavior::CompleteInline);
        let exchange = Exchange::with_body(ExchangePattern::InOnly, "ping");
        let id = exchange.id().to_string();

        let future = dispatch(&processor, exchange, true);
        let delivered = future.await.unwrap();
        assert_eq!(delivered.id(), id);
        assert_eq!(delivered.to_endpoint(), Some("mock:dispatch"));
    }

    #[tokio::test]
    async fn completion_on_another_thread_resolves() {
        let processor = started(ProducerBehavior::CompleteOnThread);
        let exchange = Exchange::with_body(ExchangePattern::InOut, 7u64);

        let delivered = dispatch(&processor, exchange, true).await.unwrap();
        assert_eq!(delivered.in_message().body::<u64>(), Some(&7));
    }

    #[tokio::test]
    async fn dropped_callback_rejects_as_abandoned() {
        let processor = started(ProducerBehavior::DropCallback);
        let outcome = dispatch(&processor, Exchange::new(ExchangePattern::InOnly), true).await;
        assert!(matches!(outcome, Err(SendError::Abandoned)));
    }
}
