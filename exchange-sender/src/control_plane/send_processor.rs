//! Lifecycle-managed send resource bound to one endpoint.

use crate::engine::{AsyncCallback, Endpoint, Producer};
use crate::error::BoxError;
use crate::exchange::Exchange;
use crate::observability::events;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "send_processor";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ServiceStatus {
    Stopped,
    Started,
}

pub struct SendProcessor {
    endpoint: Arc<dyn Endpoint>,
    producer: Arc<dyn Producer>,
    status: ServiceStatus,
}

impl SendProcessor {
    pub(crate) fn new(endpoint: Arc<dyn Endpoint>) -> Result<Self, BoxError> {
        let producer = endpoint.create_producer()?;

        debug!(
            event = events::PROCESSOR_CREATE,
            component = COMPONENT,
            endpoint = endpoint.uri(),
            "created send processor"
        );

        Ok(Self {
            endpoint,
            producer,
            status: ServiceStatus::Stopped,
        })
    }

    pub fn endpoint(&self) -> &Arc<dyn Endpoint> {
        &self.endpoint
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub(crate) fn start(&mut self) -> Result<(), BoxError> {
        if self.status == ServiceStatus::Started {
            return Ok(());
        }

        if let Err(err) = self.producer.start() {
            warn!(
                event = events::PROCESSOR_START_FAILED,
                component = COMPONENT,
                endpoint = self.endpoint.uri(),
                err = %err,
                "unable to start send processor"
            );
            return Err(err);
        }

        self.status = ServiceStatus::Started;
        debug!(
            event = events::PROCESSOR_START,
            component = COMPONENT,
            endpoint = self.endpoint.uri(),
            "send processor started"
        );
        Ok(())
    }

    /// Stops the producer. The processor counts as stopped afterwards even when
    /// the producer reports an error, so it is never stopped twice.
    pub(crate) fn stop(&mut self) -> Result<(), BoxError> {
        if self.status == ServiceStatus::Stopped {
            return Ok(());
        }
        self.status = ServiceStatus::Stopped;

        if let Err(err) = self.producer.stop() {
            warn!(
                event = events::PROCESSOR_STOP_FAILED,
                component = COMPONENT,
                endpoint = self.endpoint.uri(),
                err = %err,
                "unable to stop send processor"
            );
            return Err(err);
        }

        debug!(
            event = events::PROCESSOR_STOP,
            component = COMPONENT,
            endpoint = self.endpoint.uri(),
            "send processor stopped"
        );
        Ok(())
    }

    pub(crate) fn process(&self, mut exchange: Exchange, callback: AsyncCallback) -> bool {
        exchange.set_to_endpoint(self.endpoint.uri());
        self.producer.process(exchange, callback)
    }
}

impl Drop for SendProcessor {
    fn drop(&mut self) {
        // Errors are already logged by stop().
        let _ = self.stop();
    }
}

impl Debug for SendProcessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendProcessor")
            .field("endpoint", &self.endpoint.uri())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{SendProcessor, ServiceStatus};
    use crate::engine::{AsyncCallback, Endpoint};
    use crate::exchange::{Exchange, ExchangePattern};
    use crate::test_support::{MockEndpoint, ProducerBehavior};
    use std::sync::atomic::Ordering;
    use std::sync::{Arc, Mutex};

    #[test]
    fn start_and_stop_track_producer_lifecycle() {
        let endpoint = MockEndpoint::detached("mock:a", ProducerBehavior::CompleteInline);
        let mut processor = SendProcessor::new(endpoint.clone()).unwrap();
        assert_eq!(processor.status(), ServiceStatus::Stopped);

        processor.start().unwrap();
        processor.start().unwrap();
        assert_eq!(processor.status(), ServiceStatus::Started);
        assert_eq!(endpoint.stats.live.load(Ordering::SeqCst), 1);

        processor.stop().unwrap();
        assert_eq!(processor.status(), ServiceStatus::Stopped);
        assert_eq!(endpoint.stats.live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failed_start_leaves_processor_stopped() {
        let endpoint = MockEndpoint::detached("mock:a", ProducerBehavior::CompleteInline);
        endpoint.stats.fail_start.store(true, Ordering::SeqCst);

        let mut processor = SendProcessor::new(endpoint.clone()).unwrap();
        assert!(processor.start().is_err());
        assert_eq!(processor.status(), ServiceStatus::Stopped);
        assert_eq!(endpoint.stats.live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dropping_a_started_processor_stops_it() {
        let endpoint = MockEndpoint::detached("mock:a", ProducerBehavior::CompleteInline);
        let mut processor = SendProcessor::new(endpoint.clone()).unwrap();
        processor.start().unwrap();

        drop(processor);
        assert_eq!(endpoint.stats.live.load(Ordering::SeqCst), 0);
        assert_eq!(endpoint.stats.stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn process_stamps_destination_uri() {
        let endpoint = MockEndpoint::detached("mock:orders", ProducerBehavior::CompleteInline);
        let mut processor = SendProcessor::new(endpoint.clone()).unwrap();
        processor.start().unwrap();

        let seen = Arc::new(Mutex::new(None));
        let seen_in_callback = seen.clone();
        let done_sync = processor.process(
            Exchange::new(ExchangePattern::InOnly),
            AsyncCallback::new(move |exchange, done_sync| {
                *seen_in_callback.lock().unwrap() =
                    Some((exchange.to_endpoint().map(str::to_string), done_sync));
            }),
        );

        assert!(done_sync);
        assert_eq!(
            *seen.lock().unwrap(),
            Some((Some(endpoint.uri().to_string()), true))
        );
    }
}
