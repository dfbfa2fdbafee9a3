use crate::journal::{LifecycleEvent, LifecycleJournal};
use crate::routes::Route;
use exchange_sender::{
    AsyncCallback, BoxError, Endpoint, Exchange, ExchangePattern, Failure, Producer,
    RoutingContext,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::trace;

/// Where and when a producer invokes the completion callback.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Completion {
    /// On the dispatching thread, before `process` returns.
    ///
    /// The route is driven by `futures::executor::block_on`, so it must not
    /// await tokio timers, I/O or other runtime-driven resources: on a
    /// current-thread runtime nothing would ever wake it. Use `Spawned` or
    /// `Delayed` for such routes.
    #[default]
    Inline,
    /// On a tokio task spawned on the current runtime.
    Spawned,
    /// On a tokio task, after sleeping for the given duration.
    Delayed(Duration),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EndpointOptions {
    pub pattern: ExchangePattern,
    pub completion: Completion,
}

#[derive(Debug, Default)]
pub struct ProducerCounters {
    pub created: AtomicUsize,
    pub live: AtomicUsize,
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub dispatched: AtomicUsize,
    pub fail_create: AtomicBool,
    pub fail_start: AtomicBool,
    pub fail_stop: AtomicBool,
}

pub struct LocalEndpoint {
    uri: String,
    options: EndpointOptions,
    route: Arc<dyn Route>,
    context: Weak<dyn RoutingContext>,
    journal: Arc<LifecycleJournal>,
    counters: Arc<ProducerCounters>,
}

impl LocalEndpoint {
    pub(crate) fn new(
        uri: &str,
        options: EndpointOptions,
        route: Arc<dyn Route>,
        context: Weak<dyn RoutingContext>,
        journal: Arc<LifecycleJournal>,
    ) -> Self {
        Self {
            uri: uri.to_string(),
            options,
            route,
            context,
            journal,
            counters: Arc::default(),
        }
    }

    pub fn counters(&self) -> &ProducerCounters {
        &self.counters
    }
}

impl Endpoint for LocalEndpoint {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn context(&self) -> Option<Arc<dyn RoutingContext>> {
        self.context.upgrade()
    }

    fn exchange_pattern(&self) -> ExchangePattern {
        self.options.pattern
    }

    fn create_producer(&self) -> Result<Arc<dyn Producer>, BoxError> {
        if self.counters.fail_create.load(Ordering::SeqCst) {
            return Err(format!("{}: producer creation refused", self.uri).into());
        }
        self.counters.created.fetch_add(1, Ordering::SeqCst);

        Ok(Arc::new(LocalProducer {
            uri: self.uri.clone(),
            completion: self.options.completion,
            route: self.route.clone(),
            journal: self.journal.clone(),
            counters: self.counters.clone(),
        }))
    }
}

struct LocalProducer {
    uri: String,
    completion: Completion,
    route: Arc<dyn Route>,
    journal: Arc<LifecycleJournal>,
    counters: Arc<ProducerCounters>,
}

impl LocalProducer {
    async fn run(route: Arc<dyn Route>, mut exchange: Exchange) -> Exchange {
        if let Err(failure) = route.handle(&mut exchange).await {
            exchange.set_failure(failure);
        }
        exchange
    }
}

impl Producer for LocalProducer {
    fn start(&self) -> Result<(), BoxError> {
        if self.counters.fail_start.load(Ordering::SeqCst) {
            return Err(format!("{}: producer start refused", self.uri).into());
        }
        self.counters.starts.fetch_add(1, Ordering::SeqCst);
        self.counters.live.fetch_add(1, Ordering::SeqCst);
        self.journal
            .record(LifecycleEvent::Started(self.uri.clone()));
        Ok(())
    }

    fn stop(&self) -> Result<(), BoxError> {
        self.counters.stops.fetch_add(1, Ordering::SeqCst);
        if self.counters.fail_stop.load(Ordering::SeqCst) {
            return Err(format!("{}: producer stop refused", self.uri).into());
        }
        self.counters.live.fetch_sub(1, Ordering::SeqCst);
        self.journal
            .record(LifecycleEvent::Stopped(self.uri.clone()));
        Ok(())
    }

    fn process(&self, mut exchange: Exchange, callback: AsyncCallback) -> bool {
        self.counters.dispatched.fetch_add(1, Ordering::SeqCst);
        let route = self.route.clone();

        let delay = match self.completion {
            Completion::Inline => {
                let exchange = futures::executor::block_on(Self::run(route, exchange));
                callback.done(exchange, true);
                return true;
            }
            Completion::Spawned => None,
            Completion::Delayed(delay) => Some(delay),
        };

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                let failure: Failure = Arc::new(err);
                exchange.set_failure(failure);
                callback.done(exchange, true);
                return true;
            }
        };

        trace!(uri = %self.uri, ?delay, "completing exchange on a spawned task");
        handle.spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let exchange = Self::run(route, exchange).await;
            callback.done(exchange, false);
        });
        false
    }
}
