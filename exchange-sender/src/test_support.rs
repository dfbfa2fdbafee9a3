//! In-crate doubles for the routing engine, shared by unit tests.

use crate::engine::{AsyncCallback, Endpoint, Producer, RoutingContext};
use crate::error::BoxError;
use crate::exchange::{Exchange, ExchangePattern};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread;

#[derive(Clone, Debug)]
pub(crate) enum ProducerBehavior {
    CompleteInline,
    FailInline(&'static str),
    CompleteOnThread,
    DropCallback,
}

#[derive(Default)]
pub(crate) struct ProducerStats {
    pub(crate) live: AtomicUsize,
    pub(crate) peak: AtomicUsize,
    pub(crate) starts: AtomicUsize,
    pub(crate) stops: AtomicUsize,
    pub(crate) fail_create: AtomicBool,
    pub(crate) fail_start: AtomicBool,
    pub(crate) fail_stop: AtomicBool,
}

pub(crate) struct MockProducer {
    behavior: ProducerBehavior,
    stats: Arc<ProducerStats>,
}

impl Producer for MockProducer {
    fn start(&self) -> Result<(), BoxError> {
        if self.stats.fail_start.load(Ordering::SeqCst) {
            return Err("start refused".into());
        }
        self.stats.starts.fetch_add(1, Ordering::SeqCst);
        let live = self.stats.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.peak.fetch_max(live, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), BoxError> {
        self.stats.stops.fetch_add(1, Ordering::SeqCst);
        if self.stats.fail_stop.load(Ordering::SeqCst) {
            return Err("stop refused".into());
        }
        self.stats.live.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }

    fn process(&self, mut exchange: Exchange, callback: AsyncCallback) -> bool {
        match self.behavior {
            ProducerBehavior::CompleteInline => {
                callback.done(exchange, true);
                true
            }
            ProducerBehavior::FailInline(reason) => {
                exchange.set_failure(Arc::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    reason,
                )));
                callback.done(exchange, true);
                true
            }
            ProducerBehavior::CompleteOnThread => {
                thread::spawn(move || callback.done(exchange, false));
                false
            }
            ProducerBehavior::DropCallback => {
                drop(callback);
                false
            }
        }
    }
}

pub(crate) struct MockEndpoint {
    uri: String,
    pattern: ExchangePattern,
    context: Option<Weak<dyn RoutingContext>>,
    behavior: ProducerBehavior,
    pub(crate) stats: Arc<ProducerStats>,
}

impl MockEndpoint {
    /// An endpoint that belongs to no routing context.
    pub(crate) fn detached(uri: &str, behavior: ProducerBehavior) -> Arc<Self> {
        Arc::new(Self {
            uri: uri.to_string(),
            pattern: ExchangePattern::InOnly,
            context: None,
            behavior,
            stats: Arc::default(),
        })
    }
}

impl Endpoint for MockEndpoint {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn context(&self) -> Option<Arc<dyn RoutingContext>> {
        self.context.as_ref().and_then(Weak::upgrade)
    }

    fn exchange_pattern(&self) -> ExchangePattern {
        self.pattern
    }

    fn create_producer(&self) -> Result<Arc<dyn Producer>, BoxError> {
        if self.stats.fail_create.load(Ordering::SeqCst) {
            return Err("no producer available".into());
        }
        Ok(Arc::new(MockProducer {
            behavior: self.behavior.clone(),
            stats: self.stats.clone(),
        }))
    }
}

pub(crate) struct MockContext {
    name: String,
    endpoints: Mutex<HashMap<String, Arc<MockEndpoint>>>,
}

impl MockContext {
    pub(crate) fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            endpoints: Mutex::new(HashMap::new()),
        })
    }

    pub(crate) fn handle(self: &Arc<Self>) -> Arc<dyn RoutingContext> {
        self.clone()
    }

    pub(crate) fn register(
        self: &Arc<Self>,
        uri: &str,
        pattern: ExchangePattern,
        behavior: ProducerBehavior,
    ) -> Arc<MockEndpoint> {
        let context: Arc<dyn RoutingContext> = self.clone();
        let endpoint = Arc::new(MockEndpoint {
            uri: uri.to_string(),
            pattern,
            context: Some(Arc::downgrade(&context)),
            behavior,
            stats: Arc::default(),
        });
        self.endpoints
            .lock()
            .unwrap()
            .insert(uri.to_string(), endpoint.clone());
        endpoint
    }
}

impl RoutingContext for MockContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint(&self, uri: &str) -> Result<Arc<dyn Endpoint>, BoxError> {
        self.endpoints
            .lock()
            .unwrap()
            .get(uri)
            .cloned()
            .map(|endpoint| endpoint as Arc<dyn Endpoint>)
            .ok_or_else(|| format!("no endpoint registered for {uri}").into())
    }
}
