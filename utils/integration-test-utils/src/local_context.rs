use crate::journal::LifecycleJournal;
use crate::local_endpoint::{EndpointOptions, LocalEndpoint};
use crate::routes::Route;
use exchange_sender::{BoxError, Endpoint, RoutingContext};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

pub struct LocalRoutingContext {
    name: String,
    endpoints: Mutex<HashMap<String, Arc<LocalEndpoint>>>,
    journal: Arc<LifecycleJournal>,
}

impl LocalRoutingContext {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            endpoints: Mutex::new(HashMap::new()),
            journal: Arc::default(),
        })
    }

    /// This context as the trait object the sender and its builder accept.
    pub fn handle(self: &Arc<Self>) -> Arc<dyn RoutingContext> {
        self.clone()
    }

    pub fn journal(&self) -> &LifecycleJournal {
        &self.journal
    }

    /// Registers `route` under `uri` with default options: fire-and-forget
    /// exchanges completed inline.
    pub fn register<R: Route + 'static>(self: &Arc<Self>, uri: &str, route: R) -> Arc<LocalEndpoint> {
        self.register_with(uri, route, EndpointOptions::default())
    }

    pub fn register_with<R: Route + 'static>(
        self: &Arc<Self>,
        uri: &str,
        route: R,
        options: EndpointOptions,
    ) -> Arc<LocalEndpoint> {
        let context: Arc<dyn RoutingContext> = self.clone();
        let endpoint = Arc::new(LocalEndpoint::new(
            uri,
            options,
            Arc::new(route),
            Arc::downgrade(&context),
            self.journal.clone(),
        ));

        debug!(context = %self.name, uri, ?options, "registered local endpoint");
        if let Ok(mut endpoints) = self.endpoints.lock() {
            endpoints.insert(uri.to_string(), endpoint.clone());
        }
        endpoint
    }
}

impl RoutingContext for LocalRoutingContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint(&self, uri: &str) -> Result<Arc<dyn Endpoint>, BoxError> {
        if !uri.contains(':') {
            return Err(format!("invalid endpoint uri {uri:?}: missing scheme").into());
        }

        let endpoints = self
            .endpoints
            .lock()
            .map_err(|_| format!("{}: endpoint registry poisoned", self.name))?;

        match endpoints.get(uri) {
            Some(endpoint) => Ok(endpoint.clone() as Arc<dyn Endpoint>),
            None => Err(format!("{}: no endpoint registered for {uri}", self.name).into()),
        }
    }
}
