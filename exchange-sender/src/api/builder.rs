//! Fluent configuration for [`ExchangeSender`].

use crate::api::config::SenderConfig;
use crate::api::sender::{resolve_endpoint, ExchangeSender};
use crate::engine::{Endpoint, RoutingContext};
use crate::error::SenderError;
use std::sync::Arc;

/// Holds the routing context strongly until [`ExchangeSenderBuilder::build`];
/// the built sender only keeps a weak reference.
pub struct ExchangeSenderBuilder {
    context: Option<Arc<dyn RoutingContext>>,
    endpoint: Option<Arc<dyn Endpoint>>,
    check_for_failure: bool,
}

impl Default for ExchangeSenderBuilder {
    fn default() -> Self {
        Self {
            context: None,
            endpoint: None,
            check_for_failure: true,
        }
    }
}

impl ExchangeSenderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a [`SenderConfig`], resolving its endpoint URI (if any)
    /// through `context`.
    pub fn from_config(
        context: &Arc<dyn RoutingContext>,
        config: &SenderConfig,
    ) -> Result<Self, SenderError> {
        let builder = Self::new()
            .with_context(context)
            .with_check_for_failure(config.check_for_failure);

        match config.endpoint_uri.as_deref() {
            Some(uri) => builder.with_endpoint_uri(uri),
            None => Ok(builder),
        }
    }

    pub fn with_context(mut self, context: &Arc<dyn RoutingContext>) -> Self {
        self.context = Some(context.clone());
        self
    }

    pub fn with_endpoint(mut self, endpoint: Arc<dyn Endpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Resolves `uri` right away. Requires [`Self::with_context`] to have been
    /// called first.
    pub fn with_endpoint_uri(self, uri: &str) -> Result<Self, SenderError> {
        let endpoint = resolve_endpoint(self.context.clone(), uri)?;
        Ok(self.with_endpoint(endpoint))
    }

    pub fn with_check_for_failure(mut self, check_for_failure: bool) -> Self {
        self.check_for_failure = check_for_failure;
        self
    }

    /// Builds the sender and starts the send processor for the endpoint, if one
    /// was given. The endpoint's own routing context wins over
    /// [`Self::with_context`].
    pub fn build(self) -> Result<ExchangeSender, SenderError> {
        let mut sender = ExchangeSender::new();
        sender.set_context(self.context.as_ref());
        sender.set_check_for_failure(self.check_for_failure);

        if self.endpoint.is_some() {
            sender.set_endpoint(self.endpoint)?;
        }
        Ok(sender)
    }
}
