//! The runtime adapter.

use crate::api::builder::ExchangeSenderBuilder;
use crate::control_plane::binding::Binding;
use crate::control_plane::SendProcessor;
use crate::data_plane::dispatch::dispatch;
use crate::data_plane::SendFuture;
use crate::engine::{Endpoint, RoutingContext};
use crate::error::SenderError;
use crate::exchange::{Exchange, ExchangePattern};
use crate::observability::{events, fields};
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

const COMPONENT: &str = "exchange_sender";

/// Sends exchanges to one endpoint and hands back a [`SendFuture`] per send.
///
/// Sending takes `&self` and may happen from many tasks at once. Changing the
/// destination takes `&mut self`, so it can never overlap a send or another
/// reconfiguration.
pub struct ExchangeSender {
    context: Option<Weak<dyn RoutingContext>>,
    binding: Binding,
    check_for_failure: bool,
}

impl Default for ExchangeSender {
    fn default() -> Self {
        Self {
            context: None,
            binding: Binding::Unconfigured,
            check_for_failure: true,
        }
    }
}

impl ExchangeSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ExchangeSenderBuilder {
        ExchangeSenderBuilder::new()
    }

    /// The routing context, if one is set and still alive.
    pub fn context(&self) -> Option<Arc<dyn RoutingContext>> {
        self.context.as_ref().and_then(Weak::upgrade)
    }

    /// Sets the context directly. Only a weak reference is kept, so the caller
    /// owns the context's lifetime. Keeping it consistent with the endpoint is
    /// up to the caller.
    pub fn set_context(&mut self, context: Option<&Arc<dyn RoutingContext>>) {
        self.context = context.map(Arc::downgrade);
    }

    pub fn endpoint(&self) -> Option<&Arc<dyn Endpoint>> {
        self.binding.endpoint()
    }

    pub fn processor(&self) -> Option<&SendProcessor> {
        self.binding.processor()
    }

    pub fn is_configured(&self) -> bool {
        self.binding.processor().is_some()
    }

    pub fn check_for_failure(&self) -> bool {
        self.check_for_failure
    }

    pub fn set_check_for_failure(&mut self, check_for_failure: bool) {
        self.check_for_failure = check_for_failure;
    }

    /// Replaces the destination.
    ///
    /// The current processor is stopped first. With `Some(endpoint)` the routing
    /// context is taken from the endpoint and a new processor is started for it;
    /// with `None` the context is cleared as well. If any step fails the sender
    /// is left unconfigured and the failure is returned as
    /// [`SenderError::Configuration`].
    pub fn set_endpoint(&mut self, endpoint: Option<Arc<dyn Endpoint>>) -> Result<(), SenderError> {
        let released = self.binding.release();

        let Some(endpoint) = endpoint else {
            self.context = None;
            return released;
        };
        released?;

        let Some(context) = endpoint.context() else {
            self.context = None;
            warn!(
                event = events::BINDING_RECONFIGURE_FAILED,
                component = COMPONENT,
                endpoint = endpoint.uri(),
                "endpoint is not attached to a live routing context"
            );
            return Err(SenderError::configuration(
                endpoint.uri(),
                "endpoint is not attached to a live routing context",
            ));
        };
        self.context = Some(Arc::downgrade(&context));

        self.binding.bind(endpoint)
    }

    /// Resolves `uri` through the current routing context and makes it the
    /// destination.
    pub fn set_endpoint_uri(&mut self, uri: &str) -> Result<(), SenderError> {
        let endpoint = resolve_endpoint(self.context(), uri)?;
        self.set_endpoint(Some(endpoint))
    }

    /// Dispatches `exchange` to the current destination.
    ///
    /// Fails synchronously with [`SenderError::NotConfigured`] when no destination
    /// is set. Every other outcome is reported through the returned future.
    pub fn send(&self, exchange: Exchange) -> Result<SendFuture, SenderError> {
        let processor = self.ensure_processor()?;
        Ok(dispatch(processor, exchange, self.check_for_failure))
    }

    /// Sends `body` in a new exchange using the endpoint's default pattern.
    pub fn send_body<T: Any + Send + Sync>(&self, body: T) -> Result<SendFuture, SenderError> {
        let processor = self.ensure_processor()?;
        let mut exchange = processor.endpoint().create_exchange();
        exchange.in_message_mut().set_body(body);
        self.send(exchange)
    }

    pub fn send_body_with_pattern<T: Any + Send + Sync>(
        &self,
        body: T,
        pattern: ExchangePattern,
    ) -> Result<SendFuture, SenderError> {
        let processor = self.ensure_processor()?;
        let mut exchange = processor.endpoint().create_exchange_with_pattern(pattern);
        exchange.in_message_mut().set_body(body);
        self.send(exchange)
    }

    fn ensure_processor(&self) -> Result<&SendProcessor, SenderError> {
        self.binding.processor().ok_or_else(|| {
            debug!(
                event = events::SEND_REJECTED_NOT_CONFIGURED,
                component = COMPONENT,
                "send attempted without a destination"
            );
            SenderError::NotConfigured
        })
    }
}

impl Debug for ExchangeSender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeSender")
            .field(
                "context",
                &self.context().map(|context| context.name().to_string()),
            )
            .field("endpoint", &fields::format_endpoint_uri(self.endpoint()))
            .field("check_for_failure", &self.check_for_failure)
            .finish()
    }
}

pub(crate) fn resolve_endpoint(
    context: Option<Arc<dyn RoutingContext>>,
    uri: &str,
) -> Result<Arc<dyn Endpoint>, SenderError> {
    let context = context.ok_or_else(|| {
        SenderError::IllegalState(format!(
            "cannot resolve endpoint {uri} without a routing context, set a context first"
        ))
    })?;

    debug!(
        event = events::CONTEXT_RESOLVE_ENDPOINT,
        component = COMPONENT,
        context = context.name(),
        uri,
        "resolving endpoint"
    );

    context
        .endpoint(uri)
        .map_err(|err| SenderError::configuration(uri, err))
}
