/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! # exchange-sender
//!
//! `exchange-sender` sends exchanges through a routing engine's callback-based
//! send pathway and hands back a future per exchange.
//!
//! The engine is reached only through the traits in [`engine`]:
//! [`RoutingContext`] resolves endpoints by URI, an [`Endpoint`] builds exchanges
//! and producers, and a [`Producer`] dispatches an exchange and reports completion
//! through an [`AsyncCallback`]. Routing, transformation, retries and connection
//! handling all stay inside the engine.
//!
//! ```
//! use exchange_sender::{
//!     AsyncCallback, BoxError, Endpoint, ExchangeSender, Producer, RoutingContext,
//! };
//! use std::sync::{Arc, Weak};
//!
//! struct Echo;
//!
//! impl Producer for Echo {
//!     fn process(&self, exchange: exchange_sender::Exchange, callback: AsyncCallback) -> bool {
//!         callback.done(exchange, true);
//!         true
//!     }
//! }
//!
//! struct EchoEndpoint(Weak<EchoContext>);
//!
//! impl Endpoint for EchoEndpoint {
//!     fn uri(&self) -> &str {
//!         "echo:default"
//!     }
//!
//!     fn context(&self) -> Option<Arc<dyn RoutingContext>> {
//!         self.0.upgrade().map(|context| context as Arc<dyn RoutingContext>)
//!     }
//!
//!     fn create_producer(&self) -> Result<Arc<dyn Producer>, BoxError> {
//!         Ok(Arc::new(Echo))
//!     }
//! }
//!
//! struct EchoContext;
//!
//! impl RoutingContext for EchoContext {
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//!
//!     fn endpoint(&self, _uri: &str) -> Result<Arc<dyn Endpoint>, BoxError> {
//!         Err("use the endpoint directly".into())
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let context = Arc::new(EchoContext);
//! let endpoint = Arc::new(EchoEndpoint(Arc::downgrade(&context)));
//!
//! let sender = ExchangeSender::builder()
//!     .with_endpoint(endpoint)
//!     .build()
//!     .unwrap();
//!
//! let exchange = sender.send_body("ping").unwrap().await.unwrap();
//! assert_eq!(exchange.in_message().body::<&str>(), Some(&"ping"));
//! # });
//! ```
//!
//! ## Failures
//!
//! Configuration problems are returned synchronously as [`SenderError`]. A
//! failure recorded on an exchange by the engine rejects that exchange's
//! [`SendFuture`] with [`SendError::Failed`] while check-for-failure is on (the
//! default); with it off the exchange is delivered as-is and still carries its
//! failure.
//!
//! ## Internal architecture map
//!
//! - API facade: [`ExchangeSender`], [`ExchangeSenderBuilder`], [`SenderConfig`]
//! - Control plane: send processor lifecycle and the configured/unconfigured binding
//! - Data plane: callback-to-future bridge and [`SendFuture`]
//!
//! ## Observability model
//!
//! The crate emits `tracing` events tagged with the names in
//! [`observability::events`]. It never installs a subscriber itself.

mod api;
mod control_plane;
mod data_plane;
pub mod engine;
mod error;
mod exchange;

#[doc(hidden)]
pub mod observability;

#[cfg(test)]
mod test_support;

pub use api::builder::ExchangeSenderBuilder;
pub use api::config::SenderConfig;
pub use api::sender::ExchangeSender;
pub use control_plane::{SendProcessor, ServiceStatus};
pub use data_plane::SendFuture;
pub use engine::{AsyncCallback, Endpoint, Producer, RoutingContext};
pub use error::{BoxError, Failure, SendError, SenderError};
pub use exchange::{Body, Exchange, ExchangePattern, Message};
