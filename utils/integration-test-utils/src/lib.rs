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

//! In-memory routing engine for exercising `exchange-sender` end to end.
//!
//! [`LocalRoutingContext`] resolves URIs to [`LocalEndpoint`]s, each of which
//! hands out producers that run a [`Route`] and complete either inline, on a
//! spawned tokio task, or after a delay. Every producer start and stop is
//! recorded in the context's [`LifecycleJournal`].

mod journal;
mod local_context;
mod local_endpoint;
mod logging;
mod routes;

pub use journal::{LifecycleEvent, LifecycleJournal};
pub use local_context::LocalRoutingContext;
pub use local_endpoint::{Completion, EndpointOptions, LocalEndpoint, ProducerCounters};
pub use logging::init_logging;
pub use routes::{route_fn, EchoRoute, FailRoute, FnRoute, Route};
