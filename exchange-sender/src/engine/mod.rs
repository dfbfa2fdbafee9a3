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

//! Contracts consumed from the routing engine.
//!
//! The adapter does not route, transform or retry anything itself. It only needs
//! an engine that can resolve endpoints by URI, build exchanges for them, and hand
//! out producers that dispatch an exchange and report completion through an
//! [`AsyncCallback`].

mod context;
mod endpoint;
mod producer;

pub use context::RoutingContext;
pub use endpoint::Endpoint;
pub use producer::{AsyncCallback, Producer};
