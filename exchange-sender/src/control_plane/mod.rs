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

//! Control-plane layer.
//!
//! Owns the lifecycle of the send resource: creating a [`SendProcessor`] for an
//! endpoint, starting it, and stopping it before any replacement is bound. The
//! [`binding::Binding`] state machine is the only place processors are created
//! or released.

pub(crate) mod binding;
pub(crate) mod send_processor;

pub use send_processor::{SendProcessor, ServiceStatus};
