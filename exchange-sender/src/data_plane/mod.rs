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

//! Data-plane layer.
//!
//! Bridges the engine's completion callback into a [`SendFuture`]. The oneshot
//! channel behind each future is created before the exchange is dispatched, so a
//! callback that fires inline (before `process` returns) simply parks its result
//! until the future is polled.

pub(crate) mod dispatch;
pub(crate) mod send_future;

pub use send_future::SendFuture;
