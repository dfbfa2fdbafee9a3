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

//! API facade layer.
//!
//! [`ExchangeSenderBuilder`] collects configuration, [`ExchangeSender`] is the
//! runtime adapter built from it, and [`SenderConfig`] is the serializable form
//! of the same settings.

pub mod builder;
pub mod config;
pub mod sender;
