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

//! Interaction patterns an exchange can be created with.

use strum::{Display, EnumString};

/// Whether the sender expects a response for an exchange.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, PartialEq)]
pub enum ExchangePattern {
    /// Fire-and-forget.
    #[default]
    InOnly,
    /// Request-response.
    InOut,
}

impl ExchangePattern {
    pub fn is_out_capable(&self) -> bool {
        matches!(self, ExchangePattern::InOut)
    }
}
