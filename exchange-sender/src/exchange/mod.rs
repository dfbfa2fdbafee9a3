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

//! The message-in-flight handed to the routing engine.
//!
//! An [`Exchange`] is moved into the engine on dispatch and handed back through
//! the completion callback, so the engine can mutate it freely in between.

mod message;
mod pattern;

pub use message::{Body, Message};
pub use pattern::ExchangePattern;

use crate::error::Failure;
use std::any::Any;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Exchange {
    id: String,
    pattern: ExchangePattern,
    in_message: Message,
    out_message: Option<Message>,
    failure: Option<Failure>,
    properties: HashMap<String, String>,
    to_endpoint: Option<String>,
}

impl Exchange {
    pub fn new(pattern: ExchangePattern) -> Self {
        Self {
            id: Uuid::new_v4().hyphenated().to_string(),
            pattern,
            in_message: Message::new(),
            out_message: None,
            failure: None,
            properties: HashMap::new(),
            to_endpoint: None,
        }
    }

    /// Convenience for the common case of an exchange built around a single body.
    pub fn with_body<T: Any + Send + Sync>(pattern: ExchangePattern, body: T) -> Self {
        let mut exchange = Self::new(pattern);
        exchange.in_message_mut().set_body(body);
        exchange
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> ExchangePattern {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: ExchangePattern) {
        self.pattern = pattern;
    }

    pub fn in_message(&self) -> &Message {
        &self.in_message
    }

    pub fn in_message_mut(&mut self) -> &mut Message {
        &mut self.in_message
    }

    pub fn out_message(&self) -> Option<&Message> {
        self.out_message.as_ref()
    }

    pub fn set_out_message(&mut self, message: Message) {
        self.out_message = Some(message);
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn set_failure(&mut self, failure: Failure) {
        self.failure = Some(failure);
    }

    pub fn clear_failure(&mut self) -> Option<Failure> {
        self.failure.take()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// URI of the endpoint this exchange was last dispatched to.
    pub fn to_endpoint(&self) -> Option<&str> {
        self.to_endpoint.as_deref()
    }

    pub(crate) fn set_to_endpoint(&mut self, uri: &str) {
        self.to_endpoint = Some(uri.to_string());
    }
}
