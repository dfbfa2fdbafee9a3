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

//! Error taxonomy.
//!
//! Configuration-time problems are returned synchronously as [`SenderError`].
//! Per-exchange processing problems only ever surface through the
//! [`crate::SendFuture`] of that exchange, as [`SendError`].

use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

/// Error type reported by routing-engine collaborators.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failure indicator carried by an [`crate::Exchange`] after processing.
pub type Failure = Arc<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SenderError {
    #[error("destination must be set before sending")]
    NotConfigured,

    #[error("unable to configure destination {endpoint}: {source}")]
    Configuration {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("invalid sender configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl SenderError {
    pub(crate) fn configuration(endpoint: &str, source: impl Into<BoxError>) -> Self {
        SenderError::Configuration {
            endpoint: endpoint.to_string(),
            source: source.into(),
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum SendError {
    #[error("exchange processing failed: {0}")]
    Failed(Failure),

    #[error("completion callback dropped before the exchange was done")]
    Abandoned,
}

impl SendError {
    /// The failure indicator taken from the exchange, if this is a processing failure.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            SendError::Failed(failure) => Some(failure),
            SendError::Abandoned => None,
        }
    }

    /// Downcasts the processing failure to a concrete error type.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.failure().and_then(|failure| failure.downcast_ref::<E>())
    }
}

#[cfg(test)]
mod tests {
    use super::{Failure, SendError, SenderError};
    use std::fmt;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "timed out")
        }
    }

    impl std::error::Error for Timeout {}

    #[test]
    fn not_configured_message_names_destination() {
        assert_eq!(
            SenderError::NotConfigured.to_string(),
            "destination must be set before sending"
        );
    }

    #[test]
    fn configuration_error_keeps_source() {
        let err = SenderError::configuration("direct:orders", "producer exhausted");
        assert!(err.to_string().contains("direct:orders"));
        let source = std::error::Error::source(&err).expect("source is kept");
        assert_eq!(source.to_string(), "producer exhausted");
    }

    #[test]
    fn failed_send_error_downcasts_to_recorded_failure() {
        let failure: Failure = Arc::new(Timeout);
        let err = SendError::Failed(failure);
        assert!(err.downcast_ref::<Timeout>().is_some());
        assert!(SendError::Abandoned.failure().is_none());
    }
}
