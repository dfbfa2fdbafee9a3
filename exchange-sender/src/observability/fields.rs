//! Formatting helpers for structured event fields.

use crate::engine::Endpoint;
use crate::exchange::Exchange;
use std::sync::Arc;

pub(crate) fn format_endpoint_uri(endpoint: Option<&Arc<dyn Endpoint>>) -> String {
    endpoint
        .map(|endpoint| endpoint.uri().to_string())
        .unwrap_or_else(|| "none".to_string())
}

pub(crate) fn format_exchange_id(exchange: &Exchange) -> String {
    exchange.id().to_string()
}

pub(crate) fn format_failure(exchange: &Exchange) -> String {
    exchange
        .failure()
        .map(|failure| failure.to_string())
        .unwrap_or_else(|| "none".to_string())
}
