use crate::engine::Endpoint;
use crate::error::BoxError;
use std::sync::Arc;

/// Process-wide handle to the routing engine.
pub trait RoutingContext: Send + Sync {
    fn name(&self) -> &str;

    /// Resolves an endpoint by URI. Fails if the URI is invalid or unreachable.
    fn endpoint(&self, uri: &str) -> Result<Arc<dyn Endpoint>, BoxError>;
}
