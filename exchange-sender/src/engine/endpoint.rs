use crate::engine::{Producer, RoutingContext};
use crate::error::BoxError;
use crate::exchange::{Exchange, ExchangePattern};
use std::sync::Arc;

/// Send destination resolved within a [`RoutingContext`].
pub trait Endpoint: Send + Sync {
    fn uri(&self) -> &str;

    /// The context this endpoint belongs to, `None` once that context is gone.
    fn context(&self) -> Option<Arc<dyn RoutingContext>>;

    fn exchange_pattern(&self) -> ExchangePattern {
        ExchangePattern::InOnly
    }

    fn create_exchange(&self) -> Exchange {
        self.create_exchange_with_pattern(self.exchange_pattern())
    }

    fn create_exchange_with_pattern(&self, pattern: ExchangePattern) -> Exchange {
        Exchange::new(pattern)
    }

    /// Creates a producer bound to this endpoint. The producer is not started.
    fn create_producer(&self) -> Result<Arc<dyn Producer>, BoxError>;
}
