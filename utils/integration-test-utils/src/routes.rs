//! Routes run by local producers.

use async_trait::async_trait;
use exchange_sender::{Exchange, Failure};

#[async_trait]
pub trait Route: Send + Sync {
    async fn handle(&self, exchange: &mut Exchange) -> Result<(), Failure>;
}

/// Leaves the exchange untouched, except that request-response exchanges get the
/// in message copied to the out message.
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoRoute;

#[async_trait]
impl Route for EchoRoute {
    async fn handle(&self, exchange: &mut Exchange) -> Result<(), Failure> {
        if exchange.pattern().is_out_capable() {
            let reply = exchange.in_message().clone();
            exchange.set_out_message(reply);
        }
        Ok(())
    }
}

/// Fails every exchange with the same failure.
#[derive(Clone, Debug)]
pub struct FailRoute {
    failure: Failure,
}

impl FailRoute {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }
}

#[async_trait]
impl Route for FailRoute {
    async fn handle(&self, _exchange: &mut Exchange) -> Result<(), Failure> {
        Err(self.failure.clone())
    }
}

pub struct FnRoute<F> {
    handler: F,
}

pub fn route_fn<F>(handler: F) -> FnRoute<F>
where
    F: Fn(&mut Exchange) -> Result<(), Failure> + Send + Sync,
{
    FnRoute { handler }
}

#[async_trait]
impl<F> Route for FnRoute<F>
where
    F: Fn(&mut Exchange) -> Result<(), Failure> + Send + Sync,
{
    async fn handle(&self, exchange: &mut Exchange) -> Result<(), Failure> {
        (self.handler)(exchange)
    }
}
