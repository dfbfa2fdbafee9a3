use crate::error::BoxError;
use crate::exchange::Exchange;
use std::fmt::{Debug, Formatter};

type DoneFn = Box<dyn FnOnce(Exchange, bool) + Send + 'static>;

/// Completion notification for one dispatched exchange.
///
/// `done` consumes the callback, so a producer can complete an exchange at most
/// once. A producer that drops the callback without calling `done` abandons the
/// exchange.
pub struct AsyncCallback {
    done: DoneFn,
}

impl AsyncCallback {
    pub fn new<F>(done: F) -> Self
    where
        F: FnOnce(Exchange, bool) + Send + 'static,
    {
        Self {
            done: Box::new(done),
        }
    }

    /// Hands the processed exchange back. `done_sync` is true when completion
    /// happens on the dispatching thread before `process` returns.
    pub fn done(self, exchange: Exchange, done_sync: bool) {
        (self.done)(exchange, done_sync)
    }
}

impl Debug for AsyncCallback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncCallback").finish_non_exhaustive()
    }
}

/// Send-capable processor created by an [`crate::Endpoint`].
pub trait Producer: Send + Sync {
    fn start(&self) -> Result<(), BoxError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Dispatches `exchange` and eventually calls `callback`.
    ///
    /// Returns `true` when the callback already ran synchronously.
    fn process(&self, exchange: Exchange, callback: AsyncCallback) -> bool;
}
