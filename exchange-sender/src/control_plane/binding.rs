//! Two-state binding between the adapter and its send resource.

use crate::control_plane::send_processor::SendProcessor;
use crate::engine::Endpoint;
use crate::error::SenderError;
use crate::observability::events;
use std::mem;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "binding";

/// Either nothing is bound, or exactly one started processor is bound to the
/// current endpoint.
#[derive(Default)]
pub(crate) enum Binding {
    #[default]
    Unconfigured,
    Configured {
        endpoint: Arc<dyn Endpoint>,
        processor: SendProcessor,
    },
}

impl Binding {
    pub(crate) fn endpoint(&self) -> Option<&Arc<dyn Endpoint>> {
        match self {
            Binding::Unconfigured => None,
            Binding::Configured { endpoint, .. } => Some(endpoint),
        }
    }

    pub(crate) fn processor(&self) -> Option<&SendProcessor> {
        match self {
            Binding::Unconfigured => None,
            Binding::Configured { processor, .. } => Some(processor),
        }
    }

    /// Stops and drops the bound processor. The binding is `Unconfigured`
    /// afterwards whatever the outcome.
    pub(crate) fn release(&mut self) -> Result<(), SenderError> {
        let Binding::Configured {
            endpoint,
            mut processor,
        } = mem::take(self)
        else {
            return Ok(());
        };

        let stopped = processor.stop();
        debug!(
            event = events::BINDING_CLEARED,
            component = COMPONENT,
            endpoint = endpoint.uri(),
            "released send processor"
        );

        stopped.map_err(|err| {
            warn!(
                event = events::BINDING_RECONFIGURE_FAILED,
                component = COMPONENT,
                endpoint = endpoint.uri(),
                err = %err,
                "previous send processor did not stop cleanly"
            );
            SenderError::configuration(endpoint.uri(), err)
        })
    }

    /// Binds a freshly started processor for `endpoint`. Must only be called on
    /// an `Unconfigured` binding; on failure the binding stays `Unconfigured`.
    pub(crate) fn bind(&mut self, endpoint: Arc<dyn Endpoint>) -> Result<(), SenderError> {
        debug_assert!(matches!(self, Binding::Unconfigured));

        let started = SendProcessor::new(endpoint.clone()).and_then(|mut processor| {
            processor.start()?;
            Ok(processor)
        });

        match started {
            Ok(processor) => {
                debug!(
                    event = events::BINDING_CONFIGURED,
                    component = COMPONENT,
                    endpoint = endpoint.uri(),
                    "bound send processor"
                );
                *self = Binding::Configured {
                    endpoint,
                    processor,
                };
                Ok(())
            }
            Err(err) => {
                warn!(
                    event = events::BINDING_RECONFIGURE_FAILED,
                    component = COMPONENT,
                    endpoint = endpoint.uri(),
                    err = %err,
                    "unable to bind send processor"
                );
                Err(SenderError::configuration(endpoint.uri(), err))
            }
        }
    }
}
