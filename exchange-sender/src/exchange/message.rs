//! Message carried in or out of an exchange.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Opaque payload. The adapter never looks inside it.
pub type Body = Arc<dyn Any + Send + Sync>;

#[derive(Clone, Default)]
pub struct Message {
    headers: HashMap<String, String>,
    body: Option<Body>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Typed view of the body, `None` when absent or of another type.
    pub fn body<T: Any>(&self) -> Option<&T> {
        self.body.as_ref().and_then(|body| body.downcast_ref::<T>())
    }

    /// The body as stored, for identity comparisons.
    pub fn body_ref(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn set_body<T: Any + Send + Sync>(&mut self, body: T) {
        self.body = Some(Arc::new(body));
    }

    /// Stores an already shared body without re-wrapping it.
    pub fn set_shared_body(&mut self, body: Body) {
        self.body = Some(body);
    }

    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("headers", &self.headers)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}
