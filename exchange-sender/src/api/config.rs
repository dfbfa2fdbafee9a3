//! Serializable sender settings.

use crate::error::SenderError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SenderConfig {
    /// Destination resolved through the routing context at build time.
    pub endpoint_uri: Option<String>,
    pub check_for_failure: bool,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            endpoint_uri: None,
            check_for_failure: true,
        }
    }
}

impl SenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SenderError> {
        Ok(serde_json::from_str(json)?)
    }
}
