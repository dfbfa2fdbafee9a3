//! Event names, one per observable transition.

pub const PROCESSOR_CREATE: &str = "processor_create";
pub const PROCESSOR_START: &str = "processor_start";
pub const PROCESSOR_START_FAILED: &str = "processor_start_failed";
pub const PROCESSOR_STOP: &str = "processor_stop";
pub const PROCESSOR_STOP_FAILED: &str = "processor_stop_failed";

pub const BINDING_CONFIGURED: &str = "binding_configured";
pub const BINDING_CLEARED: &str = "binding_cleared";
pub const BINDING_RECONFIGURE_FAILED: &str = "binding_reconfigure_failed";

pub const SEND_REJECTED_NOT_CONFIGURED: &str = "send_rejected_not_configured";
pub const SEND_DISPATCH: &str = "send_dispatch";
pub const SEND_COMPLETE: &str = "send_complete";
pub const SEND_COMPLETE_FAILED: &str = "send_complete_failed";
pub const SEND_RESULT_UNCLAIMED: &str = "send_result_unclaimed";
pub const SEND_ABANDONED: &str = "send_abandoned";

pub const CONTEXT_RESOLVE_ENDPOINT: &str = "context_resolve_endpoint";
