//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent between the logging macros,
//! the counter mutators and test assertions.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Parent / child identifiers
pub const FIELD_EXECUTION_ID: &str = "execution_id";
pub const FIELD_TASK_ID: &str = "task_id";
pub const FIELD_VARIABLE_ID: &str = "variable_id";
pub const FIELD_SUBSCRIPTION_ID: &str = "subscription_id";
pub const FIELD_CHILD_ID: &str = "child_id";

// Counter mutation
pub const FIELD_COUNTER: &str = "counter";
pub const FIELD_VALUE: &str = "value";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
