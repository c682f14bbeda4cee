//! Canonical schema constants for structured logging
//!
//! Every lifecycle event emitted by the registry uses these keys, so log
//! consumers and the test capture layer can rely on them.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_SALOON_ID: &str = "saloon_id";
pub const FIELD_CALLER: &str = "caller";

// Collection sizes
pub const FIELD_SALOON_COUNT: &str = "saloon_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
