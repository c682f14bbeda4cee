//! Per-invocation correlation
//!
//! The service boundary opens one `RequestContext` per operation. Its id is
//! stamped on every lifecycle event and on the error returned to the caller,
//! and its start instant supplies `duration_ms`.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Identifier of one registry operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Fresh, time-ordered id (UUID v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an id received from elsewhere
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request id plus the moment the operation started
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    started: Instant,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            started: Instant::now(),
        }
    }

    /// Whole milliseconds since the context was opened
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
