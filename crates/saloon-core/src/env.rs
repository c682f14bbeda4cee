//! Platform capabilities injected into every operation
//!
//! Operations never read the clock, the caller or a random source directly;
//! they ask the `Environment` they were given.

use std::cell::{Cell, RefCell};

use chrono::Utc;
use uuid::Uuid;

use crate::model::Principal;

/// Capabilities supplied by the hosting environment
pub trait Environment {
    /// Current time as nanoseconds since the Unix epoch
    fn current_timestamp(&self) -> u64;

    /// Identity of the caller of the current operation
    fn caller_identity(&self) -> Principal;

    /// A fresh identifier, never returned before
    fn new_unique_id(&self) -> String;
}

/// Environment backed by the system clock and UUID v7 ids
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    caller: Principal,
}

impl SystemEnvironment {
    pub fn new(caller: Principal) -> Self {
        Self { caller }
    }

    /// Switch the identity used for subsequent operations
    pub fn set_caller(&mut self, caller: Principal) {
        self.caller = caller;
    }
}

impl Environment for SystemEnvironment {
    fn current_timestamp(&self) -> u64 {
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or_default()
    }

    fn caller_identity(&self) -> Principal {
        self.caller.clone()
    }

    fn new_unique_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Deterministic environment with a manual clock and sequential ids
///
/// Ids are `<prefix>-<n>` starting at 1. The clock only moves when
/// `advance` or `set_time` is called.
#[derive(Debug)]
pub struct FixedEnvironment {
    now: Cell<u64>,
    caller: RefCell<Principal>,
    prefix: String,
    next_id: Cell<u64>,
}

impl FixedEnvironment {
    pub fn new(caller: impl Into<Principal>, now: u64) -> Self {
        Self {
            now: Cell::new(now),
            caller: RefCell::new(caller.into()),
            prefix: "id".to_string(),
            next_id: Cell::new(1),
        }
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn set_caller(&self, caller: impl Into<Principal>) {
        *self.caller.borrow_mut() = caller.into();
    }

    pub fn set_time(&self, now: u64) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: u64) {
        self.now.set(self.now.get() + delta);
    }

    /// Number of ids handed out so far
    pub fn ids_issued(&self) -> u64 {
        self.next_id.get() - 1
    }
}

impl Environment for FixedEnvironment {
    fn current_timestamp(&self) -> u64 {
        self.now.get()
    }

    fn caller_identity(&self) -> Principal {
        self.caller.borrow().clone()
    }

    fn new_unique_id(&self) -> String {
        let n = self.next_id.get();
        self.next_id.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}
