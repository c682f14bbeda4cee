//! Functional-boundary apply function
//!
//! `apply()` is the canonical entry point for running one command against a
//! store.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: every operation validates and authorizes before its
//!   single store write, so a failed command leaves the store unchanged
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use saloon_core::{apply, env::FixedEnvironment, Command, CommandResult, SaloonPayload, Store};
//!
//! let mut store = Store::new();
//! let env = FixedEnvironment::new("alice", 1);
//! let cmd = Command::CreateSaloon {
//!     payload: SaloonPayload::new("Shear Luck", "Main St", "https://img.example/1.png"),
//! };
//!
//! let result = apply(&mut store, &env, cmd).unwrap();
//! assert!(matches!(result, CommandResult::Saloon(_)));
//! assert_eq!(store.len(), 1);
//! ```

use crate::commands::Command;
use crate::env::Environment;
use crate::errors::Result;
use crate::model::Saloon;
use crate::ops::{saloon_ops, service_ops, RecordStore};
use serde::Serialize;

/// Successful outcome of a command
///
/// Serializes as the bare saloon or saloon list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    /// A single saloon: the created, read, updated or removed record
    Saloon(Saloon),
    /// Every stored saloon
    Saloons(Vec<Saloon>),
}

impl CommandResult {
    /// The single saloon, if this result carries one
    pub fn into_saloon(self) -> Option<Saloon> {
        match self {
            CommandResult::Saloon(saloon) => Some(saloon),
            CommandResult::Saloons(_) => None,
        }
    }

    /// The saloon list, if this result carries one
    pub fn into_saloons(self) -> Option<Vec<Saloon>> {
        match self {
            CommandResult::Saloons(saloons) => Some(saloons),
            CommandResult::Saloon(_) => None,
        }
    }
}

/// Apply a command to a store
///
/// # Arguments
///
/// * `store` - Store to read from and write to
/// * `env` - Clock, caller identity and id source for this command
/// * `cmd` - Command to execute
///
/// # Errors
///
/// Returns the operation's `SaloonError`; the store is left as it was.
pub fn apply<S: RecordStore + ?Sized>(
    store: &mut S,
    env: &dyn Environment,
    cmd: Command,
) -> Result<CommandResult> {
    match cmd {
        Command::ListSaloons => saloon_ops::list_saloons(store).map(CommandResult::Saloons),

        Command::GetSaloon { saloon_id } => {
            saloon_ops::get_saloon(store, &saloon_id).map(CommandResult::Saloon)
        }

        Command::CreateSaloon { payload } => {
            saloon_ops::create_saloon(store, env, payload).map(CommandResult::Saloon)
        }

        Command::AddService { saloon_id, payload } => {
            service_ops::add_service(store, env, &saloon_id, payload).map(CommandResult::Saloon)
        }

        Command::DeleteSaloon { saloon_id } => {
            saloon_ops::delete_saloon(store, env, &saloon_id).map(CommandResult::Saloon)
        }

        Command::RateSaloon { saloon_id, rate } => {
            saloon_ops::rate_saloon(store, env, &saloon_id, rate).map(CommandResult::Saloon)
        }

        Command::UpdateSaloon { saloon_id, update } => {
            saloon_ops::update_saloon(store, env, &saloon_id, update).map(CommandResult::Saloon)
        }
    }
}
