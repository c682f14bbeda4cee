//! Subcommand handlers
//!
//! Each handler runs one registry operation and prints the tagged response.

pub mod add_service;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod rate;
pub mod update;

use saloon_core::{ExError, SystemEnvironment};
use saloon_engine::{Response, SaloonService};
use saloon_store::SqliteRecordStore;
use serde::Serialize;

use crate::settings::Settings;

pub type CliService = SaloonService<SqliteRecordStore, SystemEnvironment>;

/// Open the configured database and bind the configured caller
pub fn open_service(settings: &Settings) -> Result<CliService, Box<dyn std::error::Error>> {
    let store = SqliteRecordStore::open(&settings.database.path)?;
    Ok(SaloonService::new(
        store,
        SystemEnvironment::new(settings.caller()),
    ))
}

/// Print the response as pretty JSON; an error response fails the command
fn emit<T: Serialize>(result: Result<T, ExError>) -> Result<(), Box<dyn std::error::Error>> {
    let failure = result.as_ref().err().cloned();
    let response = Response::from_result(result);
    println!("{}", response.to_json_pretty()?);

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
