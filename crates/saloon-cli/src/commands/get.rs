//! Get command
//!
//! Usage: saloon get <ID>

use clap::Args;

use super::{emit, CliService};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Saloon id
    pub id: String,
}

pub fn execute(args: GetArgs, service: &CliService) -> Result<(), Box<dyn std::error::Error>> {
    emit(service.get_saloon(&args.id))
}
