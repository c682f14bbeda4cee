//! Delete command
//!
//! Usage: saloon delete <ID>

use clap::Args;

use super::{emit, CliService};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Saloon id
    pub id: String,
}

pub fn execute(args: DeleteArgs, service: &mut CliService) -> Result<(), Box<dyn std::error::Error>> {
    emit(service.delete_saloon(&args.id))
}
