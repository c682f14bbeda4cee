//! Update command
//!
//! Usage: saloon update <ID> [--name <NAME>] [--location <LOCATION>] [--attachment-url <URL>]
//!
//! Omitted flags keep the stored value.

use clap::Args;
use saloon_core::SaloonUpdate;

use super::{emit, CliService};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Saloon id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub attachment_url: Option<String>,
}

pub fn execute(args: UpdateArgs, service: &mut CliService) -> Result<(), Box<dyn std::error::Error>> {
    let update = SaloonUpdate {
        saloon_name: args.name,
        saloon_location: args.location,
        attachment_url: args.attachment_url,
    };
    emit(service.update_saloon(&args.id, update))
}
