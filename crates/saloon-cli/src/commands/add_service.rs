//! Add-service command
//!
//! Usage: saloon add-service <ID> --name <NAME> --description <TEXT> --amount <AMOUNT>

use clap::Args;
use saloon_core::ServicePayload;

use super::{emit, CliService};

#[derive(Debug, Args)]
pub struct AddServiceArgs {
    /// Saloon id
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
}

pub fn execute(
    args: AddServiceArgs,
    service: &mut CliService,
) -> Result<(), Box<dyn std::error::Error>> {
    emit(service.add_service(
        &args.id,
        ServicePayload::new(args.name, args.description, args.amount),
    ))
}
