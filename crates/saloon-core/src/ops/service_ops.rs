use super::guard::ensure_owner;
use super::saloon_ops::fetch;
use super::store::RecordStore;
use crate::env::Environment;
use crate::errors::{Result, SaloonError};
use crate::model::{Saloon, ServicePayload, ServiceRendered};

/// Append a service to a saloon
///
/// The amount must be finite; any finite value is accepted. Checks then run
/// in order: existence, then ownership. The service id and
/// timestamp are only generated once both checks pass. The new service is
/// placed after all existing ones and the saloon's `updated_at` is set.
///
/// # Arguments
/// * `store` - Store holding the saloon
/// * `env` - Supplies the caller, the service id and the time
/// * `saloon_id` - Saloon to append to
/// * `payload` - Service name, description and amount
///
/// # Returns
/// The updated saloon
///
/// # Errors
/// * `InvalidAmount` - If `service_amount` is NaN or infinite
/// * `SaloonNotFound` - If no saloon is stored under `saloon_id`
/// * `NotOwner` - If the caller is not the saloon's owner
pub fn add_service<S: RecordStore + ?Sized>(
    store: &mut S,
    env: &dyn Environment,
    saloon_id: &str,
    payload: ServicePayload,
) -> Result<Saloon> {
    if !payload.service_amount.is_finite() {
        return Err(SaloonError::InvalidAmount {
            amount: payload.service_amount,
        });
    }

    let mut saloon = fetch(store, saloon_id)?;
    ensure_owner(&saloon, &env.caller_identity())?;

    let now = env.current_timestamp();
    let service = ServiceRendered::new(
        env.new_unique_id(),
        payload.service_name,
        payload.service_description,
        payload.service_amount,
        now,
    );
    tracing::debug!(saloon_id = %saloon_id, service_id = %service.id, "service appended");

    saloon.push_service(service);
    saloon.touch(now);

    store.insert(saloon_id, saloon.clone())?;

    Ok(saloon)
}
