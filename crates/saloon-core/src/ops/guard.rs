use crate::errors::{Result, SaloonError};
use crate::model::{Principal, Saloon};

/// Authorization guard shared by every owner-only mutation
///
/// Must run before the store is touched.
///
/// # Errors
/// * `NotOwner` - If `caller` is not the saloon's owner
pub fn ensure_owner(saloon: &Saloon, caller: &Principal) -> Result<()> {
    if saloon.is_owned_by(caller) {
        return Ok(());
    }

    tracing::debug!(
        saloon_id = %saloon.id,
        caller = %caller,
        owner = %saloon.owner,
        "owner check rejected"
    );

    Err(SaloonError::NotOwner {
        saloon_id: saloon.id.clone(),
        caller: caller.to_string(),
    })
}
