use super::guard::ensure_owner;
use super::store::RecordStore;
use crate::env::Environment;
use crate::errors::{Result, SaloonError};
use crate::model::{Saloon, SaloonPayload, SaloonUpdate, MAX_RATE, MIN_RATE};

/// Fetch a saloon by id, mapping a missing key to `SaloonNotFound`
pub(crate) fn fetch<S: RecordStore + ?Sized>(store: &S, id: &str) -> Result<Saloon> {
    store
        .get(id)?
        .ok_or_else(|| SaloonError::SaloonNotFound {
            saloon_id: id.to_string(),
        })
}

/// List every stored saloon
///
/// An empty store is reported as an error, not as an empty list.
///
/// # Errors
/// * `NoSaloonsFound` - If the store holds no saloons
pub fn list_saloons<S: RecordStore + ?Sized>(store: &S) -> Result<Vec<Saloon>> {
    let saloons = store.values()?;
    if saloons.is_empty() {
        return Err(SaloonError::NoSaloonsFound);
    }
    Ok(saloons)
}

/// Read a saloon by id
///
/// # Errors
/// * `InvalidId` - If `id` is empty
/// * `SaloonNotFound` - If no saloon is stored under `id`
pub fn get_saloon<S: RecordStore + ?Sized>(store: &S, id: &str) -> Result<Saloon> {
    if id.is_empty() {
        return Err(SaloonError::InvalidId);
    }
    fetch(store, id)
}

/// Create a new saloon owned by the caller
///
/// The saloon starts with the initial rating, no services and no
/// `updated_at`.
///
/// # Arguments
/// * `store` - Store to insert into
/// * `env` - Supplies the new id, the owner and the creation time
/// * `payload` - Name, location and attachment URL (all required)
///
/// # Errors
/// * `MissingRequiredFields` - If any payload field is empty or whitespace-only
pub fn create_saloon<S: RecordStore + ?Sized>(
    store: &mut S,
    env: &dyn Environment,
    payload: SaloonPayload,
) -> Result<Saloon> {
    if !payload.is_complete() {
        return Err(SaloonError::MissingRequiredFields);
    }

    let saloon = Saloon::new(
        env.new_unique_id(),
        env.caller_identity(),
        payload.saloon_name,
        payload.saloon_location,
        payload.attachment_url,
        env.current_timestamp(),
    );

    store.insert(&saloon.id, saloon.clone())?;
    tracing::debug!(saloon_id = %saloon.id, owner = %saloon.owner, "saloon created");

    Ok(saloon)
}

/// Update a saloon's text fields
///
/// Fields left as `None` keep their stored value. `updated_at` is set even
/// when nothing else changes.
///
/// # Errors
/// * `SaloonNotFound` - If no saloon is stored under `id`
/// * `NotOwner` - If the caller is not the saloon's owner
pub fn update_saloon<S: RecordStore + ?Sized>(
    store: &mut S,
    env: &dyn Environment,
    id: &str,
    update: SaloonUpdate,
) -> Result<Saloon> {
    let mut saloon = fetch(store, id)?;
    ensure_owner(&saloon, &env.caller_identity())?;

    if let Some(name) = update.saloon_name {
        saloon.saloon_name = name;
    }
    if let Some(location) = update.saloon_location {
        saloon.saloon_location = location;
    }
    if let Some(url) = update.attachment_url {
        saloon.attachment_url = url;
    }
    saloon.touch(env.current_timestamp());

    store.insert(id, saloon.clone())?;

    Ok(saloon)
}

/// Delete a saloon and return the removed record
///
/// Ownership is verified before anything is removed, so a rejected delete
/// leaves the store untouched.
///
/// # Errors
/// * `SaloonNotFound` - If no saloon is stored under `id`
/// * `NotOwner` - If the caller is not the saloon's owner
pub fn delete_saloon<S: RecordStore + ?Sized>(
    store: &mut S,
    env: &dyn Environment,
    id: &str,
) -> Result<Saloon> {
    let saloon = fetch(store, id)?;
    ensure_owner(&saloon, &env.caller_identity())?;

    let removed = store.remove(id)?.ok_or_else(|| SaloonError::Internal {
        message: format!("saloon {} vanished between lookup and removal", id),
    })?;
    tracing::debug!(saloon_id = %id, "saloon removed");

    Ok(removed)
}

/// Submit a rating for a saloon
///
/// The new rating is `(current + rate) / 5`. Any caller may rate.
///
/// # Errors
/// * `RateOutOfRange` - If `rate` is outside `[0, 5]` (NaN included)
/// * `SaloonNotFound` - If no saloon is stored under `id`
pub fn rate_saloon<S: RecordStore + ?Sized>(
    store: &mut S,
    env: &dyn Environment,
    id: &str,
    rate: f64,
) -> Result<Saloon> {
    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(SaloonError::RateOutOfRange { rate });
    }

    let mut saloon = fetch(store, id)?;
    let previous = saloon.rating;
    saloon.apply_rating(rate);
    saloon.touch(env.current_timestamp());

    store.insert(id, saloon.clone())?;
    tracing::debug!(saloon_id = %id, previous, rating = saloon.rating, "rating blended");

    Ok(saloon)
}
