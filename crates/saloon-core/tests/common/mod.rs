use saloon_core::env::FixedEnvironment;
use saloon_core::ops::saloon_ops;
use saloon_core::{Saloon, SaloonPayload, Store};

pub const OWNER: &str = "owner-principal";
pub const STRANGER: &str = "stranger-principal";

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Environment acting as OWNER at t=1000
#[allow(dead_code)]
pub fn owner_env() -> FixedEnvironment {
    FixedEnvironment::new(OWNER, 1_000)
}

#[allow(dead_code)]
pub fn sample_payload() -> SaloonPayload {
    SaloonPayload::new("Shear Luck", "12 Main St", "https://img.example/shear.png")
}

/// Create a saloon through the real create operation
#[allow(dead_code)]
pub fn create_test_saloon(store: &mut Store, env: &FixedEnvironment) -> Saloon {
    saloon_ops::create_saloon(store, env, sample_payload()).unwrap()
}
