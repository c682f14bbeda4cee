mod common;

use common::{create_test_saloon, new_store, owner_env, STRANGER};
use saloon_core::ops::service_ops;
use saloon_core::{SaloonError, ServicePayload};

#[test]
fn test_sequential_appends_keep_call_order() {
    let mut store = new_store();
    let env = owner_env();
    let saloon = create_test_saloon(&mut store, &env);

    service_ops::add_service(
        &mut store,
        &env,
        &saloon.id,
        ServicePayload::new("Haircut", "Wash and cut", 25.0),
    )
    .unwrap();
    env.advance(10);
    let updated = service_ops::add_service(
        &mut store,
        &env,
        &saloon.id,
        ServicePayload::new("Shave", "Hot towel", 15.5),
    )
    .unwrap();

    let names: Vec<&str> = updated
        .services_rendered
        .iter()
        .map(|s| s.service_name.as_str())
        .collect();
    assert_eq!(names, vec!["Haircut", "Shave"]);
    assert_ne!(
        updated.services_rendered[0].id,
        updated.services_rendered[1].id
    );
    assert_eq!(updated.services_rendered[0].created_at, 1_000);
    assert_eq!(updated.services_rendered[1].created_at, 1_010);
    assert_eq!(updated.services_rendered[1].service_amount, 15.5);
}

#[test]
fn test_append_sets_parent_updated_at() {
    let mut store = new_store();
    let env = owner_env();
    let saloon = create_test_saloon(&mut store, &env);

    env.advance(3);
    let updated = service_ops::add_service(
        &mut store,
        &env,
        &saloon.id,
        ServicePayload::new("Trim", "", 0.0),
    )
    .unwrap();

    assert_eq!(updated.updated_at, Some(1_003));
    assert_eq!(store.peek(&saloon.id), Some(&updated));
}

#[test]
fn test_append_by_non_owner_is_denied_and_list_unchanged() {
    let mut store = new_store();
    let env = owner_env();
    let saloon = create_test_saloon(&mut store, &env);
    service_ops::add_service(
        &mut store,
        &env,
        &saloon.id,
        ServicePayload::new("Haircut", "Wash and cut", 25.0),
    )
    .unwrap();

    env.set_caller(STRANGER);
    let result = service_ops::add_service(
        &mut store,
        &env,
        &saloon.id,
        ServicePayload::new("Free cut", "Sneaky", -1.0),
    );

    assert!(matches!(result, Err(SaloonError::NotOwner { .. })));
    assert_eq!(store.peek(&saloon.id).unwrap().services_rendered.len(), 1);
}

#[test]
fn test_append_accepts_any_amount() {
    let mut store = new_store();
    let env = owner_env();
    let saloon = create_test_saloon(&mut store, &env);

    let updated = service_ops::add_service(
        &mut store,
        &env,
        &saloon.id,
        ServicePayload::new("Refund", "Goodwill credit", -40.0),
    )
    .unwrap();

    assert_eq!(updated.services_rendered[0].service_amount, -40.0);
}

#[test]
fn test_append_rejects_non_finite_amounts() {
    let mut store = new_store();
    let env = owner_env();
    let saloon = create_test_saloon(&mut store, &env);
    let ids_before = env.ids_issued();

    for amount in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let result = service_ops::add_service(
            &mut store,
            &env,
            &saloon.id,
            ServicePayload::new("Haircut", "Wash and cut", amount),
        );

        assert!(
            matches!(result, Err(SaloonError::InvalidAmount { .. })),
            "amount {} should be rejected",
            amount
        );
    }

    assert_eq!(env.ids_issued(), ids_before);
    assert_eq!(store.peek(&saloon.id), Some(&saloon));
}

#[test]
fn test_non_finite_amount_checked_before_existence() {
    let mut store = new_store();
    let env = owner_env();

    let result = service_ops::add_service(
        &mut store,
        &env,
        "missing",
        ServicePayload::new("Haircut", "Wash and cut", f64::NAN),
    );

    assert!(matches!(result, Err(SaloonError::InvalidAmount { .. })));
}
