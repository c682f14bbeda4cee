// Integration tests for SaloonService.
// Covers every operation through the service boundary, error conversion,
// tagged responses and the SQLite-backed configuration.

use saloon_core::env::FixedEnvironment;
use saloon_core::{
    Command, CommandResult, ExErrorKind, SaloonPayload, SaloonUpdate, ServicePayload, Store,
};
use saloon_engine::{Response, SaloonService};
use saloon_store::SqliteRecordStore;
use tempfile::TempDir;

const OWNER: &str = "owner-principal";
const STRANGER: &str = "stranger-principal";

fn service() -> SaloonService<Store, FixedEnvironment> {
    SaloonService::new(Store::new(), FixedEnvironment::new(OWNER, 1_000))
}

fn payload() -> SaloonPayload {
    SaloonPayload::new("Shear Luck", "12 Main St", "https://img.example/shear.png")
}

// ---------------------------------------------------------------------------
// happy paths
// ---------------------------------------------------------------------------

#[test]
fn test_full_lifecycle() {
    let mut svc = service();

    let created = svc.create_saloon(payload()).unwrap();
    let with_service = svc
        .add_service(&created.id, ServicePayload::new("Haircut", "Cut", 25.0))
        .unwrap();
    assert_eq!(with_service.services_rendered.len(), 1);

    let rated = svc.rate_saloon(&created.id, 5.0).unwrap();
    assert!((rated.rating - 1.2).abs() < 1e-12);

    let updated = svc
        .update_saloon(
            &created.id,
            SaloonUpdate {
                saloon_location: Some("14 Main St".to_string()),
                ..SaloonUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(updated.saloon_location, "14 Main St");
    assert_eq!(updated.services_rendered.len(), 1);

    assert_eq!(svc.list_saloons().unwrap(), vec![updated.clone()]);
    assert_eq!(svc.get_saloon(&created.id).unwrap(), updated);

    let removed = svc.delete_saloon(&created.id).unwrap();
    assert_eq!(removed, updated);
    assert!(svc.store().is_empty());
}

#[test]
fn test_execute_dispatches_commands() {
    let mut svc = service();

    let created = svc
        .execute(Command::CreateSaloon { payload: payload() })
        .unwrap()
        .into_saloon()
        .unwrap();

    let listed = svc.execute(Command::ListSaloons).unwrap();
    assert_eq!(listed, CommandResult::Saloons(vec![created]));
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn test_errors_carry_kind_op_and_request_id() {
    let svc = service();

    let err = svc.get_saloon("ghost").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.code(), "ERR_NOT_FOUND");
    assert_eq!(err.op(), Some("get_saloon"));
    assert_eq!(err.saloon_id(), Some("ghost"));
    assert!(err.request_id().is_some());
}

#[test]
fn test_empty_registry_is_empty_collection() {
    let svc = service();

    let err = svc.list_saloons().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::EmptyCollection);
    assert_eq!(err.message(), "No saloons found.");
}

#[test]
fn test_non_owner_writes_are_denied() {
    let mut svc = service();
    let created = svc.create_saloon(payload()).unwrap();

    svc.env().set_caller(STRANGER);

    for err in [
        svc.delete_saloon(&created.id).unwrap_err(),
        svc.add_service(&created.id, ServicePayload::new("x", "y", 1.0))
            .unwrap_err(),
        svc.update_saloon(&created.id, SaloonUpdate::default())
            .unwrap_err(),
    ] {
        assert_eq!(err.kind(), ExErrorKind::PermissionDenied);
    }

    // Rating stays open to everyone
    assert!(svc.rate_saloon(&created.id, 3.0).is_ok());
    assert_eq!(svc.store().len(), 1);
}

#[test]
fn test_response_renders_tagged_json() {
    let mut svc = service();

    let err = Response::from_result(svc.list_saloons());
    assert_eq!(err.error().map(|e| e.code.as_str()), Some("ERR_EMPTY_COLLECTION"));

    let ok = Response::from_result(svc.create_saloon(payload()));
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["ok"]["saloonName"], "Shear Luck");
    assert_eq!(json["ok"]["attachmentURL"], "https://img.example/shear.png");
    assert_eq!(json["ok"]["rating"], 1.0);
}

// ---------------------------------------------------------------------------
// sqlite backend
// ---------------------------------------------------------------------------

#[test]
fn test_service_over_sqlite_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saloons.db");

    let created = {
        let mut svc = SaloonService::new(
            SqliteRecordStore::open(&path).unwrap(),
            FixedEnvironment::new(OWNER, 1_000),
        );
        svc.create_saloon(payload()).unwrap()
    };

    let svc = SaloonService::new(
        SqliteRecordStore::open(&path).unwrap(),
        FixedEnvironment::new(OWNER, 2_000),
    );
    assert_eq!(svc.get_saloon(&created.id).unwrap(), created);
}
