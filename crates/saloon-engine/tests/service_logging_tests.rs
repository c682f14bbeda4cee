// Lifecycle logging at the service boundary.
// Tests share one global capture, so each filters by its own saloon id.

use saloon_core::env::FixedEnvironment;
use saloon_core::logging_facility::{init_test_capture, CapturedEvent};
use saloon_core::{SaloonPayload, Store};
use saloon_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CALLER, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_REQUEST_ID, FIELD_SALOON_COUNT, FIELD_SALOON_ID,
};
use saloon_engine::SaloonService;

fn events_for_saloon(events: Vec<CapturedEvent>, op: &str, saloon_id: &str) -> Vec<CapturedEvent> {
    events
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op) && e.field(FIELD_SALOON_ID) == Some(saloon_id))
        .collect()
}

#[test]
fn test_success_emits_start_then_end() {
    let capture = init_test_capture();
    let mut svc = SaloonService::new(
        Store::new(),
        FixedEnvironment::new("alice", 1).with_id_prefix("log-ok"),
    );
    let created = svc
        .create_saloon(SaloonPayload::new("A", "B", "C"))
        .unwrap();

    svc.get_saloon(&created.id).unwrap();

    let events = events_for_saloon(capture.events(), "get_saloon", &created.id);
    let kinds: Vec<&str> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END]);
    assert!(events[1].field(FIELD_DURATION_MS).is_some());
    assert_eq!(events[0].field(FIELD_CALLER), Some("alice"));
    assert_eq!(
        events[0].field(FIELD_REQUEST_ID),
        events[1].field(FIELD_REQUEST_ID)
    );
}

#[test]
fn test_failure_emits_start_then_end_error() {
    let capture = init_test_capture();
    let mut svc = SaloonService::new(Store::new(), FixedEnvironment::new("alice", 1));

    let err = svc.delete_saloon("log-missing-saloon").unwrap_err();

    let events = events_for_saloon(capture.events(), "delete_saloon", "log-missing-saloon");
    let kinds: Vec<&str> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END_ERROR]);
    assert_eq!(events[1].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(
        events[1].field(FIELD_REQUEST_ID),
        err.request_id().map(|id| id.as_str())
    );
}

#[test]
fn test_each_call_gets_its_own_request_id() {
    let capture = init_test_capture();
    let svc = SaloonService::new(Store::new(), FixedEnvironment::new("alice", 1));

    let _ = svc.get_saloon("log-twice");
    let _ = svc.get_saloon("log-twice");

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("get_saloon")
            && e.field(FIELD_SALOON_ID) == Some("log-twice")
            && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 2);

    let mut ids: Vec<String> = events_for_saloon(capture.events(), "get_saloon", "log-twice")
        .iter()
        .filter_map(|e| e.field(FIELD_REQUEST_ID).map(str::to_owned))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_list_reports_saloon_count() {
    let capture = init_test_capture();
    let mut svc = SaloonService::new(
        Store::new(),
        FixedEnvironment::new("alice", 1).with_id_prefix("log-count"),
    );
    svc.create_saloon(SaloonPayload::new("A", "B", "C")).unwrap();
    svc.create_saloon(SaloonPayload::new("D", "E", "F")).unwrap();

    svc.list_saloons().unwrap();

    assert!(
        capture.count_events(|e| e.field(FIELD_SALOON_COUNT) == Some("2")) >= 1,
        "list should record how many saloons it returned"
    );
}
