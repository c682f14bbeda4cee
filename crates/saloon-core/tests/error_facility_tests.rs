use saloon_core::errors::{ExError, ExErrorKind, SaloonError};
use saloon_core_types::RequestId;

#[test]
fn test_input_errors_are_invalid_argument() {
    let errors = vec![
        SaloonError::InvalidId,
        SaloonError::MissingRequiredFields,
        SaloonError::RateOutOfRange { rate: 6.0 },
        SaloonError::InvalidAmount {
            amount: f64::INFINITY,
        },
    ];

    for err in errors {
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidArgument);
        assert_eq!(ex.code(), "ERR_INVALID_ARGUMENT");
    }
}

#[test]
fn test_invalid_amount_message_names_the_value() {
    let ex: ExError = SaloonError::InvalidAmount { amount: f64::NAN }.into();

    assert_eq!(
        ex.message(),
        "Service amount must be a finite number, got NaN"
    );
}

#[test]
fn test_empty_collection_distinct_from_not_found() {
    let ex: ExError = SaloonError::NoSaloonsFound.into();

    assert_eq!(ex.kind(), ExErrorKind::EmptyCollection);
    assert_ne!(ex.kind(), ExErrorKind::NotFound);
    assert_eq!(ex.message(), "No saloons found.");
}

#[test]
fn test_not_owner_maps_to_permission_denied() {
    let ex: ExError = SaloonError::NotOwner {
        saloon_id: "s-1".to_string(),
        caller: "mallory".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::PermissionDenied);
    assert_eq!(ex.code(), "ERR_PERMISSION_DENIED");
    assert_eq!(ex.saloon_id(), Some("s-1"));
    assert!(ex.message().contains("mallory"));
}

#[test]
fn test_storage_errors_mapping() {
    let cases = vec![
        (
            SaloonError::Persistence {
                message: "disk".to_string(),
            },
            ExErrorKind::Persistence,
        ),
        (
            SaloonError::Serialization {
                message: "bad json".to_string(),
            },
            ExErrorKind::Serialization,
        ),
        (
            SaloonError::ChecksumMismatch {
                migration_id: "001".to_string(),
                expected: "a".to_string(),
                actual: "b".to_string(),
            },
            ExErrorKind::ChecksumMismatch,
        ),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind);
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), kind);
    }
}

#[test]
fn test_serde_json_error_converts_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: SaloonError = json_err.into();

    assert!(matches!(err, SaloonError::Serialization { .. }));
}

#[test]
fn test_request_id_context_is_carried() {
    let request_id = RequestId::from_string("req-42".to_string());
    let ex: ExError = SaloonError::InvalidId.into();
    let ex = ex.with_request_id(request_id.clone()).with_op("get_saloon");

    assert_eq!(ex.request_id(), Some(&request_id));
    assert_eq!(ex.op(), Some("get_saloon"));
    assert!(ex.to_string().contains("req-42"));
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidArgument,
        ExErrorKind::NotFound,
        ExErrorKind::PermissionDenied,
        ExErrorKind::EmptyCollection,
        ExErrorKind::Persistence,
        ExErrorKind::Serialization,
        ExErrorKind::ChecksumMismatch,
        ExErrorKind::Internal,
    ];

    let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}
