//! Error helpers for saloon-store
//!
//! Store failures surface as `SaloonError` so `SqliteRecordStore` can satisfy
//! the `RecordStore` contract directly.

use saloon_core::errors::SaloonError;
use std::path::Path;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> SaloonError {
    SaloonError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> SaloonError {
    SaloonError::ChecksumMismatch {
        migration_id: migration_id.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> SaloonError {
    SaloonError::Persistence {
        message: err.to_string(),
    }
}

/// Create an error for a stored body that no longer decodes
pub fn corrupt_record(saloon_id: &str, err: serde_json::Error) -> SaloonError {
    SaloonError::Serialization {
        message: format!("Stored saloon {} is unreadable: {}", saloon_id, err),
    }
}

/// Create an error for a number JSON cannot represent
pub fn non_finite_field(saloon_id: &str, field: &str, value: f64) -> SaloonError {
    SaloonError::Serialization {
        message: format!(
            "Saloon {} has non-finite {} ({}) and cannot be stored",
            saloon_id, field, value
        ),
    }
}

/// Create an IO error
pub fn io_error(path: &Path, err: std::io::Error) -> SaloonError {
    SaloonError::Persistence {
        message: format!("{}: {}", path.display(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saloon_core::ExErrorKind;

    #[test]
    fn test_helpers_map_to_storage_kinds() {
        assert_eq!(
            migration_error("001", "boom").kind(),
            ExErrorKind::Persistence
        );
        assert_eq!(
            checksum_mismatch("001", "a", "b").kind(),
            ExErrorKind::ChecksumMismatch
        );
        assert_eq!(
            from_rusqlite(rusqlite::Error::InvalidQuery).kind(),
            ExErrorKind::Persistence
        );
    }
}
