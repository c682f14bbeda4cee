use saloon_core_types::RequestId;
use thiserror::Error;

/// Result type alias using SaloonError
pub type Result<T> = std::result::Result<T, SaloonError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code for programmatic handling, tests
/// and tagged responses at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Caller input
    InvalidArgument,
    NotFound,
    PermissionDenied,
    EmptyCollection,

    // Storage
    Persistence,
    Serialization,
    ChecksumMismatch,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::PermissionDenied => "ERR_PERMISSION_DENIED",
            ExErrorKind::EmptyCollection => "ERR_EMPTY_COLLECTION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ChecksumMismatch => "ERR_CHECKSUM_MISMATCH",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether retrying with the same input can ever succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExErrorKind::Persistence)
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling and context for
/// debugging. Built from a `SaloonError` at the service boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    saloon_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            saloon_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_saloon_id(mut self, id: impl Into<String>) -> Self {
        self.saloon_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn saloon_id(&self) -> Option<&str> {
        self.saloon_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(saloon_id) = &self.saloon_id {
            write!(f, " (saloon_id: {})", saloon_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors for saloon registry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaloonError {
    // ===== Input Errors =====
    /// Empty saloon id supplied to a lookup
    #[error("Invalid id")]
    InvalidId,

    /// A required create field is missing or blank
    #[error("Missing required fields in payload")]
    MissingRequiredFields,

    /// Submitted rating lies outside [0, 5]
    #[error("Rating must be between 0 and 5, got {rate}")]
    RateOutOfRange { rate: f64 },

    /// Service amount is NaN or infinite
    #[error("Service amount must be a finite number, got {amount}")]
    InvalidAmount { amount: f64 },

    // ===== Lookup Errors =====
    #[error("Saloon with id={saloon_id} does not exist")]
    SaloonNotFound { saloon_id: String },

    /// List-all on an empty store
    #[error("No saloons found.")]
    NoSaloonsFound,

    // ===== Authorization Errors =====
    /// Caller is not the saloon's owner
    #[error("Caller {caller} is not the owner of saloon id={saloon_id}")]
    NotOwner { saloon_id: String, caller: String },

    // ===== Storage Errors =====
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// JSON encoding/decoding of a stored record failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An applied migration no longer matches its embedded SQL
    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },

    // ===== Generic Errors =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SaloonError {
    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            SaloonError::InvalidId
            | SaloonError::MissingRequiredFields
            | SaloonError::RateOutOfRange { .. }
            | SaloonError::InvalidAmount { .. } => ExErrorKind::InvalidArgument,
            SaloonError::SaloonNotFound { .. } => ExErrorKind::NotFound,
            SaloonError::NoSaloonsFound => ExErrorKind::EmptyCollection,
            SaloonError::NotOwner { .. } => ExErrorKind::PermissionDenied,
            SaloonError::Persistence { .. } => ExErrorKind::Persistence,
            SaloonError::Serialization { .. } => ExErrorKind::Serialization,
            SaloonError::ChecksumMismatch { .. } => ExErrorKind::ChecksumMismatch,
            SaloonError::Internal { .. } => ExErrorKind::Internal,
        }
    }
}

/// Conversion from SaloonError to ExError
///
/// The message is the domain error's display text, so callers see the
/// same wording whichever type they handle.
impl From<SaloonError> for ExError {
    fn from(err: SaloonError) -> Self {
        let ex = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            SaloonError::SaloonNotFound { saloon_id } | SaloonError::NotOwner { saloon_id, .. } => {
                ex.with_saloon_id(saloon_id)
            }
            SaloonError::ChecksumMismatch { .. } => ex.with_op("migration_checksum"),
            _ => ex,
        }
    }
}

impl From<serde_json::Error> for SaloonError {
    fn from(err: serde_json::Error) -> Self {
        SaloonError::Serialization {
            message: err.to_string(),
        }
    }
}
