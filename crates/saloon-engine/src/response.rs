//! Tagged result values for callers outside the process

use saloon_core::ExError;
use serde::Serialize;

/// Error payload of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Stable code such as `ERR_NOT_FOUND`
    pub code: String,
    pub kind: String,
    pub message: String,
}

impl From<&ExError> for ErrorBody {
    fn from(err: &ExError) -> Self {
        Self {
            code: err.code().to_string(),
            kind: format!("{:?}", err.kind()),
            message: err.message().to_string(),
        }
    }
}

/// Outcome of one operation, serialized as `{"ok": ...}` or `{"err": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response<T> {
    Ok(T),
    Err(ErrorBody),
}

impl<T> Response<T> {
    pub fn from_result(result: Result<T, ExError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Err(ErrorBody::from(&err)),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }

    pub fn error(&self) -> Option<&ErrorBody> {
        match self {
            Response::Ok(_) => None,
            Response::Err(body) => Some(body),
        }
    }
}

impl<T: Serialize> Response<T> {
    /// Pretty-printed JSON form
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `T` fails to serialize.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
