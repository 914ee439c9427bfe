use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a call to the backend did not produce data.
///
/// The `Display` text doubles as the `error` field of the serialized
/// `{"error": ..., "status": ...}` shape.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered 401. The stored token has already been removed.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("Request failed")]
    RequestFailed { status: u16 },

    /// The request never produced a usable response: transport failure,
    /// an unencodable header, or a 2xx body that is not valid JSON.
    #[error("Network error")]
    Network { detail: String },
}

impl ApiError {
    pub fn network(detail: impl std::fmt::Display) -> Self {
        Self::Network {
            detail: detail.to_string(),
        }
    }

    /// HTTP status carried by the error; 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::RequestFailed { status } => *status,
            Self::Network { .. } => 0,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiError", 2)?;
        state.serialize_field("error", &self.to_string())?;
        state.serialize_field("status", &self.status())?;
        state.end()
    }
}

/// Parsed body of a 2xx response together with its status.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ApiSuccess<T> {
    pub data: T,
    pub status: u16,
}

pub type ApiResult<T> = Result<ApiSuccess<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_shapes_match_wire_format() {
        assert_eq!(
            serde_json::to_value(ApiError::Unauthorized).unwrap(),
            json!({"error": "Unauthorized", "status": 401})
        );
        assert_eq!(
            serde_json::to_value(ApiError::RequestFailed { status: 503 }).unwrap(),
            json!({"error": "Request failed", "status": 503})
        );
        assert_eq!(
            serde_json::to_value(ApiError::network("connection refused")).unwrap(),
            json!({"error": "Network error", "status": 0})
        );
    }

    #[test]
    fn success_shape() {
        let ok = ApiSuccess {
            data: json!({"id": 1}),
            status: 200,
        };
        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({"data": {"id": 1}, "status": 200})
        );
    }

    #[test]
    fn only_unauthorized_is_unauthorized() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::RequestFailed { status: 403 }.is_unauthorized());
        assert!(!ApiError::network("x").is_unauthorized());
    }
}
