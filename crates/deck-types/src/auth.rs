use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Returned by both `/login` and `/register`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
}

/// Generic `{"message": ...}` acknowledgement used by delete endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
