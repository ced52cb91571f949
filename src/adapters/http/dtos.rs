use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  /// Desired username
  #[validate(length(
    min = 3,
    max = 30,
    message = "Username must be between 3 and 30 characters"
  ))]
  pub username: String,

  /// User's email address
  #[validate(
    email(message = "Invalid email format"),
    length(min = 3, max = 100, message = "Email must be between 3 and 100 characters")
  )]
  pub email: String,

  /// User's password
  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,
}

/// Response body after successful user registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  /// Unique identifier of the newly created user
  pub id: String,

  /// Registered username
  pub username: String,

  /// Registered email address
  pub email: String,

  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,

  /// Timestamp when the account was last updated
  pub updated_at: DateTime<Utc>,
}

/// Standard success envelope
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
  /// Always true for success responses
  pub success: bool,

  /// Human-readable message
  pub message: String,

  /// Operation result
  pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
  pub fn new(message: impl Into<String>, data: T) -> Self {
    Self {
      success: true,
      message: message.into(),
      data,
    }
  }
}

/// Standard error envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Always false for error responses
  pub success: bool,

  /// Human-readable message
  pub message: String,

  /// Error details
  pub error: ErrorInfo,
}

/// Machine-readable error details
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
  /// Stable error code
  pub code: String,

  /// User-facing description of the failure
  pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  pub status: String,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub app: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use validator::Validate;

  #[test]
  fn test_register_request_validation() {
    let valid = RegisterRequest {
      username: "jokosaputro".to_string(),
      email: "joko@test.com".to_string(),
      password: "password123".to_string(),
    };
    assert!(valid.validate().is_ok());

    let empty_username = RegisterRequest {
      username: String::new(),
      email: "joko@test.com".to_string(),
      password: "password123".to_string(),
    };
    assert!(empty_username.validate().is_err());
  }

  #[test]
  fn test_success_envelope_shape() {
    let envelope = SuccessResponse::new("User registered successfully", serde_json::json!({}));
    let body = serde_json::to_value(&envelope).unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
  }
}
