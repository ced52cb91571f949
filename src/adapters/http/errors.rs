use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::user::errors::{RepositoryError, UserError};

use super::dtos::{ErrorInfo, ErrorResponse};

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Bad input (400 Bad Request)
  Validation(String),

  /// Business-rule conflict (409 Conflict)
  Conflict(String),

  /// Missing resource (404 Not Found)
  NotFound(String),

  /// Infrastructure failure (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (code, message) = match self {
      ApiError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
      ApiError::Conflict(msg) => ("CONFLICT_ERROR", msg.clone()),
      ApiError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
      ApiError::Internal(msg) => {
        // The cause is logged but never echoed to the caller
        tracing::error!("internal error: {}", msg);
        ("INTERNAL_ERROR", "An unexpected error occurred".to_string())
      }
    };

    let body = ErrorResponse {
      success: false,
      message: "Request failed".to_string(),
      error: ErrorInfo {
        code: code.to_string(),
        message,
      },
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(body)
  }
}

/// Convert UserError to ApiError
impl From<UserError> for ApiError {
  fn from(error: UserError) -> Self {
    match error {
      UserError::Validation(err) => ApiError::Validation(err.to_string()),
      UserError::EmailAlreadyExists => {
        ApiError::Conflict("An account with this email already exists".to_string())
      }
      UserError::UserNotFound => ApiError::NotFound("User not found".to_string()),
      UserError::Repository(err) => match err {
        RepositoryError::NotFound => ApiError::NotFound("User not found".to_string()),
        RepositoryError::DuplicateKey(_) => {
          ApiError::Conflict("An account with this email already exists".to_string())
        }
        _ => ApiError::Internal(err.to_string()),
      },
      UserError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from the validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}
