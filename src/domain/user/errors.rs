use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Main error type for user operations
#[derive(Debug, Error)]
pub enum UserError {
  #[error("email already registered")]
  EmailAlreadyExists,

  #[error("user not found")]
  UserNotFound,

  #[error("validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("hash error: {0}")]
  Hash(#[from] HashError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("query execution failed: {0}")]
  QueryFailed(String),

  #[error("record not found")]
  NotFound,

  #[error("duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("database error: {0}")]
  DatabaseError(String),

  #[error("stored record failed validation: {0}")]
  InvalidRecord(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("failed to hash password: {0}")]
  HashingFailed(String),

  #[error("failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("invalid hash format")]
  InvalidFormat,
}

// Automatic conversions from external error types

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for UserError {
  fn from(error: sqlx::Error) -> Self {
    UserError::Repository(RepositoryError::from(error))
  }
}

impl From<argon2::password_hash::Error> for HashError {
  fn from(error: argon2::password_hash::Error) -> Self {
    use argon2::password_hash::Error;
    match error {
      Error::Password => HashError::VerificationFailed("password mismatch".to_string()),
      Error::PhcStringField | Error::PhcStringTrailingData => HashError::InvalidFormat,
      _ => HashError::HashingFailed(error.to_string()),
    }
  }
}
