use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
  #[error("{field} cannot be empty")]
  EmptyInput { field: &'static str },

  #[error("{field} must be between {min} and {max} characters")]
  InvalidLength {
    field: &'static str,
    min: usize,
    max: usize,
  },

  #[error("{field} contains invalid characters")]
  InvalidCharacters { field: &'static str },

  #[error("{field} is not a valid address")]
  InvalidFormat { field: &'static str },
}

impl ValueObjectError {
  /// Name of the input field the error refers to
  pub fn field(&self) -> &'static str {
    match self {
      Self::EmptyInput { field }
      | Self::InvalidLength { field, .. }
      | Self::InvalidCharacters { field }
      | Self::InvalidFormat { field } => field,
    }
  }
}

lazy_static! {
  // Must start with a letter, followed by letters, digits or underscores.
  static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_]+$").unwrap();
  static ref EMAIL_RE: Regex =
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

// ============================================================================
// Username Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
  pub const MIN_LENGTH: usize = 3;
  pub const MAX_LENGTH: usize = 30;

  const FIELD: &'static str = "username";

  /// Creates a new Username after trimming and validation
  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();

    if trimmed.is_empty() {
      return Err(ValueObjectError::EmptyInput { field: Self::FIELD });
    }

    if trimmed.len() < Self::MIN_LENGTH || trimmed.len() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidLength {
        field: Self::FIELD,
        min: Self::MIN_LENGTH,
        max: Self::MAX_LENGTH,
      });
    }

    if !USERNAME_RE.is_match(trimmed) {
      return Err(ValueObjectError::InvalidCharacters { field: Self::FIELD });
    }

    Ok(Self(trimmed.to_string()))
  }

  /// Returns the username as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Username {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Username {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  pub const MIN_LENGTH: usize = 3;
  pub const MAX_LENGTH: usize = 100;

  const FIELD: &'static str = "email";

  /// Creates a new Email after trimming and validation
  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();

    if trimmed.is_empty() {
      return Err(ValueObjectError::EmptyInput { field: Self::FIELD });
    }

    if trimmed.len() < Self::MIN_LENGTH || trimmed.len() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidLength {
        field: Self::FIELD,
        min: Self::MIN_LENGTH,
        max: Self::MAX_LENGTH,
      });
    }

    if !EMAIL_RE.is_match(trimmed) {
      return Err(ValueObjectError::InvalidFormat { field: Self::FIELD });
    }

    Ok(Self(trimmed.to_string()))
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  pub const MIN_LENGTH: usize = 8;
  pub const MAX_LENGTH: usize = 128;

  const FIELD: &'static str = "password";

  /// Creates a new Password after trimming and validation
  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();

    if trimmed.is_empty() {
      return Err(ValueObjectError::EmptyInput { field: Self::FIELD });
    }

    if trimmed.len() < Self::MIN_LENGTH || trimmed.len() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidLength {
        field: Self::FIELD,
        min: Self::MIN_LENGTH,
        max: Self::MAX_LENGTH,
      });
    }

    if trimmed.chars().any(char::is_whitespace) {
      return Err(ValueObjectError::InvalidCharacters { field: Self::FIELD });
    }

    Ok(Self(trimmed.to_string()))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// Implement Display without exposing the password
impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_username_validation() {
    assert!(Username::new("jokosaputro").is_ok());
    assert!(Username::new("joko_saputro95").is_ok());
    assert!(Username::new("ab1").is_ok());

    // Empty after trimming
    assert!(matches!(
      Username::new("   "),
      Err(ValueObjectError::EmptyInput { field: "username" })
    ));

    // Length bounds
    assert!(matches!(
      Username::new("ab"),
      Err(ValueObjectError::InvalidLength { .. })
    ));
    let long = "a".repeat(31);
    assert!(matches!(
      Username::new(long),
      Err(ValueObjectError::InvalidLength { .. })
    ));
    assert!(Username::new("a".repeat(30)).is_ok());
  }

  #[test]
  fn test_username_must_start_with_letter() {
    assert!(matches!(
      Username::new("1joko"),
      Err(ValueObjectError::InvalidCharacters { .. })
    ));
    assert!(matches!(
      Username::new("_joko"),
      Err(ValueObjectError::InvalidCharacters { .. })
    ));
    assert!(matches!(
      Username::new("joko saputro"),
      Err(ValueObjectError::InvalidCharacters { .. })
    ));
    assert!(matches!(
      Username::new("joko-saputro"),
      Err(ValueObjectError::InvalidCharacters { .. })
    ));
  }

  #[test]
  fn test_username_trims_whitespace() {
    let username = Username::new("  jokosaputro  ").unwrap();
    assert_eq!(username.as_str(), "jokosaputro");
  }

  #[test]
  fn test_username_round_trip() {
    let username = Username::new("joko_95").unwrap();
    let rebuilt = Username::new(username.as_str()).unwrap();
    assert_eq!(username, rebuilt);
  }

  #[test]
  fn test_email_validation() {
    assert!(Email::new("joko@test.com").is_ok());
    assert!(Email::new("user.name+tag@domain.co.uk").is_ok());

    assert!(matches!(
      Email::new(""),
      Err(ValueObjectError::EmptyInput { field: "email" })
    ));
    assert!(matches!(
      Email::new("invalid"),
      Err(ValueObjectError::InvalidFormat { .. })
    ));
    assert!(matches!(
      Email::new("@example.com"),
      Err(ValueObjectError::InvalidFormat { .. })
    ));
    assert!(matches!(
      Email::new("joko@test"),
      Err(ValueObjectError::InvalidFormat { .. })
    ));
    // TLD must be at least two letters
    assert!(matches!(
      Email::new("joko@test.c"),
      Err(ValueObjectError::InvalidFormat { .. })
    ));
  }

  #[test]
  fn test_email_length_bounds() {
    let local = "a".repeat(90);
    let too_long = format!("{}@example.com", local);
    assert!(matches!(
      Email::new(too_long),
      Err(ValueObjectError::InvalidLength { .. })
    ));
  }

  #[test]
  fn test_email_trims_whitespace() {
    let email = Email::new("  joko@test.com ").unwrap();
    assert_eq!(email.as_str(), "joko@test.com");
  }

  #[test]
  fn test_email_round_trip() {
    let email = Email::new("joko@test.com").unwrap();
    let rebuilt = Email::new(email.as_str()).unwrap();
    assert_eq!(email, rebuilt);
  }

  #[test]
  fn test_password_validation() {
    assert!(Password::new("password123").is_ok());

    assert!(matches!(
      Password::new("   "),
      Err(ValueObjectError::EmptyInput { field: "password" })
    ));
    assert!(matches!(
      Password::new("short"),
      Err(ValueObjectError::InvalidLength { .. })
    ));
    let long = "a".repeat(129);
    assert!(matches!(
      Password::new(long),
      Err(ValueObjectError::InvalidLength { .. })
    ));
    assert!(Password::new("a".repeat(128)).is_ok());
  }

  #[test]
  fn test_password_rejects_whitespace() {
    assert!(matches!(
      Password::new("pass word123"),
      Err(ValueObjectError::InvalidCharacters { .. })
    ));
    assert!(matches!(
      Password::new("password\t123"),
      Err(ValueObjectError::InvalidCharacters { .. })
    ));
  }

  #[test]
  fn test_password_never_printed() {
    let password = Password::new("password123").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
    assert_eq!(format!("{}", password), "***");
  }

  #[test]
  fn test_error_field_names() {
    let err = Username::new("").unwrap_err();
    assert_eq!(err.field(), "username");
    let err = Email::new("").unwrap_err();
    assert_eq!(err.field(), "email");
    let err = Password::new("").unwrap_err();
    assert_eq!(err.field(), "password");
  }
}
