use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Email, Username};

/// User entity, the aggregate persisted by the user repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Opaque unique identifier, assigned by the id generator
  pub id: String,
  /// Validated username
  pub username: Username,
  /// Validated email address (unique)
  pub email: Email,
  /// Output of the password hasher, never the raw password
  pub hashed_password: String,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user from already-validated value objects.
  ///
  /// Both timestamps are stamped here; the repository's save returns the
  /// authoritative values, which may differ from these.
  pub fn new(id: String, username: Username, email: Email, hashed_password: String) -> Self {
    let now = Utc::now();
    Self {
      id,
      username,
      email,
      hashed_password,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: String,
    username: Username,
    email: Email,
    hashed_password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      username,
      email,
      hashed_password,
      created_at,
      updated_at,
    }
  }

  /// Replaces the stored credential hash
  pub fn update_password(&mut self, new_hashed_password: String) {
    self.hashed_password = new_hashed_password;
    self.updated_at = Utc::now();
  }

  /// Updates the user's email
  pub fn update_email(&mut self, new_email: Email) {
    self.email = new_email;
    self.updated_at = Utc::now();
  }
}
