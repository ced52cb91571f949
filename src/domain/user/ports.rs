use async_trait::async_trait;

use super::entities::User;
use super::errors::{HashError, RepositoryError};
use super::value_objects::Password;

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a new user and returns the persisted row.
  ///
  /// The returned timestamps are authoritative and may differ from the
  /// ones stamped at construction.
  async fn save(&self, user: User) -> Result<User, RepositoryError>;

  /// Updates an existing user and returns the persisted row
  async fn update(&self, user: User) -> Result<User, RepositoryError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

  /// Returns all users
  async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

  /// Checks whether a user with the given email already exists
  async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

  /// Deletes a user by their unique identifier
  async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<String, HashError>;

  /// Verifies a plain text password against a stored hash
  async fn verify(&self, password: &Password, hashed_password: &str) -> Result<bool, HashError>;
}

/// Service trait for unique identifier generation
pub trait IdGenerator: Send + Sync {
  /// Returns a new universally-unique opaque identifier
  fn new_id(&self) -> String;
}
