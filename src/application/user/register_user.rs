use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::user::entities::User;
use crate::domain::user::errors::{RepositoryError, UserError};
use crate::domain::user::ports::{IdGenerator, PasswordHasher, UserRepository};
use crate::domain::user::value_objects::{Email, Password, Username};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  /// Raw username as submitted by the caller
  pub username: String,
  /// Raw email address as submitted by the caller
  pub email: String,
  /// Raw password (plain text, will be hashed)
  pub password: String,
}

/// Response after successful user registration.
///
/// The credential hash never appears here.
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  /// Unique identifier of the newly created user
  pub id: String,
  /// Trimmed validated username
  pub username: String,
  /// Trimmed validated email address
  pub email: String,
  /// Timestamp assigned by the store on insert
  pub created_at: DateTime<Utc>,
  /// Timestamp assigned by the store on insert
  pub updated_at: DateTime<Utc>,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  user_repo: Arc<dyn UserRepository>,
  id_generator: Arc<dyn IdGenerator>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    id_generator: Arc<dyn IdGenerator>,
    password_hasher: Arc<dyn PasswordHasher>,
  ) -> Self {
    Self {
      user_repo,
      id_generator,
      password_hasher,
    }
  }

  /// Executes the registration flow.
  ///
  /// Single pass, fail fast: validation, duplicate check, hashing and the
  /// insert each run at most once and the first failure short-circuits the
  /// rest.
  ///
  /// # Errors
  /// - `UserError::Validation` for malformed username, email or password
  /// - `UserError::EmailAlreadyExists` when the email is taken
  /// - `UserError::Repository` / `UserError::Hash` for infrastructure
  ///   failures
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, UserError> {
    // Parse and validate input before touching any port
    let username = Username::new(command.username)?;
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    // Reject already-registered emails
    if self.user_repo.exists_by_email(email.as_str()).await? {
      return Err(UserError::EmailAlreadyExists);
    }

    // Hash the raw password; the plain text goes no further than this call
    let hashed_password = self.password_hasher.hash(&password).await?;

    // Assemble the entity; construction cannot fail past this point
    let id = self.id_generator.new_id();
    let user = User::new(id, username, email, hashed_password);

    // Persist. The unique constraint on email backs up the existence check
    // above, so a concurrent insert surfaces here as a duplicate key.
    let saved = match self.user_repo.save(user).await {
      Ok(user) => user,
      Err(RepositoryError::DuplicateKey(_)) => return Err(UserError::EmailAlreadyExists),
      Err(e) => return Err(e.into()),
    };

    Ok(RegisterUserResponse {
      id: saved.id,
      username: saved.username.into_inner(),
      email: saved.email.into_inner(),
      created_at: saved.created_at,
      updated_at: saved.updated_at,
    })
  }
}
