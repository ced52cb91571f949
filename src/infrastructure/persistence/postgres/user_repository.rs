use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::user::{
  entities::User,
  errors::RepositoryError,
  ports::UserRepository,
  value_objects::{Email, Username},
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: String,
  username: String,
  email: String,
  hashed_password: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
  type Error = RepositoryError;

  // Stored rows are re-validated on the way out; a row that fails the
  // value-object invariants is an InvalidRecord.
  fn try_from(row: UserRow) -> Result<Self, Self::Error> {
    let username = Username::new(row.username)
      .map_err(|e| RepositoryError::InvalidRecord(e.to_string()))?;
    let email =
      Email::new(row.email).map_err(|e| RepositoryError::InvalidRecord(e.to_string()))?;

    Ok(User::from_db(
      row.id,
      username,
      email,
      row.hashed_password,
      row.created_at,
      row.updated_at,
    ))
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn save(&self, user: User) -> Result<User, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (id, username, email, hashed_password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, hashed_password, created_at, updated_at
            "#,
    )
    .bind(&user.id)
    .bind(user.username.as_str())
    .bind(user.email.as_str())
    .bind(&user.hashed_password)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn update(&self, user: User) -> Result<User, RepositoryError> {
    let result = sqlx::query_as::<_, UserRow>(
      r#"
            UPDATE users
            SET username = $2, email = $3, hashed_password = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, email, hashed_password, created_at, updated_at
            "#,
    )
    .bind(&user.id)
    .bind(user.username.as_str())
    .bind(user.email.as_str())
    .bind(&user.hashed_password)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => row.try_into(),
      Err(sqlx::Error::RowNotFound) => Err(RepositoryError::NotFound),
      Err(e) => Err(e.into()),
    }
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, hashed_password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(User::try_from).transpose()
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, hashed_password, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await?;

    row.map(User::try_from).transpose()
  }

  async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
    let rows = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, hashed_password, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(User::try_from).collect()
  }

  async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
    let exists: (bool,) =
      sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

    Ok(exists.0)
  }

  async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(RepositoryError::NotFound);
    }

    Ok(())
  }
}
