use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsroom::{
  adapters::http::{RequestIdMiddleware, configure_auth_routes, configure_health_routes},
  application::user::RegisterUserUseCase,
  infrastructure::{
    config::Config, id::UuidGenerator, persistence::postgres::PostgresUserRepository,
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "newsroom=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Newsroom user service");

  // Load configuration once; everything below receives it explicitly
  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    anyhow::anyhow!(
      "Database connection timed out after {} seconds. Is PostgreSQL running at {}?",
      config.database.connect_timeout_seconds,
      config.database.url
    )
  })?
  .context("Failed to connect to database")?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  // Initialize port implementations
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let password_hasher =
    Arc::new(Argon2PasswordHasher::new().context("Failed to create password hasher")?);
  let id_generator = Arc::new(UuidGenerator::new());

  // Initialize use cases
  let register_use_case = Arc::new(RegisterUserUseCase::new(
    user_repo,
    id_generator,
    password_hasher,
  ));

  let app_config = config.app.clone();
  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(
        web::scope("/api/v1/auth")
          .configure(|cfg| configure_auth_routes(cfg, register_use_case.clone())),
      )
      .configure(|cfg| configure_health_routes(cfg, app_config.clone(), db_pool.clone()))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  Ok(())
}
