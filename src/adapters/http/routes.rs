use actix_web::web;
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::user::RegisterUserUseCase;
use crate::infrastructure::config::AppConfig;

use super::handlers::auth::register_handler;
use super::handlers::health::{db_health_check, health_check};

/// Configure authentication routes
///
/// Mounts the registration endpoint under the provided scope. Routes are
/// prefixed with the scope path (e.g., /api/v1/auth).
///
/// # Routes
///
/// - POST /register - Register a new user account
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterUserUseCase>,
) {
  cfg
    .app_data(web::Data::new(register_use_case))
    .route("/register", web::post().to(register_handler));
}

/// Configure health check routes
///
/// # Routes
///
/// - GET /health - Application liveness plus name/version
/// - GET /health/db - Database connectivity check
pub fn configure_health_routes(cfg: &mut web::ServiceConfig, app: AppConfig, pool: PgPool) {
  cfg
    .app_data(web::Data::new(app))
    .app_data(web::Data::new(pool))
    .route("/health", web::get().to(health_check))
    .route("/health/db", web::get().to(db_health_check));
}
