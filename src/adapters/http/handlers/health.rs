use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::adapters::http::dtos::HealthResponse;
use crate::infrastructure::config::AppConfig;

/// Basic liveness check reporting the application identity
///
/// GET /health
pub async fn health_check(app: web::Data<AppConfig>) -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse {
    status: "ok".to_string(),
    message: "Server is running".to_string(),
    app: Some(app.name.clone()),
    version: Some(app.version.clone()),
  })
}

/// Database health check pinging the connection pool
///
/// GET /health/db
pub async fn db_health_check(pool: web::Data<PgPool>) -> HttpResponse {
  match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
    Ok(_) => HttpResponse::Ok().json(HealthResponse {
      status: "ok".to_string(),
      message: "Database is healthy".to_string(),
      app: None,
      version: None,
    }),
    Err(e) => {
      tracing::error!("database health check failed: {}", e);
      HttpResponse::ServiceUnavailable().json(HealthResponse {
        status: "error".to_string(),
        message: "Database connection failed".to_string(),
        app: None,
        version: None,
      })
    }
  }
}
