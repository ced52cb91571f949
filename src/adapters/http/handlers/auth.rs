use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{RegisterRequest, RegisterResponse, SuccessResponse},
  errors::ApiError,
};
use crate::application::user::{RegisterUserCommand, RegisterUserUseCase};

/// Handler for user registration
///
/// POST /api/v1/auth/register
/// Body: RegisterRequest (JSON)
/// Response: RegisterResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  // Shape check at the edge; the value objects stay authoritative
  request.validate()?;

  let command = RegisterUserCommand {
    username: request.username.clone(),
    email: request.email.clone(),
    password: request.password.clone(),
  };

  let response = use_case.execute(command).await?;

  let api_response = RegisterResponse {
    id: response.id,
    username: response.username,
    email: response.email,
    created_at: response.created_at,
    updated_at: response.updated_at,
  };

  Ok(
    HttpResponse::Created().json(SuccessResponse::new(
      "User registered successfully",
      api_response,
    )),
  )
}
