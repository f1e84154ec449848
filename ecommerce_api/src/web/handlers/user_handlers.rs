// ecommerce_api/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models;
use crate::schemas::{User, UserCreate};
use crate::services::auth_service;
use crate::state::AppState;

const USER_COLUMNS: &str = "id, email, password_hash, is_active, created_at";

#[instrument(
    name = "handler::create_user",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<UserCreate>,
) -> Result<HttpResponse, AppError> {
  let UserCreate { email, password } = req_payload.into_inner();
  info!("Creating user.");

  let password_hash = web::block(move || auth_service::hash_password(&password))
    .await
    .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))??;

  let row: models::User = sqlx::query_as(&format!(
    "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING {}",
    USER_COLUMNS
  ))
  .bind(&email)
  .bind(&password_hash)
  .fetch_one(&app_state.db_pool)
  .await
  .map_err(|e| AppError::from_unique_violation(e, format!("An account with email {} already exists.", email)))?;

  info!(user_id = row.id, "User created.");
  Ok(HttpResponse::Created().json(User::from(row)))
}

#[instrument(name = "handler::get_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn get_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  let row: Option<models::User> = sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
    .bind(user_id)
    .fetch_optional(&app_state.db_pool)
    .await?;

  match row {
    Some(user) => Ok(HttpResponse::Ok().json(User::from(user))),
    None => {
      warn!("User with ID {} not found.", user_id);
      Err(AppError::NotFound(format!("User with ID {} not found.", user_id)))
    }
  }
}
