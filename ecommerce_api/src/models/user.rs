// ecommerce_api/src/models/user.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
  pub id: i64,
  pub email: String,
  pub password_hash: String,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
}
