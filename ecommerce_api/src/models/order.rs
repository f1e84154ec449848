// ecommerce_api/src/models/order.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Status assigned to every order at creation. Orders never transition.
pub const STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, FromRow)]
pub struct Order {
  pub id: i64,
  pub user_id: i64,
  pub total: f64,
  pub status: String,
  pub created_at: DateTime<Utc>,
}
