// ecommerce_api/src/models/product.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  pub stock: i32,
  pub created_at: DateTime<Utc>,
}
