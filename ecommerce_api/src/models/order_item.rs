// ecommerce_api/src/models/order_item.rs

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct OrderItem {
  pub id: i64,
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i32,
  pub unit_price: f64, // product price captured when the order was placed
}
