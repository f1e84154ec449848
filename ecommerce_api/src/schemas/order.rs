// ecommerce_api/src/schemas/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemBase {
  pub product_id: i64,
  pub quantity: i32,
}

/// Inbound order. `items` has no minimum or maximum length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
  pub items: Vec<OrderItemBase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: i64,
  pub user_id: i64,
  pub total: f64,
  pub status: String,
  pub items: Vec<OrderItemBase>,
  pub created_at: DateTime<Utc>,
}

impl Order {
  pub fn from_rows(order: models::Order, items: Vec<models::OrderItem>) -> Self {
    Self {
      id: order.id,
      user_id: order.user_id,
      total: order.total,
      status: order.status,
      items: items
        .into_iter()
        .map(|item| OrderItemBase {
          product_id: item.product_id,
          quantity: item.quantity,
        })
        .collect(),
      created_at: order.created_at,
    }
  }
}
