// ecommerce_api/src/schemas/user.rs

use serde::{Deserialize, Serialize};

use crate::models;

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
  pub email: String,
  pub password: String,
}

/// Outbound user shape. Carries no password material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: i64,
  pub email: String,
  pub is_active: bool,
}

impl From<models::User> for User {
  fn from(row: models::User) -> Self {
    Self {
      id: row.id,
      email: row.email,
      is_active: row.is_active,
    }
  }
}
