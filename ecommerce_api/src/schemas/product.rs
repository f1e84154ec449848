// ecommerce_api/src/schemas/product.rs

use serde::{Deserialize, Serialize};

use crate::models;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  pub stock: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  pub stock: i32,
}

impl From<models::Product> for Product {
  fn from(row: models::Product) -> Self {
    Self {
      id: row.id,
      name: row.name,
      description: row.description,
      price: row.price,
      category: row.category,
      stock: row.stock,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn product_with_all_fields_validates() {
    let product: Product = serde_json::from_value(json!({
      "id": 1,
      "name": "Premium Headphones",
      "description": "High-quality wireless headphones with noise cancellation",
      "price": 199.99,
      "category": "Electronics",
      "stock": 15
    }))
    .unwrap();
    assert_eq!(product.id, 1);
    assert_eq!(product.price, 199.99);
    assert_eq!(product.stock, 15);
  }

  #[test]
  fn integer_price_is_accepted_as_float() {
    let create: ProductCreate = serde_json::from_value(json!({
      "name": "Backpack",
      "description": "Durable backpack with laptop compartment",
      "price": 60,
      "category": "Accessories",
      "stock": 30
    }))
    .unwrap();
    assert_eq!(create.price, 60.0);
  }

  #[test]
  fn wrong_types_and_missing_fields_are_rejected() {
    let missing_stock = json!({"name": "Lamp", "description": "LED", "price": 39.99, "category": "Home"});
    assert!(serde_json::from_value::<ProductCreate>(missing_stock).is_err());

    let fractional_stock = json!({"name": "Lamp", "description": "LED", "price": 39.99, "category": "Home", "stock": 2.5});
    assert!(serde_json::from_value::<ProductCreate>(fractional_stock).is_err());

    let string_price = json!({"name": "Lamp", "description": "LED", "price": "cheap", "category": "Home", "stock": 2});
    assert!(serde_json::from_value::<ProductCreate>(string_price).is_err());
  }
}
