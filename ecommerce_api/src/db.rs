// ecommerce_api/src/db.rs

//! Pool construction and startup-time schema creation.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::schemas::ProductCreate;

pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(&config.database_url)
    .await?;
  info!("Successfully connected to the database.");
  Ok(pool)
}

/// Applies every pending migration under `migrations/`. Already-applied versions are skipped.
#[instrument(name = "db::create_tables", skip(pool), err(Display))]
pub async fn create_tables(pool: &PgPool) -> Result<()> {
  sqlx::migrate!("./migrations").run(pool).await?;
  info!("Database schema is in place.");
  Ok(())
}

/// The catalog the storefront shows out of the box.
pub fn demo_catalog() -> Vec<ProductCreate> {
  let product = |name: &str, description: &str, price: f64, category: &str, stock: i32| ProductCreate {
    name: name.to_string(),
    description: description.to_string(),
    price,
    category: category.to_string(),
    stock,
  };

  vec![
    product(
      "Premium Headphones",
      "High-quality wireless headphones with noise cancellation",
      199.99,
      "Electronics",
      15,
    ),
    product("Running Shoes", "Comfortable running shoes for everyday use", 89.99, "Footwear", 25),
    product("Smart Watch", "Feature-rich smartwatch with health monitoring", 249.99, "Electronics", 8),
    product("Backpack", "Durable backpack with laptop compartment", 59.99, "Accessories", 30),
    product(
      "Water Bottle",
      "Insulated water bottle keeps drinks cold for 24 hours",
      24.99,
      "Accessories",
      50,
    ),
    product(
      "Desk Lamp",
      "Adjustable LED desk lamp with multiple brightness settings",
      39.99,
      "Home",
      20,
    ),
  ]
}

/// Inserts the demo catalog when the products table is empty. Returns the number of rows inserted.
#[instrument(name = "db::seed_db", skip(pool), err(Display))]
pub async fn seed_db(pool: &PgPool) -> Result<usize> {
  let mut tx = pool.begin().await?;

  let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(&mut *tx)
    .await?;
  if existing > 0 {
    info!(existing, "Products already present, skipping seed.");
    return Ok(0);
  }

  let catalog = demo_catalog();
  for item in &catalog {
    sqlx::query("INSERT INTO products (name, description, price, category, stock) VALUES ($1, $2, $3, $4, $5)")
      .bind(&item.name)
      .bind(&item.description)
      .bind(item.price)
      .bind(&item.category)
      .bind(item.stock)
      .execute(&mut *tx)
      .await?;
  }
  tx.commit().await?;

  info!(inserted = catalog.len(), "Seeded demo product catalog.");
  Ok(catalog.len())
}
