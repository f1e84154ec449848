// ecommerce_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models;
use crate::schemas::{Product, ProductCreate};
use crate::state::AppState;

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, stock, created_at";

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let rows: Vec<models::Product> = sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id ASC", PRODUCT_COLUMNS))
    .fetch_all(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch products from database: {}", e);
      AppError::Sqlx(e)
    })?;

  info!("Successfully fetched {} products.", rows.len());

  let products: Vec<Product> = rows.into_iter().map(Product::from).collect();
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload), fields(name = %req_payload.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ProductCreate>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();

  let row: models::Product = sqlx::query_as(&format!(
    "INSERT INTO products (name, description, price, category, stock) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
    PRODUCT_COLUMNS
  ))
  .bind(&payload.name)
  .bind(&payload.description)
  .bind(payload.price)
  .bind(&payload.category)
  .bind(payload.stock)
  .fetch_one(&app_state.db_pool)
  .await?;

  info!(product_id = row.id, "Product created.");
  Ok(HttpResponse::Created().json(Product::from(row)))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let row: Option<models::Product> =
    sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
      .bind(product_id)
      .fetch_optional(&app_state.db_pool)
      .await
      .map_err(|e| {
        error!("Database error while fetching product {}: {}", product_id, e);
        AppError::Sqlx(e)
      })?;

  match row {
    Some(product) => Ok(HttpResponse::Ok().json(Product::from(product))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
