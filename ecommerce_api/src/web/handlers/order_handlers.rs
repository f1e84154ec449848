// ecommerce_api/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::schemas::OrderCreate;
use crate::services::order_service;
use crate::state::AppState;

#[instrument(name = "handler::create_order", skip(app_state, path, req_payload), fields(user_id = %path.as_ref()))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<OrderCreate>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let order = order_service::create_order(&app_state.db_pool, user_id, &req_payload).await?;
  info!(order_id = order.id, "Order placed.");
  Ok(HttpResponse::Created().json(order))
}

#[instrument(name = "handler::list_user_orders", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn list_user_orders_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_orders_for_user(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order = order_service::get_order(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(order))
}
