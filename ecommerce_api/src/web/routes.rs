// ecommerce_api/src/web/routes.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::web::handlers::{order_handlers, product_handlers, user_handlers};

pub const WELCOME_MESSAGE: &str = "Welcome to the Ecommerce API";

async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "message": WELCOME_MESSAGE }))
}

// Liveness only; does not touch the database.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid request body: {}", err)).into()
}

fn path_error_handler(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid path parameter: {}", err)).into()
}

/// Registers every route plus the extractor configs that turn shape errors into `AppError::Validation`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .route("/", web::get().to(root_handler))
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/users")
        .route("", web::post().to(user_handlers::create_user_handler))
        .route("/{user_id}", web::get().to(user_handlers::get_user_handler))
        .route("/{user_id}/orders", web::post().to(order_handlers::create_order_handler))
        .route("/{user_id}/orders", web::get().to(order_handlers::list_user_orders_handler)),
    )
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
    )
    .service(web::scope("/orders").route("/{order_id}", web::get().to(order_handlers::get_order_handler)));
}
