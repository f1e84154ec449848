// ecommerce_api/src/services/mod.rs

pub mod auth_service;
pub mod order_service;
