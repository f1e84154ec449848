// ecommerce_api/src/lib.rs

//! Ecommerce API: users, products and orders served over actix-web, persisted in Postgres via sqlx.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod schemas;
pub mod services;
pub mod state;
pub mod web;

pub use errors::{AppError, Result};
pub use state::AppState;
