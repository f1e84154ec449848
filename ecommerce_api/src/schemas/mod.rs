// ecommerce_api/src/schemas/mod.rs

//! Request and response shapes for the HTTP API.
//!
//! Deserialization is the validation layer: a body that is missing a field or
//! carries the wrong type never reaches a handler.

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderCreate, OrderItemBase};
pub use product::{Product, ProductCreate};
pub use user::{User, UserCreate};
