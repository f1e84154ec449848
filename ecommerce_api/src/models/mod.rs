// ecommerce_api/src/models/mod.rs

//! Contains data structures representing database rows.
//!
//! These are the persisted shapes; the API-facing shapes live in `crate::schemas`.

pub mod order;
pub mod order_item;
pub mod product;
pub mod user;

pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
pub use user::User;
