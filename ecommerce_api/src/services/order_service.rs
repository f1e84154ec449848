// ecommerce_api/src/services/order_service.rs

//! Order persistence: creation inside a single transaction, and lookups.

use std::collections::{BTreeSet, HashMap};

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models;
use crate::schemas::{Order, OrderCreate, OrderItemBase};

const ORDER_COLUMNS: &str = "id, user_id, total, status, created_at";
const ORDER_ITEM_COLUMNS: &str = "id, order_id, product_id, quantity, unit_price";

/// Product ids referenced by `items` that have no entry in `prices`, sorted and deduplicated.
pub fn missing_products(items: &[OrderItemBase], prices: &HashMap<i64, f64>) -> Vec<i64> {
  items
    .iter()
    .map(|item| item.product_id)
    .filter(|id| !prices.contains_key(id))
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}

/// Sum of `price * quantity` over all items. An empty order totals `0.0`.
pub fn compute_total(items: &[OrderItemBase], prices: &HashMap<i64, f64>) -> Result<f64> {
  let missing = missing_products(items, prices);
  if !missing.is_empty() {
    return Err(not_found_products(&missing));
  }
  Ok(
    items
      .iter()
      .map(|item| prices[&item.product_id] * f64::from(item.quantity))
      .sum(),
  )
}

fn not_found_products(ids: &[i64]) -> AppError {
  let listed = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
  AppError::NotFound(format!("Products not found: {}.", listed))
}

pub async fn ensure_user_exists<'e, E>(executor: E, user_id: i64) -> Result<()>
where
  E: sqlx::PgExecutor<'e>,
{
  let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
    .bind(user_id)
    .fetch_one(executor)
    .await?;
  if exists {
    Ok(())
  } else {
    warn!(user_id, "User not found.");
    Err(AppError::NotFound(format!("User with ID {} not found.", user_id)))
  }
}

async fn load_prices(tx: &mut Transaction<'_, Postgres>, items: &[OrderItemBase]) -> Result<HashMap<i64, f64>> {
  let ids: Vec<i64> = items
    .iter()
    .map(|item| item.product_id)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect();
  if ids.is_empty() {
    return Ok(HashMap::new());
  }

  let rows: Vec<(i64, f64)> = sqlx::query_as("SELECT id, price FROM products WHERE id = ANY($1)")
    .bind(&ids)
    .fetch_all(&mut **tx)
    .await?;
  Ok(rows.into_iter().collect())
}

/// Creates an order for `user_id` with status `pending`.
///
/// The user and every referenced product must exist. Prices are read inside the
/// same transaction that writes the order, and each line keeps the price it was
/// charged at. Stock is left untouched.
#[instrument(name = "order_service::create_order", skip(pool, payload), fields(item_count = payload.items.len()), err(Display))]
pub async fn create_order(pool: &PgPool, user_id: i64, payload: &OrderCreate) -> Result<Order> {
  let mut tx = pool.begin().await?;

  ensure_user_exists(&mut *tx, user_id).await?;

  let prices = load_prices(&mut tx, &payload.items).await?;
  let total = compute_total(&payload.items, &prices)?;
  debug!(total, "Computed order total.");

  let order: models::Order = sqlx::query_as(&format!(
    "INSERT INTO orders (user_id, total, status) VALUES ($1, $2, $3) RETURNING {}",
    ORDER_COLUMNS
  ))
  .bind(user_id)
  .bind(total)
  .bind(models::order::STATUS_PENDING)
  .fetch_one(&mut *tx)
  .await?;

  let insert_item_sql = format!(
    "INSERT INTO order_items (order_id, product_id, quantity, unit_price) VALUES ($1, $2, $3, $4) RETURNING {}",
    ORDER_ITEM_COLUMNS
  );
  let mut items = Vec::with_capacity(payload.items.len());
  for item in &payload.items {
    let row: models::OrderItem = sqlx::query_as(&insert_item_sql)
      .bind(order.id)
      .bind(item.product_id)
      .bind(item.quantity)
      .bind(prices[&item.product_id])
      .fetch_one(&mut *tx)
      .await?;
    items.push(row);
  }

  tx.commit().await?;
  info!(order_id = order.id, total, "Order created.");

  Ok(Order::from_rows(order, items))
}

#[instrument(name = "order_service::get_order", skip(pool), err(Display))]
pub async fn get_order(pool: &PgPool, order_id: i64) -> Result<Order> {
  let order: Option<models::Order> = sqlx::query_as(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
    .bind(order_id)
    .fetch_optional(pool)
    .await?;

  let order = order.ok_or_else(|| AppError::NotFound(format!("Order with ID {} not found.", order_id)))?;

  let items: Vec<models::OrderItem> = sqlx::query_as(&format!(
    "SELECT {} FROM order_items WHERE order_id = $1 ORDER BY id ASC",
    ORDER_ITEM_COLUMNS
  ))
  .bind(order.id)
  .fetch_all(pool)
  .await?;

  Ok(Order::from_rows(order, items))
}

#[instrument(name = "order_service::list_orders_for_user", skip(pool), err(Display))]
pub async fn list_orders_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Order>> {
  ensure_user_exists(pool, user_id).await?;

  let orders: Vec<models::Order> = sqlx::query_as(&format!(
    "SELECT {} FROM orders WHERE user_id = $1 ORDER BY id ASC",
    ORDER_COLUMNS
  ))
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
  let items: Vec<models::OrderItem> = sqlx::query_as(&format!(
    "SELECT {} FROM order_items WHERE order_id = ANY($1) ORDER BY id ASC",
    ORDER_ITEM_COLUMNS
  ))
  .bind(&order_ids)
  .fetch_all(pool)
  .await?;

  let mut items_by_order: HashMap<i64, Vec<models::OrderItem>> = HashMap::new();
  for item in items {
    items_by_order.entry(item.order_id).or_default().push(item);
  }

  Ok(
    orders
      .into_iter()
      .map(|order| {
        let items = items_by_order.remove(&order.id).unwrap_or_default();
        Order::from_rows(order, items)
      })
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(product_id: i64, quantity: i32) -> OrderItemBase {
    OrderItemBase { product_id, quantity }
  }

  fn catalog() -> HashMap<i64, f64> {
    HashMap::from([(1, 199.99), (2, 89.99), (5, 24.99)])
  }

  #[test]
  fn empty_order_totals_zero() {
    assert_eq!(compute_total(&[], &catalog()).unwrap(), 0.0);
  }

  #[test]
  fn total_sums_price_times_quantity() {
    let total = compute_total(&[item(2, 2), item(5, 4)], &catalog()).unwrap();
    assert!((total - (89.99 * 2.0 + 24.99 * 4.0)).abs() < 1e-9);
  }

  #[test]
  fn repeated_product_lines_are_each_counted() {
    let total = compute_total(&[item(1, 1), item(1, 1)], &catalog()).unwrap();
    assert!((total - 399.98).abs() < 1e-9);
  }

  #[test]
  fn unknown_products_are_reported_once_and_sorted() {
    let items = [item(9, 1), item(1, 1), item(3, 2), item(9, 4)];
    assert_eq!(missing_products(&items, &catalog()), vec![3, 9]);

    match compute_total(&items, &catalog()) {
      Err(AppError::NotFound(m)) => assert_eq!(m, "Products not found: 3, 9."),
      other => panic!("Expected AppError::NotFound, got {:?}", other),
    }
  }
}
