// ecommerce_api/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use ecommerce_api::config::{AppConfig, LogFormat, APP_TITLE, APP_VERSION};
use ecommerce_api::state::AppState;
use ecommerce_api::{db, web};

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  tracing::info!(title = APP_TITLE, version = APP_VERSION, "Starting server...");

  let db_pool = db::connect(&app_config)
    .await
    .context("Failed to connect to the database")?;

  db::create_tables(&db_pool)
    .await
    .context("Failed to create database tables")?;

  if app_config.seed_db {
    db::seed_db(&db_pool).await.context("Failed to seed database")?;
  }

  let app_state = AppState::new(db_pool.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await?;

  tracing::info!("Server stopped, closing database pool.");
  db_pool.close().await;
  Ok(())
}
