// ecommerce_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

pub const APP_TITLE: &str = "Ecommerce API";
pub const APP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,
  pub seed_db: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = lookup("DATABASE_URL")
      .filter(|url| !url.trim().is_empty())
      .ok_or_else(|| AppError::Config("Missing environment variable 'DATABASE_URL'".to_string()))?;
    let database_max_connections = get_or("DATABASE_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;
    let seed_db = get_or("SEED_DB", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;
    let log_format = get_or("LOG_FORMAT", "pretty").parse::<LogFormat>()?;

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      seed_db,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| map.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_only_database_url_is_set() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/shop")])).unwrap();
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8000);
    assert_eq!(cfg.database_max_connections, 5);
    assert!(!cfg.seed_db);
    assert_eq!(cfg.log_format, LogFormat::Pretty);
    assert_eq!(cfg.bind_address(), "127.0.0.1:8000");
  }

  #[test]
  fn missing_database_url_is_a_config_error() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("DATABASE_URL")));
  }

  #[test]
  fn invalid_values_are_rejected() {
    let bad_port = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("SERVER_PORT", "http")]));
    assert!(matches!(bad_port, Err(AppError::Config(_))));

    let bad_seed = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("SEED_DB", "yes")]));
    assert!(matches!(bad_seed, Err(AppError::Config(_))));

    let bad_format = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("LOG_FORMAT", "xml")]));
    assert!(matches!(bad_format, Err(AppError::Config(_))));
  }

  #[test]
  fn log_format_is_case_insensitive() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!(" pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
  }

  #[test]
  #[serial]
  fn from_env_reads_process_environment() {
    let overrides = [
      ("DATABASE_URL", "postgres://env-host/shop"),
      ("SERVER_PORT", "9090"),
      ("SEED_DB", "true"),
    ];
    let saved: Vec<(&str, Option<String>)> = overrides.iter().map(|(k, _)| (*k, env::var(k).ok())).collect();
    for (k, v) in overrides {
      env::set_var(k, v);
    }

    let result = AppConfig::from_env();

    // Put the caller's environment back before asserting
    for (k, prior) in saved {
      match prior {
        Some(v) => env::set_var(k, v),
        None => env::remove_var(k),
      }
    }

    let cfg = result.unwrap();
    assert_eq!(cfg.database_url, "postgres://env-host/shop");
    assert_eq!(cfg.server_port, 9090);
    assert!(cfg.seed_db);
  }

  #[test]
  #[serial]
  fn from_env_leaves_existing_variables_in_place() {
    let prior = env::var("DATABASE_URL").ok();
    env::set_var("DATABASE_URL", "postgres://kept-host/shop");

    let _ = AppConfig::from_env();
    let after = env::var("DATABASE_URL").ok();

    match prior {
      Some(v) => env::set_var("DATABASE_URL", v),
      None => env::remove_var("DATABASE_URL"),
    }
    assert_eq!(after.as_deref(), Some("postgres://kept-host/shop"));
  }
}
