// --- File: crates/salonify_config/src/lib.rs ---
//! Unified configuration loading for Salonify.
//!
//! Configuration is layered: a base file (`config/default`, overridable via
//! the `RUN_MODE` env var with `config/{RUN_MODE}`), then environment
//! variables with the `APP` prefix and `__` separator (e.g.
//! `APP_SERVER__PORT=8086`). A `.env` file is honoured for local development.

pub mod models;

pub use models::*;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Load `.env` at most once per process.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        // Missing .env is fine; env vars may come from the environment itself.
        let _ = dotenv::dotenv();
    });
}

/// Loads the application configuration.
///
/// This is used by dependent crates so they do not need to know where the
/// configuration comes from (files, environment, or both).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8086)?
        .build()?;

    config.try_deserialize()
}
