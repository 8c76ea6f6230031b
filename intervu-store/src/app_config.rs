use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub payment: PaymentConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentConfig {
    /// Artificial gateway delay in milliseconds
    pub delay_ms: u64,
    /// Probability in [0, 1] that a charge succeeds
    pub success_rate: f64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2_000,
            success_rate: 0.8,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Session cache TTL in minutes
    pub ttl_minutes: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_minutes: 30 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payment: PaymentConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides, default 'development'
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables, e.g. INTERVU__PAYMENT__SUCCESS_RATE=1.0
            .add_source(config::Environment::with_prefix("INTERVU").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
