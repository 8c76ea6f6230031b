pub mod app_config;
pub mod cache;

pub use app_config::Config;
pub use cache::{Cached, SessionStore, StoreError, DEFAULT_TTL_MS};
