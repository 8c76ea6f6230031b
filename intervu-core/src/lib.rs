pub mod config;
pub mod rules;

pub use config::{AddOn, AddOns, ConfigError, Difficulty, Duration, InterviewConfig, InterviewType};
pub use rules::{normalize, Notice};
