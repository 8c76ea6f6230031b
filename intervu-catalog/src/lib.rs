pub mod pricing;

pub use pricing::{base_price_cents, calculate_total, difficulty_multiplier, surcharge_cents};
