use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Confirmation returned by a successful charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub amount_cents: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment declined. Try again.")]
    Declined,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given amount against the customer's email. No retry or
    /// idempotency semantics; each call is an independent attempt.
    async fn charge(&self, email: &str, amount_cents: i32) -> Result<PaymentReceipt, PaymentError>;
}

/// Stand-in for a real payment provider: resolves after a fixed artificial
/// delay and succeeds with a fixed probability.
pub struct SimulatedGateway {
    delay: Duration,
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self::seeded(delay, success_rate, rand::random())
    }

    /// Deterministic variant for tests: the outcome sequence is fixed by the
    /// seed.
    pub fn seeded(delay: Duration, success_rate: f64, seed: u64) -> Self {
        Self {
            delay,
            success_rate,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, email: &str, amount_cents: i32) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        let roll: f64 = self.rng.lock().await.gen();
        if roll < self.success_rate {
            let receipt = PaymentReceipt {
                id: Uuid::new_v4(),
                amount_cents,
                created_at: Utc::now(),
            };
            tracing::info!(receipt_id = %receipt.id, amount_cents, %email, "payment accepted");
            Ok(receipt)
        } else {
            tracing::info!(amount_cents, %email, "payment declined");
            Err(PaymentError::Declined)
        }
    }
}
