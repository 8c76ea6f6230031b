use crate::coupon::{self, AppliedCoupon, CouponError};
use crate::payment::{PaymentError, PaymentGateway, PaymentReceipt};
use intervu_core::InterviewConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Checkout screen lifecycle. `Failed` keeps the decline message and allows
/// retry; `Succeeded` is terminal for the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// One checkout over a frozen configuration snapshot. The configuration is
/// consumed read-only here; editing means going back to the configure view
/// and starting a new checkout.
#[derive(Debug)]
pub struct CheckoutSession {
    pub id: Uuid,
    config: InterviewConfig,
    subtotal_cents: i32,
    applied: Option<AppliedCoupon>,
    state: CheckoutState,
    last_error: Option<String>,
}

impl CheckoutSession {
    pub fn new(config: InterviewConfig, subtotal_cents: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            subtotal_cents,
            applied: None,
            state: CheckoutState::Editing,
            last_error: None,
        }
    }

    pub fn config(&self) -> &InterviewConfig {
        &self.config
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Decline message from the most recent failed attempt, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn subtotal_cents(&self) -> i32 {
        self.subtotal_cents
    }

    pub fn applied_coupon(&self) -> Option<&AppliedCoupon> {
        self.applied.as_ref()
    }

    pub fn discount_cents(&self) -> i32 {
        self.applied.map(|a| a.discount_cents).unwrap_or(0)
    }

    /// Final amount due: subtotal minus discount, floored at zero.
    pub fn total_cents(&self) -> i32 {
        (self.subtotal_cents - self.discount_cents()).max(0)
    }

    /// Apply a coupon code. Only one coupon can be active; the current one
    /// must be cleared before another is accepted (no stacking).
    pub fn apply_coupon(&mut self, code: &str) -> Result<AppliedCoupon, CouponError> {
        if self.applied.is_some() {
            return Err(CouponError::AlreadyApplied);
        }
        let applied = coupon::apply(code, self.subtotal_cents)?;
        self.applied = Some(applied);
        tracing::info!(code = applied.coupon.code(), discount_cents = applied.discount_cents, "coupon applied");
        Ok(applied)
    }

    pub fn clear_coupon(&mut self) {
        self.applied = None;
    }

    /// Validate the contact details and submit the payment. The session is
    /// `Submitting` while the charge is in flight, which rejects duplicate
    /// submissions; a decline moves to `Failed` and a later call retries.
    pub async fn pay(
        &mut self,
        gateway: &dyn PaymentGateway,
        name: &str,
        email: &str,
    ) -> Result<PaymentReceipt, CheckoutError> {
        match self.state {
            CheckoutState::Editing | CheckoutState::Failed => {}
            CheckoutState::Submitting => return Err(CheckoutError::SubmissionInFlight),
            CheckoutState::Succeeded => return Err(CheckoutError::AlreadyCompleted),
        }

        if !valid_full_name(name) {
            return Err(CheckoutError::InvalidName);
        }
        if !valid_email(email) {
            return Err(CheckoutError::InvalidEmail);
        }

        self.state = CheckoutState::Submitting;
        self.last_error = None;

        match gateway.charge(email, self.total_cents()).await {
            Ok(receipt) => {
                self.state = CheckoutState::Succeeded;
                Ok(receipt)
            }
            Err(err @ PaymentError::Declined) => {
                self.state = CheckoutState::Failed;
                self.last_error = Some(err.to_string());
                Err(CheckoutError::Payment(err))
            }
        }
    }
}

/// At least two whitespace-separated tokens.
pub fn valid_full_name(name: &str) -> bool {
    name.split_whitespace().count() >= 2
}

/// Minimal `x@y.z` shape: something before the `@`, and a dot with
/// something on both sides after it.
pub fn valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Name must contain first and last name")]
    InvalidName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("A payment is already being processed")]
    SubmissionInFlight,

    #[error("Payment already completed")]
    AlreadyCompleted,

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
