use serde::{Deserialize, Serialize};

/// Named discount rules honored at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Coupon {
    First50,
    Save10,
}

/// SAVE10 requires the order to exceed this subtotal
const SAVE10_MINIMUM_CENTS: i32 = 3_000;

/// FIRST50 discounts half the subtotal up to this cap
const FIRST50_CAP_CENTS: i32 = 2_500;

impl Coupon {
    /// Look up a coupon by code. Codes are matched after ASCII-uppercasing,
    /// mirroring the uppercase-on-input behavior of the checkout form.
    pub fn parse(code: &str) -> Option<Coupon> {
        match code.trim().to_ascii_uppercase().as_str() {
            "FIRST50" => Some(Coupon::First50),
            "SAVE10" => Some(Coupon::Save10),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Coupon::First50 => "FIRST50",
            Coupon::Save10 => "SAVE10",
        }
    }

    /// Discount in cents for a given subtotal, or the coupon's precondition
    /// failure.
    pub fn discount_cents(&self, subtotal_cents: i32) -> Result<i32, CouponError> {
        match self {
            Coupon::First50 => Ok((subtotal_cents / 2).min(FIRST50_CAP_CENTS)),
            Coupon::Save10 => {
                if subtotal_cents > SAVE10_MINIMUM_CENTS {
                    Ok(1_000)
                } else {
                    Err(CouponError::MinimumOrder)
                }
            }
        }
    }
}

/// A coupon that passed its precondition against a specific subtotal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedCoupon {
    pub coupon: Coupon,
    pub discount_cents: i32,
}

/// Evaluate a coupon code against the current subtotal.
pub fn apply(code: &str, subtotal_cents: i32) -> Result<AppliedCoupon, CouponError> {
    let coupon = Coupon::parse(code).ok_or(CouponError::UnknownCode)?;
    let discount_cents = coupon.discount_cents(subtotal_cents)?;
    Ok(AppliedCoupon {
        coupon,
        discount_cents,
    })
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CouponError {
    #[error("Invalid coupon code")]
    UnknownCode,

    #[error("This coupon requires a minimum order of $30.")]
    MinimumOrder,

    #[error("A coupon is already applied")]
    AlreadyApplied,
}
