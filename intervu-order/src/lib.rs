pub mod checkout;
pub mod coupon;
pub mod payment;

pub use checkout::{CheckoutError, CheckoutSession, CheckoutState};
pub use coupon::{AppliedCoupon, Coupon, CouponError};
pub use payment::{PaymentError, PaymentGateway, PaymentReceipt, SimulatedGateway};
