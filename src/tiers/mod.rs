//! Subscription tier module
//!
//! Maps subscription tiers to accessible models and monthly message quotas.

pub mod access;
pub mod limits;
pub mod tier;

pub use access::models_for_tier;
pub use limits::message_limit_for_tier;
pub use tier::SubscriptionTier;
