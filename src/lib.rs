//! Gatekeeper - Static model access configuration
//!
//! This library provides the fixed tables a subscription-gated AI proxy
//! consults: which models each subscription tier may use, the monthly
//! message quota per tier, and a mapping from short model aliases to the
//! canonical identifiers the provider-routing layer expects.
//!
//! All tables are immutable process-wide state. Nothing here performs I/O,
//! blocks, or mutates; any number of threads may read concurrently without
//! synchronization.

pub mod error;
pub mod models;
pub mod tiers;

pub use crate::error::{AccessError, AccessResult};
pub use crate::models::resolve_alias;
pub use crate::tiers::{message_limit_for_tier, models_for_tier, SubscriptionTier};
