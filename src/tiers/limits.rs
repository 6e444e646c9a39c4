//! Per-tier message limits
//!
//! Maximum messages/runs per calendar month for each subscription tier.
//! This module only supplies the configured numbers; quota enforcement and
//! usage counting happen in the consuming proxy.

use crate::error::AccessResult;
use crate::tiers::SubscriptionTier;

/// Free tier: 10 messages/runs per month
const FREE_MESSAGE_LIMIT: u32 = 10;
/// Pro tier: 150 messages/runs per month
const PRO_75_MESSAGE_LIMIT: u32 = 150;
/// Admin tier: 100,000 messages/runs per month (effectively unlimited)
const ADMIN_MESSAGE_LIMIT: u32 = 100_000;

/// Get the monthly message limit for a tier
pub(crate) fn message_limit(tier: SubscriptionTier) -> u32 {
    match tier {
        SubscriptionTier::Free => FREE_MESSAGE_LIMIT,
        SubscriptionTier::Pro75 => PRO_75_MESSAGE_LIMIT,
        SubscriptionTier::Admin => ADMIN_MESSAGE_LIMIT,
    }
}

/// Get the monthly message limit for a tier by its wire name.
///
/// Fails with [`AccessError::UnknownTier`](crate::AccessError::UnknownTier)
/// for names outside the configured tier set.
pub fn message_limit_for_tier(name: &str) -> AccessResult<u32> {
    let tier: SubscriptionTier = name.parse()?;
    Ok(message_limit(tier))
}
