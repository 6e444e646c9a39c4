//! Per-tier model access lists
//!
//! The 3-tier model access tables. Entries are canonical model identifiers
//! as the provider-routing layer expects them; changing access for a tier
//! means editing these lists and redeploying.

use crate::error::AccessResult;
use crate::tiers::SubscriptionTier;

/// Models available to the free tier: basic models only
const FREE_MODELS: &[&str] = &[
    "openrouter/deepseek/deepseek-chat",
    "openrouter/qwen/qwen3-235b-a22b",
    "openrouter/google/gemini-2.5-flash-preview-05-20",
    "anthropic/claude-3-5-haiku-latest",
];

/// Models available to the pro tier: everything in free plus Sonnet-class
const PRO_75_MODELS: &[&str] = &[
    "openrouter/deepseek/deepseek-chat",
    "openrouter/qwen/qwen3-235b-a22b",
    "openrouter/google/gemini-2.5-flash-preview-05-20",
    "anthropic/claude-3-5-haiku-latest",
    "anthropic/claude-3-7-sonnet-latest",
    "anthropic/claude-sonnet-4-20250514",
];

/// Models available to the admin tier: everything in pro plus premium models
const ADMIN_MODELS: &[&str] = &[
    "openrouter/deepseek/deepseek-chat",
    "openrouter/qwen/qwen3-235b-a22b",
    "openrouter/google/gemini-2.5-flash-preview-05-20",
    "anthropic/claude-3-5-haiku-latest",
    "anthropic/claude-3-7-sonnet-latest",
    "anthropic/claude-sonnet-4-20250514",
    "openai/o3",
    "openai/gpt-4.1",
];

/// Get the model list for a tier
pub(crate) fn models(tier: SubscriptionTier) -> &'static [&'static str] {
    match tier {
        SubscriptionTier::Free => FREE_MODELS,
        SubscriptionTier::Pro75 => PRO_75_MODELS,
        SubscriptionTier::Admin => ADMIN_MODELS,
    }
}

/// Get the model list for a tier by its wire name.
///
/// Fails with [`AccessError::UnknownTier`](crate::AccessError::UnknownTier)
/// for names outside the configured tier set.
pub fn models_for_tier(name: &str) -> AccessResult<&'static [&'static str]> {
    let tier: SubscriptionTier = name.parse()?;
    Ok(models(tier))
}
