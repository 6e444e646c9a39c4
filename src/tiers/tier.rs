//! Subscription tier type
//!
//! The closed set of subscription tiers, with parsing from the wire names
//! used across the platform (`free`, `pro_75`, `admin`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::models::resolve_alias;
use crate::tiers::{access, limits};

/// Subscription tier controlling model access and usage quota
///
/// Ordered from lowest to highest entitlement. Implements PartialOrd so
/// tiers can be compared: Free < Pro75 < Admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub enum SubscriptionTier {
    /// Free tier - basic models, 10 messages per month
    #[serde(rename = "free")]
    Free,
    /// Pro tier ($75) - all standard models, 150 messages per month
    #[serde(rename = "pro_75")]
    Pro75,
    /// Admin tier - every model including premium, effectively unlimited
    #[serde(rename = "admin")]
    Admin,
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionTier::Free => write!(f, "free"),
            SubscriptionTier::Pro75 => write!(f, "pro_75"),
            SubscriptionTier::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(SubscriptionTier::Free),
            "pro_75" => Ok(SubscriptionTier::Pro75),
            "admin" => Ok(SubscriptionTier::Admin),
            other => Err(AccessError::UnknownTier(other.to_string())),
        }
    }
}

impl SubscriptionTier {
    /// All tiers, lowest entitlement first
    pub const fn all() -> [SubscriptionTier; 3] {
        [
            SubscriptionTier::Free,
            SubscriptionTier::Pro75,
            SubscriptionTier::Admin,
        ]
    }

    /// Canonical model identifiers this tier may use
    pub fn models(self) -> &'static [&'static str] {
        access::models(self)
    }

    /// Maximum messages/runs per calendar month for this tier
    pub fn message_limit(self) -> u32 {
        limits::message_limit(self)
    }

    /// Check whether this tier may use the given model.
    ///
    /// The name is alias-resolved (single hop) before the membership check,
    /// so both `"sonnet-3.7"` and `"anthropic/claude-3-7-sonnet-latest"`
    /// are accepted for tiers that carry that model.
    pub fn allows_model(self, name: &str) -> bool {
        let canonical = resolve_alias(name);
        self.models().contains(&canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for tier in SubscriptionTier::all() {
            assert_eq!(tier.to_string().parse::<SubscriptionTier>(), Ok(tier));
        }
    }

    #[test]
    fn unknown_tier_name_fails_to_parse() {
        let err = "enterprise".parse::<SubscriptionTier>().unwrap_err();
        assert_eq!(err, AccessError::UnknownTier("enterprise".to_string()));
    }

    #[test]
    fn tier_ordering() {
        assert!(SubscriptionTier::Free < SubscriptionTier::Pro75);
        assert!(SubscriptionTier::Pro75 < SubscriptionTier::Admin);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&SubscriptionTier::Pro75).unwrap();
        assert_eq!(json, "\"pro_75\"");

        let tier: SubscriptionTier = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(tier, SubscriptionTier::Admin);
    }

    #[test]
    fn allows_model_accepts_aliases() {
        // Pro carries sonnet 3.7; the short alias should pass too.
        assert!(SubscriptionTier::Pro75.allows_model("sonnet-3.7"));
        assert!(SubscriptionTier::Pro75.allows_model("anthropic/claude-3-7-sonnet-latest"));

        // Free does not carry sonnet models at all.
        assert!(!SubscriptionTier::Free.allows_model("sonnet-3.7"));

        // o3 is admin-only, under any of its spellings.
        assert!(SubscriptionTier::Admin.allows_model("o3"));
        assert!(!SubscriptionTier::Pro75.allows_model("openrouter/openai/o3"));
    }
}
