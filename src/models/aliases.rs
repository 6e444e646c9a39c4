//! Model name aliases
//!
//! Short names accepted as user/config input, mapped to canonical model
//! identifiers. Resolution is a single exact-match hop: unknown names are
//! treated as already canonical and returned unchanged, and an alias target
//! that is itself an alias is not resolved further.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::trace;

/// Short names to full names
static MODEL_NAME_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("sonnet-3.7", "anthropic/claude-3-7-sonnet-latest"),
        ("sonnet-3.5", "anthropic/claude-3-5-sonnet-latest"),
        ("sonnet-4", "anthropic/claude-sonnet-4-20250514"),
        ("haiku-3.5", "anthropic/claude-3-5-haiku-latest"),
        ("claude-sonnet-4", "anthropic/claude-sonnet-4-20250514"),
        ("gpt-4o", "openrouter/openai/gpt-4o"),
        ("gpt-4.1", "openai/gpt-4.1"),
        ("gpt-4.1-mini", "gpt-4.1-mini"),
        ("deepseek", "openrouter/deepseek/deepseek-chat"),
        ("qwen3", "openrouter/qwen/qwen3-235b-a22b"),
        ("gemini-flash-2.5", "openrouter/google/gemini-2.5-flash-preview-05-20"),
        (
            "gemini-2.5-flash:thinking",
            "openrouter/google/gemini-2.5-flash-preview-05-20:thinking",
        ),
        (
            "google/gemini-2.5-pro-preview",
            "openrouter/google/gemini-2.5-pro-preview",
        ),
        (
            "deepseek/deepseek-chat-v3-0324",
            "openrouter/deepseek/deepseek-chat-v3-0324",
        ),
        // O3 stays reachable under every spelling clients are known to send.
        ("o3", "openai/o3"),
        ("openai/o3", "openai/o3"),
        ("openrouter/openai/o3", "openai/o3"),
    ])
});

/// Resolve a model name alias to its canonical identifier.
///
/// Unknown names are valid output: they pass through unchanged rather than
/// failing, so callers can hand any model name to this function before
/// routing or membership checks.
pub fn resolve_alias(name: &str) -> &str {
    match MODEL_NAME_ALIASES.get(name) {
        Some(&canonical) => {
            if canonical != name {
                trace!(alias = name, model = canonical, "resolved model alias");
            }
            canonical
        }
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_resolve_to_full_names() {
        assert_eq!(resolve_alias("sonnet-3.7"), "anthropic/claude-3-7-sonnet-latest");
        assert_eq!(resolve_alias("haiku-3.5"), "anthropic/claude-3-5-haiku-latest");
        assert_eq!(resolve_alias("deepseek"), "openrouter/deepseek/deepseek-chat");
    }

    #[test]
    fn unknown_names_pass_through_unchanged() {
        assert_eq!(resolve_alias("not-a-known-alias"), "not-a-known-alias");
        assert_eq!(resolve_alias("anthropic/claude-3-5-haiku-latest"), "anthropic/claude-3-5-haiku-latest");
    }

    #[test]
    fn distinct_aliases_may_share_a_target() {
        assert_eq!(resolve_alias("sonnet-4"), resolve_alias("claude-sonnet-4"));
        assert_eq!(resolve_alias("o3"), resolve_alias("openrouter/openai/o3"));
    }

    #[test]
    fn resolution_is_single_hop() {
        // "gpt-4o" maps to an OpenRouter id that is not itself an alias key;
        // a second lookup must not rewrite it further.
        let first = resolve_alias("gpt-4o");
        assert_eq!(first, "openrouter/openai/gpt-4o");
        assert_eq!(resolve_alias(first), first);

        // Self-mapping entry stays fixed.
        assert_eq!(resolve_alias("gpt-4.1-mini"), "gpt-4.1-mini");
    }
}
