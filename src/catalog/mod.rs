//! Builtin provider tables.
//!
//! Flat data, no logic. Each provider module exposes a `models()` table;
//! [`tables`] yields them in the fixed assembly order that defines
//! registry iteration order for the builtin dataset.

mod anthropic;
mod google;
mod groq;
mod mistral;
mod openai;
mod xai;
mod zai;

use crate::capabilities::Capabilities;
use crate::entry::{ModelEntry, Provider};

pub(crate) fn tables() -> [Vec<ModelEntry>; 7] {
    [
        anthropic::models(),
        openai::models(),
        google::models(),
        xai::models(),
        groq::models(),
        mistral::models(),
        zai::models(),
    ]
}

/// Identity fields plus neutral defaults; tables fill in prices, limits,
/// and capabilities via struct update.
pub(crate) fn seed(provider: Provider, name: &str, full_name: &str) -> ModelEntry {
    ModelEntry {
        name: name.into(),
        full_name: full_name.into(),
        provider,
        input_price: 0.0,
        output_price: 0.0,
        context_window: 1,
        max_output_tokens: 1,
        capabilities: Capabilities::default(),
        open_router_only: false,
        openrouter_full_name: None,
        base_url: None,
        requires_responses_api: false,
        deprecated: false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_names_unique() {
        let mut seen = HashSet::new();
        for table in tables() {
            for entry in table {
                assert!(seen.insert(entry.name.clone()), "duplicate key {}", entry.name);
            }
        }
    }

    #[test]
    fn test_builtin_invariants() {
        for table in tables() {
            for entry in table {
                assert!(entry.input_price >= 0.0, "{}", entry.name);
                assert!(entry.output_price >= 0.0, "{}", entry.name);
                assert!(entry.context_window > 0, "{}", entry.name);
                assert!(entry.max_output_tokens > 0, "{}", entry.name);
                assert!(
                    (0.0..=1.0).contains(&entry.capabilities.cache_discount_factor),
                    "{}",
                    entry.name
                );
                if entry.open_router_only {
                    assert!(entry.openrouter_full_name.is_some(), "{}", entry.name);
                }
            }
        }
    }

    #[test]
    fn test_every_provider_has_a_table() {
        let providers: HashSet<Provider> = tables()
            .into_iter()
            .flatten()
            .map(|entry| entry.provider)
            .collect();
        for provider in Provider::ALL {
            assert!(providers.contains(&provider), "no entries for {provider}");
        }
    }
}
