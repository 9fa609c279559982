//! Cost computation against catalog prices.
//!
//! Prices are USD per million tokens; cache-hit input tokens are charged at
//! the entry's `cache_discount_factor` fraction of the normal input price.

use serde::{Deserialize, Serialize};

use crate::entry::ModelEntry;
use crate::registry::Registry;
use crate::{Error, Result};

const MTOK: f64 = 1_000_000.0;

/// Token counts for one request/response exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
    /// Input tokens served from the prompt cache. Counted as part of
    /// `input`, not in addition to it.
    pub cached: u64,
}

impl TokenUsage {
    pub fn new(input: u64, output: u64) -> Self {
        Self {
            input,
            output,
            cached: 0,
        }
    }

    pub fn with_cached(mut self, cached: u64) -> Self {
        self.cached = cached;
        self
    }
}

/// One entry's computed cost, produced by [`compare_costs`].
#[derive(Debug, Clone, Copy)]
pub struct CostEstimate<'a> {
    pub entry: &'a ModelEntry,
    pub cost: f64,
}

impl ModelEntry {
    /// USD cost of `usage` at this entry's prices.
    ///
    /// `cached` is clamped to `input`, so an over-reported cache count
    /// never produces a negative uncached term.
    pub fn cost(&self, usage: &TokenUsage) -> f64 {
        let cached = usage.cached.min(usage.input);
        let uncached = usage.input - cached;
        let discount = self.capabilities.cache_discount_factor;

        (uncached as f64 / MTOK) * self.input_price
            + (cached as f64 / MTOK) * self.input_price * discount
            + (usage.output as f64 / MTOK) * self.output_price
    }

    /// Worst-case cost for `input_tokens`: the full `max_output_tokens`
    /// emitted and no cache hits.
    pub fn max_cost(&self, input_tokens: u64) -> f64 {
        self.cost(&TokenUsage::new(input_tokens, self.max_output_tokens))
    }
}

/// Cost of `usage` at each entry, ascending by cost.
///
/// The sort is stable: ties keep the input order.
pub fn compare_costs<'a>(entries: &[&'a ModelEntry], usage: &TokenUsage) -> Vec<CostEstimate<'a>> {
    let mut estimates: Vec<CostEstimate<'a>> = entries
        .iter()
        .map(|&entry| CostEstimate {
            entry,
            cost: entry.cost(usage),
        })
        .collect();
    estimates.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    estimates
}

impl Registry {
    /// [`ModelEntry::cost`] by short name.
    ///
    /// The only fallible operation in the crate: an unresolvable key is
    /// [`Error::UnknownModel`].
    pub fn cost(&self, name: &str, usage: &TokenUsage) -> Result<f64> {
        let entry = self.get(name).ok_or_else(|| Error::UnknownModel {
            model: name.to_string(),
        })?;
        Ok(entry.cost(usage))
    }

    /// [`ModelEntry::max_cost`] by short name.
    pub fn max_cost(&self, name: &str, input_tokens: u64) -> Result<f64> {
        let entry = self.get(name).ok_or_else(|| Error::UnknownModel {
            model: name.to_string(),
        })?;
        Ok(entry.max_cost(input_tokens))
    }

    /// [`compare_costs`] by short names, failing on the first unknown key.
    pub fn compare_costs(&self, names: &[&str], usage: &TokenUsage) -> Result<Vec<CostEstimate<'_>>> {
        let entries = names
            .iter()
            .map(|name| {
                self.get(name).ok_or_else(|| Error::UnknownModel {
                    model: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(compare_costs(&entries, usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Capabilities;
    use crate::entry::Provider;

    fn entry_with_prices(name: &str, input: f64, output: f64, discount: f64) -> ModelEntry {
        ModelEntry {
            name: name.into(),
            full_name: format!("{name}-v1"),
            provider: Provider::Anthropic,
            input_price: input,
            output_price: output,
            context_window: 200_000,
            max_output_tokens: 64_000,
            capabilities: Capabilities {
                prompt_caching: discount < 1.0,
                cache_discount_factor: discount,
                ..Capabilities::default()
            },
            open_router_only: false,
            openrouter_full_name: None,
            base_url: None,
            requires_responses_api: false,
            deprecated: false,
        }
    }

    #[test]
    fn test_cost_without_cache() {
        let entry = entry_with_prices("a", 3.0, 15.0, 0.1);
        let cost = entry.cost(&TokenUsage::new(10_000, 5_000));
        assert!((cost - 0.105).abs() < 1e-12);
    }

    #[test]
    fn test_cost_with_cache_hits() {
        let entry = entry_with_prices("a", 3.0, 15.0, 0.1);
        let cost = entry.cost(&TokenUsage::new(10_000, 5_000).with_cached(8_000));
        assert!((cost - 0.0834).abs() < 1e-12);
    }

    #[test]
    fn test_cached_clamped_to_input() {
        let entry = entry_with_prices("a", 3.0, 15.0, 0.1);
        let overreported = entry.cost(&TokenUsage::new(1_000, 0).with_cached(5_000));
        let all_cached = entry.cost(&TokenUsage::new(1_000, 0).with_cached(1_000));
        assert_eq!(overreported, all_cached);
        assert!(overreported > 0.0);
    }

    #[test]
    fn test_max_cost_assumes_full_output() {
        let entry = entry_with_prices("a", 3.0, 15.0, 0.1);
        let expected = entry.cost(&TokenUsage::new(10_000, entry.max_output_tokens));
        assert_eq!(entry.max_cost(10_000), expected);
        assert!(entry.max_cost(10_000) >= entry.cost(&TokenUsage::new(10_000, 5_000)));
    }

    #[test]
    fn test_compare_costs_ascending_and_stable() {
        let pricey = entry_with_prices("pricey", 3.0, 15.0, 1.0);
        let cheap = entry_with_prices("cheap", 0.25, 0.30, 1.0);
        let cheap_twin = entry_with_prices("cheap-twin", 0.25, 0.30, 1.0);

        let usage = TokenUsage::new(1_000_000, 0);
        let ranked = compare_costs(&[&pricey, &cheap_twin, &cheap], &usage);
        let names: Vec<_> = ranked.iter().map(|c| c.entry.name.as_str()).collect();
        assert_eq!(names, ["cheap-twin", "cheap", "pricey"]);
        assert!((ranked[2].cost - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_model_error() {
        let registry = crate::Registry::from_tables([vec![entry_with_prices("a", 3.0, 15.0, 0.1)]]);
        let usage = TokenUsage::new(1_000, 0);

        assert!(registry.cost("a", &usage).is_ok());
        let err = registry.cost("nope", &usage).unwrap_err();
        assert!(matches!(err, Error::UnknownModel { ref model } if model == "nope"));

        assert!(registry.max_cost("nope", 1_000).is_err());
        assert!(registry.compare_costs(&["a", "nope"], &usage).is_err());
    }
}
