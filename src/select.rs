//! Constraint-based model selection.

use crate::capabilities::{Capabilities, CapabilityFlag, ReasoningEffort};
use crate::entry::{ModelEntry, Provider};
use crate::registry::Registry;

/// Partial capability requirements.
///
/// Only explicitly listed flags constrain the match; everything else is
/// unconstrained. `require` demands a flag, `forbid` demands its absence.
///
/// ```
/// use llm_catalog::{CapabilityFilter, CapabilityFlag};
///
/// let filter = CapabilityFilter::new()
///     .require(CapabilityFlag::Reasoning)
///     .forbid(CapabilityFlag::AudioInput);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapabilityFilter {
    constraints: Vec<(CapabilityFlag, bool)>,
    effort: Option<ReasoningEffort>,
}

impl CapabilityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(self, flag: CapabilityFlag) -> Self {
        self.flag(flag, true)
    }

    pub fn forbid(self, flag: CapabilityFlag) -> Self {
        self.flag(flag, false)
    }

    pub fn flag(mut self, flag: CapabilityFlag, enabled: bool) -> Self {
        self.constraints.push((flag, enabled));
        self
    }

    /// Exact-equality constraint on the effort level.
    pub fn reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.effort = Some(effort);
        self
    }

    pub fn matches(&self, caps: &Capabilities) -> bool {
        self.constraints
            .iter()
            .all(|(flag, wanted)| flag.enabled(caps) == *wanted)
            && self.effort.is_none_or(|effort| caps.reasoning_effort == effort)
    }
}

/// Extra constraints for [`Registry::cheapest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionOptions {
    pub min_context: Option<u64>,
    pub provider: Option<Provider>,
}

impl SelectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_context(mut self, tokens: u64) -> Self {
        self.min_context = Some(tokens);
        self
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    fn admits(&self, entry: &ModelEntry) -> bool {
        self.min_context.is_none_or(|min| entry.context_window >= min)
            && self.provider.is_none_or(|p| entry.provider == p)
    }
}

/// Sort key for [`Registry::ranked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    /// Combined input + output price.
    Price,
    /// Context window size.
    Context,
    /// Maximum output tokens.
    Output,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl Registry {
    /// Cheapest entry (by combined price) satisfying `filter` and
    /// `options`. Ties keep the first entry in registry order.
    pub fn cheapest(
        &self,
        filter: &CapabilityFilter,
        options: &SelectionOptions,
    ) -> Option<&ModelEntry> {
        let mut best: Option<&ModelEntry> = None;
        for entry in self.iter() {
            if !filter.matches(&entry.capabilities) || !options.admits(entry) {
                continue;
            }
            match best {
                Some(current) if entry.combined_price() >= current.combined_price() => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// Most expensive entry whose combined price fits the budget,
    /// optionally constrained by `filter`.
    ///
    /// Picking the priciest affordable entry rather than the cheapest is
    /// deliberate: within a budget, a higher price is taken as a proxy for
    /// greater capability. Existing consumers depend on this contract.
    pub fn best_value(
        &self,
        max_combined_price: f64,
        filter: Option<&CapabilityFilter>,
    ) -> Option<&ModelEntry> {
        let mut best: Option<&ModelEntry> = None;
        for entry in self.iter() {
            if entry.combined_price() > max_combined_price {
                continue;
            }
            if let Some(filter) = filter
                && !filter.matches(&entry.capabilities)
            {
                continue;
            }
            match best {
                Some(current) if entry.combined_price() <= current.combined_price() => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// All entries sorted by `metric`. The sort is stable, so ties keep
    /// registry order.
    pub fn ranked(&self, metric: RankMetric, order: SortOrder) -> Vec<&ModelEntry> {
        let mut entries: Vec<&ModelEntry> = self.iter().collect();
        entries.sort_by(|a, b| {
            let ordering = match metric {
                RankMetric::Price => a.combined_price().total_cmp(&b.combined_price()),
                RankMetric::Context => a.context_window.cmp(&b.context_window),
                RankMetric::Output => a.max_output_tokens.cmp(&b.max_output_tokens),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        entries
    }
}
