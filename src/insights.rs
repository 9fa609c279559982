//! Aggregate statistics over a registry.

use crate::capabilities::Capabilities;
use crate::entry::{ModelEntry, Provider};
use crate::registry::Registry;

/// Capability counts watched by [`Registry::insights`].
const WATCHED: [(&str, fn(&Capabilities) -> bool); 8] = [
    ("tools", |c| c.tools),
    ("reasoning", |c| c.reasoning),
    ("vision", |c| c.vision),
    ("code execution", |c| c.code_execution),
    ("web search", |c| c.web_search),
    ("caching", |c| c.caches_prompts()),
    ("pdf", |c| c.pdf_input),
    ("audio", |c| c.audio_input),
];

/// Summary statistics over a full registry.
///
/// Extremes are `None` only for an empty registry; ties go to the first
/// entry in registry order.
#[derive(Debug, Clone)]
pub struct CatalogInsights<'a> {
    pub total: usize,
    /// Count per provider, every provider present with a zero default.
    pub by_provider: Vec<(Provider, usize)>,
    /// Count per watched capability, keyed by short label.
    pub by_capability: Vec<(&'static str, usize)>,
    /// Minimal combined price.
    pub cheapest: Option<&'a ModelEntry>,
    /// Maximal combined price.
    pub most_expensive: Option<&'a ModelEntry>,
    pub smallest_context: Option<&'a ModelEntry>,
    pub largest_context: Option<&'a ModelEntry>,
}

impl Registry {
    pub fn insights(&self) -> CatalogInsights<'_> {
        let by_provider = Provider::ALL
            .iter()
            .map(|&provider| {
                let count = self.iter().filter(|e| e.provider == provider).count();
                (provider, count)
            })
            .collect();

        let by_capability = WATCHED
            .iter()
            .map(|&(label, watched)| {
                let count = self.iter().filter(|e| watched(&e.capabilities)).count();
                (label, count)
            })
            .collect();

        let mut cheapest: Option<&ModelEntry> = None;
        let mut most_expensive: Option<&ModelEntry> = None;
        let mut smallest_context: Option<&ModelEntry> = None;
        let mut largest_context: Option<&ModelEntry> = None;

        for entry in self.iter() {
            if cheapest.is_none_or(|c| entry.combined_price() < c.combined_price()) {
                cheapest = Some(entry);
            }
            if most_expensive.is_none_or(|c| entry.combined_price() > c.combined_price()) {
                most_expensive = Some(entry);
            }
            if smallest_context.is_none_or(|c| entry.context_window < c.context_window) {
                smallest_context = Some(entry);
            }
            if largest_context.is_none_or(|c| entry.context_window > c.context_window) {
                largest_context = Some(entry);
            }
        }

        CatalogInsights {
            total: self.len(),
            by_provider,
            by_capability,
            cheapest,
            most_expensive,
            smallest_context,
            largest_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Capabilities;

    fn entry(name: &str, provider: Provider, combined: f64, context: u64) -> ModelEntry {
        ModelEntry {
            name: name.into(),
            full_name: format!("{name}-v1"),
            provider,
            input_price: combined / 2.0,
            output_price: combined / 2.0,
            context_window: context,
            max_output_tokens: 8_192,
            capabilities: Capabilities::default(),
            open_router_only: false,
            openrouter_full_name: None,
            base_url: None,
            requires_responses_api: false,
            deprecated: false,
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        let insights = registry.insights();
        assert_eq!(insights.total, 0);
        assert!(insights.cheapest.is_none());
        assert!(insights.largest_context.is_none());
        assert!(insights.by_provider.iter().all(|&(_, count)| count == 0));
        assert!(insights.by_capability.iter().all(|&(_, count)| count == 0));
    }

    #[test]
    fn test_provider_counts_include_zero_defaults() {
        let registry = Registry::from_tables([vec![
            entry("a", Provider::Anthropic, 18.0, 200_000),
            entry("b", Provider::Anthropic, 4.8, 200_000),
            entry("c", Provider::Groq, 0.13, 131_072),
        ]]);
        let insights = registry.insights();

        assert_eq!(insights.total, 3);
        assert_eq!(insights.by_provider.len(), Provider::ALL.len());
        let count = |p: Provider| {
            insights
                .by_provider
                .iter()
                .find(|(provider, _)| *provider == p)
                .unwrap()
                .1
        };
        assert_eq!(count(Provider::Anthropic), 2);
        assert_eq!(count(Provider::Groq), 1);
        assert_eq!(count(Provider::Mistral), 0);
    }

    #[test]
    fn test_capability_counts() {
        let mut thinker = entry("thinker", Provider::OpenAi, 11.0, 400_000);
        thinker.capabilities.reasoning = true;
        thinker.capabilities.auto_prompt_caching = true;
        thinker.capabilities.cache_discount_factor = 0.1;
        let registry =
            Registry::from_tables([vec![thinker, entry("plain", Provider::Groq, 0.13, 131_072)]]);
        let insights = registry.insights();

        let count = |label: &str| {
            insights
                .by_capability
                .iter()
                .find(|(l, _)| *l == label)
                .unwrap()
                .1
        };
        assert_eq!(count("tools"), 2);
        assert_eq!(count("reasoning"), 1);
        assert_eq!(count("caching"), 1);
        assert_eq!(count("audio"), 0);
    }

    #[test]
    fn test_extremes_with_first_occurrence_ties() {
        let registry = Registry::from_tables([vec![
            entry("mid", Provider::Google, 5.0, 500_000),
            entry("low-a", Provider::Groq, 1.0, 131_072),
            entry("low-b", Provider::Groq, 1.0, 131_072),
            entry("high", Provider::Anthropic, 90.0, 200_000),
        ]]);
        let insights = registry.insights();

        assert_eq!(insights.cheapest.unwrap().name, "low-a");
        assert_eq!(insights.most_expensive.unwrap().name, "high");
        assert_eq!(insights.smallest_context.unwrap().name, "low-a");
        assert_eq!(insights.largest_context.unwrap().name, "mid");
    }
}
