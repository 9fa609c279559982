//! xAI models. Prices are USD per MTok, current as of late 2025.

use crate::capabilities::{Capabilities, ReasoningEffort};
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str) -> ModelEntry {
    super::seed(Provider::XAi, name, full_name)
}

fn caps() -> Capabilities {
    Capabilities {
        vision: false,
        auto_prompt_caching: true,
        cache_discount_factor: 0.25,
        web_search: true,
        search_filters: true,
        ..Capabilities::default()
    }
}

pub(crate) fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry {
            input_price: 3.0,
            output_price: 15.0,
            context_window: 256_000,
            max_output_tokens: 64_000,
            capabilities: Capabilities {
                vision: true,
                reasoning: true,
                ..caps()
            },
            ..model("grok-4", "grok-4-0709")
        },
        ModelEntry {
            input_price: 3.0,
            output_price: 15.0,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: caps(),
            ..model("grok-3", "grok-3")
        },
        ModelEntry {
            input_price: 0.30,
            output_price: 0.50,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                reasoning: true,
                adjustable_effort: true,
                reasoning_effort: ReasoningEffort::Low,
                ..caps()
            },
            ..model("grok-3-mini", "grok-3-mini")
        },
        ModelEntry {
            input_price: 0.20,
            output_price: 1.50,
            context_window: 256_000,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                reasoning: true,
                web_search: false,
                search_filters: false,
                ..caps()
            },
            ..model("grok-code-fast-1", "grok-code-fast-1")
        },
    ]
}
