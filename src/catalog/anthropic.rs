//! Anthropic models. Prices are USD per MTok, current as of late 2025.

use crate::capabilities::Capabilities;
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str) -> ModelEntry {
    super::seed(Provider::Anthropic, name, full_name)
}

fn caps() -> Capabilities {
    Capabilities {
        prompt_caching: true,
        cache_discount_factor: 0.1,
        prefill: true,
        exact_token_counting: true,
        pdf_input: true,
        web_search: true,
        code_execution: true,
        mcp_servers: true,
        search_filters: true,
        ..Capabilities::default()
    }
}

fn thinking(base: Capabilities) -> Capabilities {
    Capabilities {
        reasoning: true,
        interleaved_reasoning: true,
        // Prefill conflicts with extended thinking on the Messages API.
        prefill: false,
        ..base
    }
}

pub(crate) fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry {
            input_price: 15.0,
            output_price: 75.0,
            context_window: 200_000,
            max_output_tokens: 32_000,
            capabilities: caps(),
            ..model("claude-opus-4-1", "claude-opus-4-1-20250805")
        },
        ModelEntry {
            input_price: 15.0,
            output_price: 75.0,
            context_window: 200_000,
            max_output_tokens: 32_000,
            capabilities: thinking(caps()),
            ..model("claude-opus-4-1-thinking", "claude-opus-4-1-20250805")
        },
        ModelEntry {
            input_price: 3.0,
            output_price: 15.0,
            context_window: 200_000,
            max_output_tokens: 64_000,
            capabilities: caps(),
            ..model("claude-sonnet-4-5", "claude-sonnet-4-5-20250929")
        },
        ModelEntry {
            input_price: 3.0,
            output_price: 15.0,
            context_window: 200_000,
            max_output_tokens: 64_000,
            capabilities: thinking(caps()),
            ..model("claude-sonnet-4-5-thinking", "claude-sonnet-4-5-20250929")
        },
        ModelEntry {
            input_price: 1.0,
            output_price: 5.0,
            context_window: 200_000,
            max_output_tokens: 64_000,
            capabilities: caps(),
            ..model("claude-haiku-4-5", "claude-haiku-4-5-20251001")
        },
        ModelEntry {
            input_price: 1.0,
            output_price: 5.0,
            context_window: 200_000,
            max_output_tokens: 64_000,
            capabilities: thinking(caps()),
            ..model("claude-haiku-4-5-thinking", "claude-haiku-4-5-20251001")
        },
        ModelEntry {
            input_price: 0.80,
            output_price: 4.0,
            context_window: 200_000,
            max_output_tokens: 8_192,
            capabilities: Capabilities {
                web_search: false,
                code_execution: false,
                search_filters: false,
                ..caps()
            },
            ..model("claude-3-5-haiku", "claude-3-5-haiku-20241022")
        },
        ModelEntry {
            input_price: 3.0,
            output_price: 15.0,
            context_window: 200_000,
            max_output_tokens: 8_192,
            capabilities: Capabilities {
                web_search: false,
                code_execution: false,
                search_filters: false,
                ..caps()
            },
            deprecated: true,
            ..model("claude-3-5-sonnet", "claude-3-5-sonnet-20241022")
        },
    ]
}
