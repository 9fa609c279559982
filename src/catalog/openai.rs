//! OpenAI models. Prices are USD per MTok, current as of late 2025.

use crate::capabilities::{Capabilities, ReasoningEffort};
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str) -> ModelEntry {
    super::seed(Provider::OpenAi, name, full_name)
}

fn caps() -> Capabilities {
    Capabilities {
        auto_prompt_caching: true,
        cache_discount_factor: 0.5,
        developer_messages: true,
        ..Capabilities::default()
    }
}

/// gpt-5 generation: deeper cache discount, configurable reasoning, and
/// the hosted tools exposed through the Responses API.
fn gpt5_caps() -> Capabilities {
    Capabilities {
        cache_discount_factor: 0.1,
        reasoning: true,
        adjustable_effort: true,
        reasoning_effort: ReasoningEffort::Medium,
        web_search: true,
        code_execution: true,
        mcp_servers: true,
        pdf_input: true,
        ..caps()
    }
}

fn o_series_caps() -> Capabilities {
    Capabilities {
        cache_discount_factor: 0.25,
        reasoning: true,
        adjustable_effort: true,
        reasoning_effort: ReasoningEffort::Medium,
        ..caps()
    }
}

pub(crate) fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry {
            input_price: 1.25,
            output_price: 10.0,
            context_window: 400_000,
            max_output_tokens: 128_000,
            capabilities: gpt5_caps(),
            ..model("gpt-5", "gpt-5")
        },
        ModelEntry {
            input_price: 0.25,
            output_price: 2.0,
            context_window: 400_000,
            max_output_tokens: 128_000,
            capabilities: gpt5_caps(),
            ..model("gpt-5-mini", "gpt-5-mini")
        },
        ModelEntry {
            input_price: 0.05,
            output_price: 0.40,
            context_window: 400_000,
            max_output_tokens: 128_000,
            capabilities: gpt5_caps(),
            ..model("gpt-5-nano", "gpt-5-nano")
        },
        ModelEntry {
            input_price: 1.25,
            output_price: 10.0,
            context_window: 400_000,
            max_output_tokens: 128_000,
            capabilities: gpt5_caps(),
            requires_responses_api: true,
            ..model("gpt-5-codex", "gpt-5-codex")
        },
        ModelEntry {
            input_price: 2.0,
            output_price: 8.0,
            context_window: 200_000,
            max_output_tokens: 100_000,
            capabilities: o_series_caps(),
            ..model("o3", "o3")
        },
        ModelEntry {
            input_price: 1.10,
            output_price: 4.40,
            context_window: 200_000,
            max_output_tokens: 100_000,
            capabilities: o_series_caps(),
            ..model("o4-mini", "o4-mini")
        },
        ModelEntry {
            input_price: 2.50,
            output_price: 10.0,
            context_window: 128_000,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                predicted_output: true,
                ..caps()
            },
            ..model("gpt-4o", "gpt-4o")
        },
        ModelEntry {
            input_price: 0.15,
            output_price: 0.60,
            context_window: 128_000,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                predicted_output: true,
                ..caps()
            },
            ..model("gpt-4o-mini", "gpt-4o-mini")
        },
        ModelEntry {
            input_price: 2.50,
            output_price: 10.0,
            context_window: 128_000,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                audio_input: true,
                vision: false,
                auto_prompt_caching: false,
                cache_discount_factor: 1.0,
                ..caps()
            },
            ..model("gpt-4o-audio", "gpt-4o-audio-preview")
        },
        ModelEntry {
            input_price: 10.0,
            output_price: 30.0,
            context_window: 128_000,
            max_output_tokens: 4_096,
            capabilities: Capabilities {
                auto_prompt_caching: false,
                cache_discount_factor: 1.0,
                ..caps()
            },
            deprecated: true,
            ..model("gpt-4-turbo", "gpt-4-turbo")
        },
    ]
}
