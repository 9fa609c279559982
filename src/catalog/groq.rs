//! Groq-hosted open-weight models. Prices are USD per MTok, current as of
//! late 2025.

use crate::capabilities::{Capabilities, ReasoningEffort};
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str) -> ModelEntry {
    super::seed(Provider::Groq, name, full_name)
}

fn caps() -> Capabilities {
    Capabilities {
        vision: false,
        ..Capabilities::default()
    }
}

pub(crate) fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry {
            input_price: 0.59,
            output_price: 0.79,
            context_window: 131_072,
            max_output_tokens: 32_768,
            capabilities: caps(),
            ..model("llama-3.3-70b", "llama-3.3-70b-versatile")
        },
        ModelEntry {
            input_price: 0.05,
            output_price: 0.08,
            context_window: 131_072,
            max_output_tokens: 8_192,
            capabilities: caps(),
            ..model("llama-3.1-8b", "llama-3.1-8b-instant")
        },
        ModelEntry {
            input_price: 0.29,
            output_price: 0.59,
            context_window: 131_072,
            max_output_tokens: 40_960,
            capabilities: Capabilities {
                reasoning: true,
                ..caps()
            },
            ..model("qwen3-32b", "qwen/qwen3-32b")
        },
        ModelEntry {
            input_price: 1.0,
            output_price: 3.0,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: caps(),
            ..model("kimi-k2", "moonshotai/kimi-k2-instruct")
        },
        ModelEntry {
            input_price: 0.15,
            output_price: 0.75,
            context_window: 131_072,
            max_output_tokens: 65_536,
            capabilities: Capabilities {
                reasoning: true,
                adjustable_effort: true,
                reasoning_effort: ReasoningEffort::Medium,
                ..caps()
            },
            ..model("gpt-oss-120b", "openai/gpt-oss-120b")
        },
    ]
}
