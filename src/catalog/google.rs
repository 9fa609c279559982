//! Google models. Prices are USD per MTok, current as of late 2025.

use crate::capabilities::Capabilities;
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str) -> ModelEntry {
    super::seed(Provider::Google, name, full_name)
}

fn caps() -> Capabilities {
    Capabilities {
        auto_prompt_caching: true,
        cache_discount_factor: 0.25,
        pdf_input: true,
        audio_input: true,
        web_search: true,
        code_execution: true,
        exact_token_counting: true,
        ..Capabilities::default()
    }
}

pub(crate) fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry {
            input_price: 1.25,
            output_price: 10.0,
            context_window: 1_048_576,
            max_output_tokens: 65_536,
            capabilities: Capabilities {
                reasoning: true,
                ..caps()
            },
            ..model("gemini-2.5-pro", "gemini-2.5-pro")
        },
        ModelEntry {
            input_price: 0.30,
            output_price: 2.50,
            context_window: 1_048_576,
            max_output_tokens: 65_536,
            capabilities: Capabilities {
                reasoning: true,
                ..caps()
            },
            ..model("gemini-2.5-flash", "gemini-2.5-flash")
        },
        ModelEntry {
            input_price: 0.10,
            output_price: 0.40,
            context_window: 1_048_576,
            max_output_tokens: 65_536,
            capabilities: caps(),
            ..model("gemini-2.5-flash-lite", "gemini-2.5-flash-lite")
        },
        ModelEntry {
            input_price: 0.10,
            output_price: 0.40,
            context_window: 1_048_576,
            max_output_tokens: 8_192,
            capabilities: Capabilities {
                code_execution: false,
                ..caps()
            },
            ..model("gemini-2.0-flash", "gemini-2.0-flash")
        },
    ]
}
