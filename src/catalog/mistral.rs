//! Mistral models. Prices are USD per MTok, current as of late 2025.

use crate::capabilities::Capabilities;
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str) -> ModelEntry {
    super::seed(Provider::Mistral, name, full_name)
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
            input_price: 2.0,
            output_price: 6.0,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: caps(),
            ..model("mistral-large", "mistral-large-latest")
        },
        ModelEntry {
            input_price: 0.40,
            output_price: 2.0,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                vision: true,
                ..caps()
            },
            ..model("mistral-medium", "mistral-medium-latest")
        },
        ModelEntry {
            input_price: 0.10,
            output_price: 0.30,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: Capabilities {
                vision: true,
                ..caps()
            },
            ..model("mistral-small", "mistral-small-latest")
        },
        ModelEntry {
            input_price: 0.30,
            output_price: 0.90,
            context_window: 262_144,
            max_output_tokens: 16_384,
            capabilities: caps(),
            // Served from the dedicated Codestral endpoint.
            base_url: Some("https://codestral.mistral.ai/v1".into()),
            ..model("codestral", "codestral-latest")
        },
        ModelEntry {
            input_price: 2.0,
            output_price: 5.0,
            context_window: 40_960,
            max_output_tokens: 40_960,
            capabilities: Capabilities {
                reasoning: true,
                ..caps()
            },
            ..model("magistral-medium", "magistral-medium-latest")
        },
        ModelEntry {
            input_price: 0.40,
            output_price: 2.0,
            context_window: 131_072,
            max_output_tokens: 16_384,
            capabilities: caps(),
            ..model("devstral-medium", "devstral-medium-latest")
        },
    ]
}
