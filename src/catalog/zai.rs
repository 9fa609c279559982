//! Z.ai GLM models, reachable only through OpenRouter. Prices are USD per
//! MTok, current as of late 2025.

use crate::capabilities::Capabilities;
use crate::entry::{ModelEntry, Provider};

fn model(name: &str, full_name: &str, openrouter: &str) -> ModelEntry {
    ModelEntry {
        open_router_only: true,
        openrouter_full_name: Some(openrouter.into()),
        ..super::seed(Provider::ZAi, name, full_name)
    }
}

fn caps() -> Capabilities {
    Capabilities {
        vision: false,
        reasoning: true,
        ..Capabilities::default()
    }
}

pub(crate) fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry {
            input_price: 0.60,
            output_price: 2.20,
            context_window: 202_752,
            max_output_tokens: 131_072,
            capabilities: caps(),
            ..model("glm-4.6", "glm-4.6", "z-ai/glm-4.6")
        },
        ModelEntry {
            input_price: 0.60,
            output_price: 2.20,
            context_window: 131_072,
            max_output_tokens: 98_304,
            capabilities: caps(),
            ..model("glm-4.5", "glm-4.5", "z-ai/glm-4.5")
        },
        ModelEntry {
            input_price: 0.20,
            output_price: 1.10,
            context_window: 131_072,
            max_output_tokens: 98_304,
            capabilities: caps(),
            ..model("glm-4.5-air", "glm-4.5-air", "z-ai/glm-4.5-air")
        },
    ]
}
