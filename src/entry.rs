//! Catalog entry and provider types.

use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;

/// Source organization a model originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Anthropic,
    OpenAi,
    Google,
    XAi,
    Groq,
    Mistral,
    ZAi,
}

impl Provider {
    /// Every provider, in catalog assembly order.
    pub const ALL: [Provider; 7] = [
        Provider::Anthropic,
        Provider::OpenAi,
        Provider::Google,
        Provider::XAi,
        Provider::Groq,
        Provider::Mistral,
        Provider::ZAi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
            Self::Google => "google",
            Self::XAi => "xai",
            Self::Groq => "groq",
            Self::Mistral => "mistral",
            Self::ZAi => "zai",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One addressable model configuration.
///
/// `name` is the short key, unique across the registry. `full_name` is the
/// canonical provider-API identifier and need not be unique: a thinking
/// variant and its base model share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub full_name: String,
    pub provider: Provider,
    /// USD per one million input tokens.
    pub input_price: f64,
    /// USD per one million output tokens.
    pub output_price: f64,
    /// Maximum input + history tokens.
    pub context_window: u64,
    pub max_output_tokens: u64,
    pub capabilities: Capabilities,
    /// Reachable only through the OpenRouter aggregator, not the
    /// provider's direct API.
    #[serde(default)]
    pub open_router_only: bool,
    #[serde(default)]
    pub openrouter_full_name: Option<String>,
    /// Endpoint override for models served off the provider's main API.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub requires_responses_api: bool,
    #[serde(default)]
    pub deprecated: bool,
}

impl ModelEntry {
    /// `input_price + output_price`, the single-number cost proxy used by
    /// ranking and selection.
    pub fn combined_price(&self) -> f64 {
        self.input_price + self.output_price
    }
}
