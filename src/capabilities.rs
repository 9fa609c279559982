//! Capability flags attached to every catalog entry.
//!
//! Provider tables build their entries from the shared base template via
//! struct-update syntax, so a new flag gets a sensible default everywhere:
//!
//! ```
//! use llm_catalog::Capabilities;
//!
//! let caps = Capabilities {
//!     reasoning: true,
//!     ..Capabilities::default()
//! };
//! assert!(caps.tools);
//! ```

use serde::{Deserialize, Serialize};

/// Depth setting for models with configurable extended reasoning.
///
/// Only meaningful when [`Capabilities::reasoning`] is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasoningEffort {
    #[default]
    None,
    Low,
    Medium,
    High,
    ExtraHigh,
}

/// Feature-flag bundle for one model configuration.
///
/// All fields are plain data; an entry owns its `Capabilities` exclusively
/// and nothing mutates them after registry construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Function calling.
    pub tools: bool,
    /// Native web search.
    pub web_search: bool,
    /// Native code execution.
    pub code_execution: bool,
    /// Explicit prompt caching (caller marks cache breakpoints).
    pub prompt_caching: bool,
    /// Automatic prompt caching (provider caches transparently).
    pub auto_prompt_caching: bool,
    /// Extended reasoning.
    pub reasoning: bool,
    /// Interleaved reasoning between tool calls.
    pub interleaved_reasoning: bool,
    /// Reasoning effort can be configured per request.
    pub adjustable_effort: bool,
    /// Vision input.
    pub vision: bool,
    /// Native PDF input.
    pub pdf_input: bool,
    /// Native audio input.
    pub audio_input: bool,
    /// Assistant-message prefill.
    pub prefill: bool,
    /// Predictive output.
    pub predicted_output: bool,
    /// Accurate token counting endpoint.
    pub exact_token_counting: bool,
    /// System-prompt support.
    pub system_prompt: bool,
    /// Intermediate developer messages.
    pub developer_messages: bool,
    /// Native tool-server (MCP) support.
    pub mcp_servers: bool,
    /// Dynamic search-result filtering.
    pub search_filters: bool,
    /// Fraction of normal input price charged for a cache-hit token.
    ///
    /// Must lie in `[0, 1]`; `1.0` means caching yields no discount. Only
    /// meaningful when `prompt_caching` or `auto_prompt_caching` is set.
    pub cache_discount_factor: f64,
    /// Default reasoning effort level, when `reasoning` is set.
    pub reasoning_effort: ReasoningEffort,
}

impl Default for Capabilities {
    /// The base template shared by every provider table.
    fn default() -> Self {
        Self {
            tools: true,
            web_search: false,
            code_execution: false,
            prompt_caching: false,
            auto_prompt_caching: false,
            reasoning: false,
            interleaved_reasoning: false,
            adjustable_effort: false,
            vision: true,
            pdf_input: false,
            audio_input: false,
            prefill: false,
            predicted_output: false,
            exact_token_counting: false,
            system_prompt: true,
            developer_messages: false,
            mcp_servers: false,
            search_filters: false,
            cache_discount_factor: 1.0,
            reasoning_effort: ReasoningEffort::None,
        }
    }
}

impl Capabilities {
    /// Whether any form of prompt caching is available.
    pub fn caches_prompts(&self) -> bool {
        self.prompt_caching || self.auto_prompt_caching
    }
}

/// One variant per [`Capabilities`] field.
///
/// Every consumer matches exhaustively, so adding a flag forces each
/// match site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityFlag {
    Tools,
    WebSearch,
    CodeExecution,
    PromptCaching,
    AutoPromptCaching,
    Reasoning,
    InterleavedReasoning,
    AdjustableEffort,
    Vision,
    PdfInput,
    AudioInput,
    Prefill,
    PredictedOutput,
    ExactTokenCounting,
    SystemPrompt,
    DeveloperMessages,
    McpServers,
    SearchFilters,
    CacheDiscount,
    ReasoningEffort,
}

impl CapabilityFlag {
    /// Whether the flag is set on `caps`.
    ///
    /// The two non-boolean attributes count as set when they differ from
    /// the base template: a discount factor below `1.0`, an effort level
    /// other than `None`.
    pub fn enabled(&self, caps: &Capabilities) -> bool {
        match self {
            Self::Tools => caps.tools,
            Self::WebSearch => caps.web_search,
            Self::CodeExecution => caps.code_execution,
            Self::PromptCaching => caps.prompt_caching,
            Self::AutoPromptCaching => caps.auto_prompt_caching,
            Self::Reasoning => caps.reasoning,
            Self::InterleavedReasoning => caps.interleaved_reasoning,
            Self::AdjustableEffort => caps.adjustable_effort,
            Self::Vision => caps.vision,
            Self::PdfInput => caps.pdf_input,
            Self::AudioInput => caps.audio_input,
            Self::Prefill => caps.prefill,
            Self::PredictedOutput => caps.predicted_output,
            Self::ExactTokenCounting => caps.exact_token_counting,
            Self::SystemPrompt => caps.system_prompt,
            Self::DeveloperMessages => caps.developer_messages,
            Self::McpServers => caps.mcp_servers,
            Self::SearchFilters => caps.search_filters,
            Self::CacheDiscount => caps.cache_discount_factor < 1.0,
            Self::ReasoningEffort => caps.reasoning_effort != ReasoningEffort::None,
        }
    }

    /// Short human-readable label, used as the key in capability counts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::WebSearch => "web search",
            Self::CodeExecution => "code execution",
            Self::PromptCaching => "caching",
            Self::AutoPromptCaching => "auto caching",
            Self::Reasoning => "reasoning",
            Self::InterleavedReasoning => "interleaved reasoning",
            Self::AdjustableEffort => "adjustable effort",
            Self::Vision => "vision",
            Self::PdfInput => "pdf",
            Self::AudioInput => "audio",
            Self::Prefill => "prefill",
            Self::PredictedOutput => "predicted output",
            Self::ExactTokenCounting => "token counting",
            Self::SystemPrompt => "system prompt",
            Self::DeveloperMessages => "developer messages",
            Self::McpServers => "mcp",
            Self::SearchFilters => "search filters",
            Self::CacheDiscount => "cache discount",
            Self::ReasoningEffort => "reasoning effort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_template() {
        let caps = Capabilities::default();
        assert!(caps.tools);
        assert!(caps.vision);
        assert!(caps.system_prompt);
        assert!(!caps.reasoning);
        assert!(!caps.caches_prompts());
        assert_eq!(caps.cache_discount_factor, 1.0);
        assert_eq!(caps.reasoning_effort, ReasoningEffort::None);
    }

    #[test]
    fn test_struct_update_override() {
        let caps = Capabilities {
            reasoning: true,
            prompt_caching: true,
            cache_discount_factor: 0.1,
            ..Capabilities::default()
        };
        assert!(caps.tools);
        assert!(caps.caches_prompts());
        assert!(CapabilityFlag::Reasoning.enabled(&caps));
        assert!(CapabilityFlag::CacheDiscount.enabled(&caps));
        assert!(!CapabilityFlag::WebSearch.enabled(&caps));
    }

    #[test]
    fn test_non_boolean_flags() {
        let caps = Capabilities::default();
        assert!(!CapabilityFlag::CacheDiscount.enabled(&caps));
        assert!(!CapabilityFlag::ReasoningEffort.enabled(&caps));

        let caps = Capabilities {
            reasoning: true,
            reasoning_effort: ReasoningEffort::Medium,
            ..Capabilities::default()
        };
        assert!(CapabilityFlag::ReasoningEffort.enabled(&caps));
    }

    #[test]
    fn test_effort_serde() {
        let json = serde_json::to_string(&ReasoningEffort::ExtraHigh).unwrap();
        assert_eq!(json, "\"extra-high\"");
        let back: ReasoningEffort = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, ReasoningEffort::Medium);
    }

    #[test]
    fn test_partial_deserialization() {
        let caps: Capabilities = serde_json::from_str(r#"{"reasoning": true}"#).unwrap();
        assert!(caps.reasoning);
        assert!(caps.tools);
        assert_eq!(caps.cache_discount_factor, 1.0);
    }
}
