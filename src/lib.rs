//! # llm-catalog
//!
//! Static reference dataset of language-model metadata (pricing, context
//! limits, capability flags) with pure query, cost, and selection functions
//! over it.
//!
//! The catalog performs no I/O: a [`Registry`] is built once from flat
//! provider tables and is read-only afterwards, so it can be shared across
//! threads without synchronization. Callers construct and own their
//! registry explicitly; [`Registry::builtin`] assembles the shipped
//! dataset, [`Registry::from_tables`] builds a custom one.
//!
//! ## Quick Start
//!
//! ```rust
//! use llm_catalog::{CapabilityFilter, CapabilityFlag, Registry, SelectionOptions, TokenUsage};
//!
//! let catalog = Registry::builtin();
//!
//! // Exact lookup and cost computation.
//! let sonnet = catalog.get("claude-sonnet-4-5").unwrap();
//! let cost = sonnet.cost(&TokenUsage::new(10_000, 5_000));
//! assert!((cost - 0.105).abs() < 1e-9);
//!
//! // Cheapest model with extended reasoning and a big context window.
//! let pick = catalog
//!     .cheapest(
//!         &CapabilityFilter::new().require(CapabilityFlag::Reasoning),
//!         &SelectionOptions::new().min_context(200_000),
//!     )
//!     .unwrap();
//! assert!(pick.capabilities.reasoning);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod capabilities;
pub(crate) mod catalog;
pub mod cost;
pub mod entry;
pub mod insights;
pub mod registry;
pub mod select;

pub use capabilities::{Capabilities, CapabilityFlag, ReasoningEffort};
pub use cost::{CostEstimate, TokenUsage, compare_costs};
pub use entry::{ModelEntry, Provider};
pub use insights::CatalogInsights;
pub use registry::Registry;
pub use select::{CapabilityFilter, RankMetric, SelectionOptions, SortOrder};

/// Error type for catalog operations.
///
/// "Not found" is representable in every query and selection return type,
/// so only the by-name cost operations can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A supplied short name has no matching registry entry.
    #[error("unknown model: {model}")]
    UnknownModel { model: String },
}

pub type Result<T> = std::result::Result<T, Error>;
