//! Registry construction and lookup.
//!
//! A [`Registry`] is built once by unioning provider-scoped tables and is
//! read-only afterwards, so it can be shared across threads without
//! synchronization. Iteration order is construction order, which makes
//! every "first match wins" rule in the crate deterministic.

use std::collections::HashMap;

use crate::capabilities::{Capabilities, CapabilityFlag};
use crate::catalog;
use crate::entry::{ModelEntry, Provider};

/// Insertion-ordered model table keyed by short name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<ModelEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union provider tables in the given order.
    ///
    /// This is the explicit construction path: callers own the resulting
    /// registry, and test suites can build small synthetic ones instead of
    /// depending on the full builtin dataset.
    pub fn from_tables(tables: impl IntoIterator<Item = Vec<ModelEntry>>) -> Self {
        let mut registry = Self::new();
        for table in tables {
            for entry in table {
                registry.insert(entry);
            }
        }
        registry
    }

    /// The builtin production dataset.
    pub fn builtin() -> Self {
        Self::from_tables(catalog::tables())
    }

    /// Insert one entry, keeping construction order.
    ///
    /// A duplicate short name is a construction-time defect in the source
    /// tables: the later entry replaces the earlier one in place and a
    /// warning is logged.
    pub fn insert(&mut self, entry: ModelEntry) {
        debug_assert!(
            (0.0..=1.0).contains(&entry.capabilities.cache_discount_factor),
            "cache discount factor out of [0,1] for {}",
            entry.name
        );
        debug_assert!(entry.input_price >= 0.0 && entry.output_price >= 0.0);
        debug_assert!(entry.context_window > 0 && entry.max_output_tokens > 0);

        if let Some(&position) = self.index.get(&entry.name) {
            tracing::warn!(
                name = %entry.name,
                "duplicate model key across provider tables, replacing earlier entry"
            );
            self.entries[position] = entry;
        } else {
            self.index.insert(entry.name.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter()
    }

    /// Exact short-name lookup. O(1).
    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// First entry whose `full_name` matches, in construction order.
    ///
    /// Multiple entries may legitimately share a `full_name` (a thinking
    /// variant and its base model); callers needing a specific variant
    /// must use [`Registry::get`].
    pub fn resolve(&self, full_name: &str) -> Option<&ModelEntry> {
        let mut matches = self.entries.iter().filter(|e| e.full_name == full_name);
        let first = matches.next()?;
        if matches.next().is_some() {
            tracing::debug!(
                full_name,
                resolved = %first.name,
                "full name shared by several entries, returning first by construction order"
            );
        }
        Some(first)
    }

    pub fn from_provider(&self, provider: Provider) -> Vec<&ModelEntry> {
        self.entries.iter().filter(|e| e.provider == provider).collect()
    }

    /// Entries whose capabilities satisfy the predicate.
    pub fn filter(&self, predicate: impl Fn(&Capabilities) -> bool) -> Vec<&ModelEntry> {
        self.entries
            .iter()
            .filter(|e| predicate(&e.capabilities))
            .collect()
    }

    /// Entries with the given capability flag set.
    pub fn supporting(&self, flag: CapabilityFlag) -> Vec<&ModelEntry> {
        self.filter(|caps| flag.enabled(caps))
    }

    pub fn with_context(&self, min_tokens: u64) -> Vec<&ModelEntry> {
        self.entries
            .iter()
            .filter(|e| e.context_window >= min_tokens)
            .collect()
    }

    /// Entries reachable through the originating provider's own API.
    pub fn direct_access(&self) -> Vec<&ModelEntry> {
        self.entries.iter().filter(|e| !e.open_router_only).collect()
    }

    /// Entries reachable only through the OpenRouter aggregator.
    pub fn open_router_only(&self) -> Vec<&ModelEntry> {
        self.entries.iter().filter(|e| e.open_router_only).collect()
    }

    /// Entries not marked deprecated.
    pub fn active(&self) -> Vec<&ModelEntry> {
        self.entries.iter().filter(|e| !e.deprecated).collect()
    }
}
