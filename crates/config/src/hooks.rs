//! Hook list loading
//!
//! Hooks are stored as a multi-valued git config key per hook type:
//!
//! ```text
//! [hook-mux]
//!     pre-commit = cargo fmt --check
//!     pre-commit = <self> --section=lint
//!     verbose = true
//! ```
//!
//! The list is read fresh on every invocation and never cached.

use crate::git::ConfigStore;
use hook_mux_core::{HookCommand, HookType, Section};

/// Config key holding the verbosity flag
pub const VERBOSE_KEY: &str = "verbose";

/// Loads the configured commands for one section
pub struct HookLoader<'a> {
    store: &'a dyn ConfigStore,
    section: &'a Section,
}

impl<'a> HookLoader<'a> {
    /// Create a loader reading `section` from `store`
    pub fn new(store: &'a dyn ConfigStore, section: &'a Section) -> Self {
        Self { store, section }
    }

    /// Ordered list of commands registered for `hook_type`
    ///
    /// Multi-line values are split into one command per line, and blank
    /// entries are dropped. Config order is preserved since later hooks
    /// only run if earlier ones succeed.
    #[tracing::instrument(skip(self), fields(section = %self.section))]
    pub fn load(&self, hook_type: &HookType) -> Vec<HookCommand> {
        let hooks: Vec<HookCommand> = self
            .store
            .get_all(self.section, hook_type.as_str())
            .iter()
            .flat_map(|value| value.lines())
            .filter_map(HookCommand::parse)
            .collect();

        tracing::debug!(count = hooks.len(), "Loaded hooks");
        hooks
    }

    /// Whether `<section>.verbose` is enabled
    pub fn verbose(&self) -> bool {
        self.store.get_bool(self.section, VERBOSE_KEY)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::collections::HashMap;

    /// In-memory config store keyed by `<section>.<key>`
    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, Vec<String>>,
    }

    impl MemoryStore {
        fn add(mut self, key: &str, value: &str) -> Self {
            self.values
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
            self
        }
    }

    impl ConfigStore for MemoryStore {
        fn get_all(&self, section: &Section, key: &str) -> Vec<String> {
            self.values
                .get(&section.key(key))
                .cloned()
                .unwrap_or_default()
        }

        fn get_bool(&self, section: &Section, key: &str) -> bool {
            self.values
                .get(&section.key(key))
                .and_then(|values| values.last())
                .is_some_and(|value| value == "true")
        }
    }

    fn pre_commit() -> HookType {
        HookType::new("pre-commit").unwrap()
    }

    #[test]
    fn test_load_no_hooks() {
        let store = MemoryStore::default();
        let section = Section::default();
        let loader = HookLoader::new(&store, &section);

        assert!(loader.load(&pre_commit()).is_empty());
    }

    #[test]
    fn test_load_filters_blank_entries() {
        let store = MemoryStore::default()
            .add("hook-mux.pre-commit", "")
            .add("hook-mux.pre-commit", "true")
            .add("hook-mux.pre-commit", "  ")
            .add("hook-mux.pre-commit", "\t")
            .add("hook-mux.pre-commit", "false");
        let section = Section::default();
        let loader = HookLoader::new(&store, &section);

        let hooks = loader.load(&pre_commit());
        let hooks: Vec<&str> = hooks.iter().map(HookCommand::as_str).collect();
        assert_eq!(hooks, vec!["true", "false"]);
    }

    #[test]
    fn test_load_splits_multiline_values() {
        let store = MemoryStore::default()
            .add("hook-mux.pre-commit", "first\n\nsecond\n")
            .add("hook-mux.pre-commit", "third");
        let section = Section::default();
        let loader = HookLoader::new(&store, &section);

        let hooks = loader.load(&pre_commit());
        let hooks: Vec<&str> = hooks.iter().map(HookCommand::as_str).collect();
        assert_eq!(hooks, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_load_uses_section_and_hook_type() {
        let store = MemoryStore::default()
            .add("hook-mux.pre-commit", "default")
            .add("custom.pre-commit", "custom")
            .add("custom.post-merge", "merge");
        let section = Section::new("custom").unwrap();
        let loader = HookLoader::new(&store, &section);

        let hooks = loader.load(&pre_commit());
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].as_str(), "custom");
    }

    #[test]
    fn test_verbose() {
        let store = MemoryStore::default().add("loud.verbose", "true");
        let loud = Section::new("loud").unwrap();
        let quiet = Section::default();

        assert!(HookLoader::new(&store, &loud).verbose());
        assert!(!HookLoader::new(&store, &quiet).verbose());
    }
}
