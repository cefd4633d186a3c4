//! Process-wide namespace → override-set store.
//!
//! The registry is an explicitly constructed object handed to whatever code
//! registers overrides or binds providers; there is no ambient global. Test
//! code gets isolation from per-test registries plus [`OverrideRegistry::reset`].

use crate::error::{OverlayError, Result};
use crate::overlay::provider::OverrideProvider;
use crate::overlay::rule::OverrideRule;
use crate::overlay::set::OverrideSet;
use overscope_api::ResourceBackend;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Thread-safe store mapping each owning namespace to its [`OverrideSet`].
///
/// Entries are created lazily on first registration and never removed
/// during normal operation; re-registration augments the existing set.
pub struct OverrideRegistry {
    sets: RwLock<HashMap<String, Arc<OverrideSet>>>,
    /// Namespaces that already have a provider bound to them.
    bound: RwLock<HashSet<String>>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self {
            sets: RwLock::new(HashMap::new()),
            bound: RwLock::new(HashSet::new()),
        }
    }

    /// Get or lazily create the override set owning `namespace`.
    ///
    /// Exactly one set exists per namespace at any time; every caller gets
    /// the same chain.
    pub fn override_set(&self, namespace: &str) -> Arc<OverrideSet> {
        let mut sets = self.sets.write().unwrap();
        sets.entry(namespace.to_string())
            .or_insert_with(|| Arc::new(OverrideSet::new(namespace.to_string())))
            .clone()
    }

    /// Registration entry point for configuration code.
    ///
    /// Lookups for `source_name` in `owner` will be redirected to
    /// `(target_namespace, target_name)`; a trailing `/` on `source_name`
    /// redirects the whole subtree.
    pub fn register_override(
        &self,
        owner: &str,
        source_name: &str,
        target_namespace: &str,
        target_name: &str,
    ) {
        self.override_set(owner)
            .insert(source_name, target_namespace, target_name);
    }

    /// The override set registered for `namespace`, if any.
    pub fn lookup(&self, namespace: &str) -> Option<Arc<OverrideSet>> {
        self.sets.read().unwrap().get(namespace).cloned()
    }

    /// Bind a provider facade for `namespace` over `backend`.
    ///
    /// Binding a namespace that already has a provider is a programmer
    /// error (double installation) and fails with
    /// [`OverlayError::Conflict`] without touching the existing set.
    pub fn provider_for(
        &self,
        namespace: &str,
        backend: Arc<dyn ResourceBackend>,
    ) -> Result<OverrideProvider> {
        {
            let mut bound = self.bound.write().unwrap();
            if !bound.insert(namespace.to_string()) {
                return Err(OverlayError::Conflict(namespace.to_string()));
            }
        }
        Ok(OverrideProvider::new(self.override_set(namespace), backend))
    }

    /// Clear all sets and provider bindings.
    ///
    /// Test-harness support; the one exception to "entries are never
    /// removed".
    pub fn reset(&self) {
        self.sets.write().unwrap().clear();
        self.bound.write().unwrap().clear();
    }

    /// Snapshot of every registered chain (for serialization).
    pub fn all_overrides(&self) -> HashMap<String, Vec<OverrideRule>> {
        let sets = self.sets.read().unwrap();
        sets.iter()
            .map(|(namespace, set)| (namespace.clone(), set.rules()))
            .collect()
    }

    /// Get statistics
    pub fn stats(&self) -> OverlayStats {
        let sets = self.sets.read().unwrap();

        let mut total_rules = 0;
        let mut by_kind: HashMap<String, usize> = HashMap::new();

        for set in sets.values() {
            for rule in set.rules() {
                total_rules += 1;
                *by_kind.entry(rule.kind().to_string()).or_default() += 1;
            }
        }

        OverlayStats {
            total_namespaces: sets.len(),
            total_rules,
            by_kind,
        }
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry statistics
#[derive(Debug, Default, Clone)]
pub struct OverlayStats {
    pub total_namespaces: usize,
    pub total_rules: usize,
    pub by_kind: HashMap<String, usize>, // e.g. {"file": 12, "directory": 3}
}

#[cfg(test)]
mod tests {
    use super::*;
    use overscope_api::BoxError;
    use std::io::Read;
    use std::path::PathBuf;
    use std::result::Result;

    struct NullBackend;

    impl ResourceBackend for NullBackend {
        fn exists(&self, _namespace: &str, _path: &str) -> bool {
            false
        }

        fn is_directory(&self, _namespace: &str, _path: &str) -> bool {
            false
        }

        fn resolve_filename(&self, _namespace: &str, path: &str) -> Result<PathBuf, BoxError> {
            Ok(PathBuf::from(path))
        }

        fn open_stream(
            &self,
            _namespace: &str,
            _path: &str,
        ) -> Result<Box<dyn Read + Send>, BoxError> {
            Ok(Box::new(std::io::empty()))
        }

        fn read_string(&self, _namespace: &str, _path: &str) -> Result<String, BoxError> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_lookup_before_registration() {
        let registry = OverrideRegistry::new();
        assert!(registry.lookup("package").is_none());
    }

    #[test]
    fn test_reregistration_augments_existing_set() {
        let registry = OverrideRegistry::new();
        registry.register_override("package", "foo.pt", "other", "bar.pt");
        let first = registry.lookup("package").unwrap();

        registry.register_override("package", "baz.pt", "other", "qux.pt");
        let second = registry.lookup("package").unwrap();

        // Same set, grown in place - never silently replaced
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_second_provider_is_conflict() {
        let registry = OverrideRegistry::new();
        registry.register_override("package", "foo.pt", "other", "bar.pt");

        let _provider = registry
            .provider_for("package", Arc::new(NullBackend))
            .unwrap();

        let err = registry
            .provider_for("package", Arc::new(NullBackend))
            .unwrap_err();
        assert!(matches!(err, OverlayError::Conflict(ns) if ns == "package"));

        // The failed bind must not have touched the chain
        assert_eq!(registry.lookup("package").unwrap().len(), 1);
    }

    #[test]
    fn test_reset_clears_sets_and_bindings() {
        let registry = OverrideRegistry::new();
        registry.register_override("package", "foo.pt", "other", "bar.pt");
        let _provider = registry
            .provider_for("package", Arc::new(NullBackend))
            .unwrap();

        registry.reset();

        assert!(registry.lookup("package").is_none());
        // Binding works again after a reset
        assert!(registry.provider_for("package", Arc::new(NullBackend)).is_ok());
    }

    #[test]
    fn test_stats() {
        let registry = OverrideRegistry::new();
        registry.register_override("pkg.a", "foo.pt", "other", "bar.pt");
        registry.register_override("pkg.a", "templates/", "other", "skins/");
        registry.register_override("pkg.b", "baz.pt", "other", "qux.pt");

        let stats = registry.stats();
        assert_eq!(stats.total_namespaces, 2);
        assert_eq!(stats.total_rules, 3);
        assert_eq!(stats.by_kind.get("file"), Some(&2));
        assert_eq!(stats.by_kind.get("directory"), Some(&1));
    }

    #[test]
    fn test_all_overrides_snapshot() {
        let registry = OverrideRegistry::new();
        registry.register_override("package", "foo.pt", "other", "bar.pt");

        let snapshot = registry.all_overrides();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("package").unwrap().len(), 1);
    }
}
