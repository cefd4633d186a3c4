//! Per-namespace ordered override chains.

use crate::overlay::rule::OverrideRule;
use overscope_api::Candidate;
use std::collections::VecDeque;
use std::sync::RwLock;

/// Ordered override rule chain for one owning namespace.
///
/// New rules are prepended, so for any name two rules both match, the most
/// recently registered one is tried first. The set is created once per
/// namespace and lives in the registry; `insert` is the only mutation.
pub struct OverrideSet {
    owner: String,
    rules: RwLock<VecDeque<OverrideRule>>,
}

impl OverrideSet {
    pub fn new(owner: String) -> Self {
        Self {
            owner,
            rules: RwLock::new(VecDeque::new()),
        }
    }

    /// The namespace whose lookups this set redirects.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Register an override rule.
    ///
    /// A `source_name` with a trailing `/` registers a directory rule,
    /// anything else a file rule. The new rule lands at the front of the
    /// chain.
    pub fn insert(&self, source_name: &str, target_namespace: &str, target_name: &str) {
        let rule = if source_name.ends_with('/') {
            OverrideRule::Directory {
                source_prefix: source_name.to_string(),
                target_namespace: target_namespace.to_string(),
                target_prefix: target_name.to_string(),
            }
        } else {
            OverrideRule::File {
                source: source_name.to_string(),
                target_namespace: target_namespace.to_string(),
                target_path: target_name.to_string(),
            }
        };

        let mut rules = self.rules.write().unwrap();
        rules.push_front(rule);
    }

    /// Lazy candidate sequence for `resource_name`, in current chain order.
    ///
    /// Matching happens on demand as the iterator is pulled, so a caller
    /// that stops at the first usable candidate never evaluates the rest of
    /// the chain. The chain is snapshotted under the read lock; an insert
    /// racing with an in-flight traversal affects future calls only.
    pub fn search_path(&self, resource_name: &str) -> SearchPath {
        let rules = self.rules.read().unwrap().iter().cloned().collect();
        SearchPath {
            rules,
            name: resource_name.to_string(),
            next: 0,
        }
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().unwrap().is_empty()
    }

    /// Snapshot of the rule chain (for serialization and statistics).
    pub fn rules(&self) -> Vec<OverrideRule> {
        self.rules.read().unwrap().iter().cloned().collect()
    }
}

/// Iterator over the override candidates for one resource name.
///
/// Finite and not restartable; yields every matching rule's candidate,
/// skipping non-matches.
pub struct SearchPath {
    rules: Vec<OverrideRule>,
    name: String,
    next: usize,
}

impl Iterator for SearchPath {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.next < self.rules.len() {
            let rule = &self.rules[self.next];
            self.next += 1;
            if let Some(candidate) = rule.resolve(&self.name) {
                return Some(candidate);
            }
        }
        None
    }
}
