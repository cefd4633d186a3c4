//! Provider facade - override-aware resource access for one namespace.

use crate::error::Result;
use crate::overlay::set::OverrideSet;
use overscope_api::{Candidate, ResourceBackend};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Override-aware access to one namespace's resources.
///
/// Built by [`OverrideRegistry::provider_for`]; holds the namespace's
/// shared override chain, so overrides registered after the bind are
/// visible to later calls.
///
/// [`OverrideRegistry::provider_for`]: crate::overlay::registry::OverrideRegistry::provider_for
pub struct OverrideProvider {
    namespace: String,
    overrides: Arc<OverrideSet>,
    backend: Arc<dyn ResourceBackend>,
}

impl std::fmt::Debug for OverrideProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideProvider")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl OverrideProvider {
    pub(crate) fn new(overrides: Arc<OverrideSet>, backend: Arc<dyn ResourceBackend>) -> Self {
        Self {
            namespace: overrides.owner().to_string(),
            overrides,
            backend,
        }
    }

    /// The namespace this provider serves.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolve a resource name to the candidate every terminal operation
    /// acts on.
    ///
    /// Walks the override chain and takes the first candidate the backend
    /// confirms exists; with no surviving candidate the un-overridden
    /// identity is returned. One routine serves filename, stream, and
    /// string access so all three share precedence semantics exactly.
    fn resolve(&self, resource_name: &str) -> Candidate {
        for candidate in self.overrides.search_path(resource_name) {
            if self.backend.exists(&candidate.namespace, &candidate.path) {
                debug!(
                    "{}:{} overridden by {}:{}",
                    self.namespace, resource_name, candidate.namespace, candidate.path
                );
                return candidate;
            }
        }
        Candidate::new(self.namespace.clone(), resource_name.to_string())
    }

    /// Concrete filesystem path for the resource, override-aware.
    pub fn resource_filename(&self, resource_name: &str) -> Result<PathBuf> {
        let chosen = self.resolve(resource_name);
        self.backend
            .resolve_filename(&chosen.namespace, &chosen.path)
            .map_err(Into::into)
    }

    /// Open the resource for streaming reads, override-aware.
    pub fn resource_stream(&self, resource_name: &str) -> Result<Box<dyn Read + Send>> {
        let chosen = self.resolve(resource_name);
        self.backend
            .open_stream(&chosen.namespace, &chosen.path)
            .map_err(Into::into)
    }

    /// Whole resource content as a UTF-8 string, override-aware.
    pub fn resource_string(&self, resource_name: &str) -> Result<String> {
        let chosen = self.resolve(resource_name);
        self.backend
            .read_string(&chosen.namespace, &chosen.path)
            .map_err(Into::into)
    }

    /// Whether the resource (or its override target) exists.
    pub fn has_resource(&self, resource_name: &str) -> bool {
        let chosen = self.resolve(resource_name);
        self.backend.exists(&chosen.namespace, &chosen.path)
    }

    /// Whether the resource (or its override target) is a directory.
    pub fn resource_is_dir(&self, resource_name: &str) -> bool {
        let chosen = self.resolve(resource_name);
        self.backend.is_directory(&chosen.namespace, &chosen.path)
    }
}
