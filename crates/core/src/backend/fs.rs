//! Directory-tree resource backend.

use crate::error::{OverlayError, Result};
use overscope_api::{BoxError, ResourceBackend};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::RwLock;

/// Serves each namespace's resources from a mounted root directory.
///
/// Resource names are joined onto the namespace's root; a namespace with no
/// mount surfaces as a backend error on the path-producing operations and
/// as plain absence on the probing ones.
pub struct FsBackend {
    roots: RwLock<HashMap<String, PathBuf>>,
}

impl FsBackend {
    pub fn new() -> Self {
        Self {
            roots: RwLock::new(HashMap::new()),
        }
    }

    /// Mount `root` as the resource tree for `namespace`.
    ///
    /// Remounting a namespace replaces its previous root.
    pub fn mount(&self, namespace: &str, root: impl Into<PathBuf>) {
        let mut roots = self.roots.write().unwrap();
        roots.insert(namespace.to_string(), root.into());
    }

    fn full_path(&self, namespace: &str, path: &str) -> Result<PathBuf> {
        let roots = self.roots.read().unwrap();
        let root = roots
            .get(namespace)
            .ok_or_else(|| OverlayError::UnknownNamespace(namespace.to_string()))?;
        Ok(root.join(path))
    }
}

impl Default for FsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceBackend for FsBackend {
    fn exists(&self, namespace: &str, path: &str) -> bool {
        self.full_path(namespace, path)
            .map(|full| full.exists())
            .unwrap_or(false)
    }

    fn is_directory(&self, namespace: &str, path: &str) -> bool {
        self.full_path(namespace, path)
            .map(|full| full.is_dir())
            .unwrap_or(false)
    }

    fn resolve_filename(
        &self,
        namespace: &str,
        path: &str,
    ) -> std::result::Result<PathBuf, BoxError> {
        Ok(self.full_path(namespace, path)?)
    }

    fn open_stream(
        &self,
        namespace: &str,
        path: &str,
    ) -> std::result::Result<Box<dyn Read + Send>, BoxError> {
        let full = self.full_path(namespace, path)?;
        let file = File::open(full).map_err(OverlayError::Io)?;
        Ok(Box::new(file))
    }

    fn read_string(&self, namespace: &str, path: &str) -> std::result::Result<String, BoxError> {
        let full = self.full_path(namespace, path)?;
        Ok(std::fs::read_to_string(full).map_err(OverlayError::Io)?)
    }
}
