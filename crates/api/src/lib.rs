//! Boundary contracts for the overscope resource overlay.
//!
//! This crate defines the seam between the override resolver core and
//! whatever physically stores resource bytes:
//! - [`Candidate`] - a concrete (namespace, path) pair produced by matching
//! - [`ResourceBackend`] - the capability that reads bytes and paths for a
//!   candidate
//!
//! Concrete backends live in their consuming crates; the core ships a
//! directory-tree backend in `overscope-core::backend`.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;

/// Error type for backend operations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ==================== Model ====================

/// A concrete (namespace, path) pair produced by override matching.
///
/// Candidates are transient: they are yielded by the match chain, probed
/// against a backend, and discarded. Nothing persists them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub namespace: String,
    pub path: String,
}

impl Candidate {
    pub fn new(namespace: String, path: String) -> Self {
        Self { namespace, path }
    }
}

// ==================== Backend capability ====================

/// Physical-resource backend - resolves paths and reads bytes for a
/// concrete (namespace, path) pair.
///
/// The resolver core treats this as an opaque synchronous capability: it
/// probes `exists` while walking override candidates and hands the chosen
/// candidate to exactly one terminal operation. Backend failures are
/// surfaced to the caller unmodified.
pub trait ResourceBackend: Send + Sync {
    /// Whether the resource is present in the backend.
    fn exists(&self, namespace: &str, path: &str) -> bool;

    /// Whether the resource names a directory rather than a file.
    fn is_directory(&self, namespace: &str, path: &str) -> bool;

    /// Concrete filesystem path for the resource.
    fn resolve_filename(&self, namespace: &str, path: &str) -> Result<PathBuf, BoxError>;

    /// Open the resource for streaming reads.
    fn open_stream(&self, namespace: &str, path: &str) -> Result<Box<dyn Read + Send>, BoxError>;

    /// Read the whole resource as a UTF-8 string.
    fn read_string(&self, namespace: &str, path: &str) -> Result<String, BoxError>;
}
