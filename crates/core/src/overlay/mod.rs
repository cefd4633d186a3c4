//! Override resolution layer - redirects package-scoped resource lookups.
//!
//! A consumer asks for resource `R` in namespace `N` and transparently
//! receives content from a different (namespace, path) when an override
//! rule has been registered for it:
//!
//! ```text
//! ┌──────────────────────┐     ┌───────────────────────┐
//! │   OverrideRegistry   │────▶│   OverrideSet (per    │
//! │   (namespace → set)  │     │   namespace, ordered  │
//! └──────────┬───────────┘     │   rule chain)         │
//!            │                 └───────────┬───────────┘
//!            ▼                             │ search_path
//! ┌──────────────────────┐                 ▼
//! │   OverrideProvider   │     lazy Candidate sequence,
//! │   (probe + fallback) │◀─── newest registration first
//! └──────────────────────┘
//! ```
//!
//! The provider probes each candidate against a [`ResourceBackend`] and the
//! first one that exists wins; with no surviving candidate the original
//! (namespace, path) is used unchanged.
//!
//! [`ResourceBackend`]: overscope_api::ResourceBackend

pub mod provider;
pub mod registry;
pub mod rule;
pub mod set;

pub use provider::OverrideProvider;
pub use registry::{OverlayStats, OverrideRegistry};
pub use rule::OverrideRule;
pub use set::{OverrideSet, SearchPath};
