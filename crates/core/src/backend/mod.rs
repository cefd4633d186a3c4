//! Concrete [`ResourceBackend`](overscope_api::ResourceBackend) implementations.

pub mod fs;

pub use fs::FsBackend;
