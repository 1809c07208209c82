//! Alms - donation record keeping over pluggable ledger backends
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export the store crate for convenience
pub use alms_store as store;
