//! File system operations with transaction support.
//!
//! Provides staged file rewrites that are committed or rolled back as a unit.

pub mod transaction;

pub use transaction::{FileUpdate, Transaction};
