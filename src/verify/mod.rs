//! Validation of the command line before any file is touched.

pub mod preflight;
pub mod rules;

pub use preflight::preflight_checks;
pub use rules::{require_value, validate_version};
