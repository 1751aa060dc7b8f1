//! Validation rules for command-line values.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{ModuleError, Result};
use crate::podspec::version::VERSION_TRIPLE;
use regex::Regex;

/// Validates a library version.
///
/// ## Rules
/// - Exactly `MAJOR.MINOR.PATCH`, each part one or more ASCII digits
pub fn validate_version(version: &str) -> Result<()> {
    let pattern = Regex::new(&format!("^{}$", VERSION_TRIPLE))?;

    if !pattern.is_match(version) {
        return Err(ModuleError::InvalidVersion(version.to_string()));
    }

    Ok(())
}

/// Rejects empty or whitespace-only flag values.
pub fn require_value(flag: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModuleError::Usage(format!("{} cannot be empty", flag)));
    }
    Ok(())
}
