//! The module being registered.

use super::platform::Platform;
use crate::layout::SOURCE_ROOT;

/// Names and platform support of a new module.
///
/// Built once from the command line and threaded through every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Capitalized product and target name, e.g. `TealiumAnalytics`.
    pub full_name: String,
    /// Lowercase identifier used in paths, e.g. `analytics`.
    pub short_name: String,
    /// Platforms the module does not support.
    pub excluded: Vec<Platform>,
}

impl ModuleDescriptor {
    pub fn new(
        full_name: impl Into<String>,
        short_name: impl Into<String>,
        excluded: Vec<Platform>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
            excluded,
        }
    }

    /// Module source directory relative to the repository root, with a
    /// trailing slash (`tealium/analytics/`).
    pub fn source_path(&self) -> String {
        format!("{}/{}/", SOURCE_ROOT, self.short_name)
    }

    /// Glob matching the module's sources (`tealium/analytics/*`).
    pub fn source_glob(&self) -> String {
        format!("{}*", self.source_path())
    }

    /// Supported platforms, in podspec order.
    pub fn included_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| !self.excluded.contains(p))
            .collect()
    }

    pub fn has_exclusions(&self) -> bool {
        !self.excluded.is_empty()
    }
}
