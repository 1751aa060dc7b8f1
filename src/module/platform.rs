//! Apple platforms a module can target.

use crate::error::{ModuleError, Result};
use std::fmt;
use std::str::FromStr;

/// A platform declared in the podspec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    WatchOs,
    Osx,
    TvOs,
}

impl Platform {
    /// All platforms in the order the podspec declares them.
    pub const ALL: [Platform; 4] = [
        Platform::Ios,
        Platform::WatchOs,
        Platform::Osx,
        Platform::TvOs,
    ];

    /// Identifier used in podspec attributes (`full.<id>.exclude_files`).
    pub fn id(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::WatchOs => "watchos",
            Platform::Osx => "osx",
            Platform::TvOs => "tvos",
        }
    }

    /// Minimum OS version a module subspec declares for this platform.
    pub fn deployment_target(self) -> &'static str {
        match self {
            Platform::Ios => "9.0",
            Platform::WatchOs => "3.0",
            Platform::Osx => "10.11",
            Platform::TvOs => "9.0",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ModuleError::UnknownPlatform(s.to_string()))
    }
}

/// Parses a comma-separated platform list such as `"tvos,osx"`.
///
/// Entries are trimmed and empty entries ignored. Unknown or repeated
/// platforms are rejected.
pub fn parse_platform_list(list: &str) -> Result<Vec<Platform>> {
    let mut platforms = Vec::new();

    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let platform: Platform = entry.parse()?;
        if platforms.contains(&platform) {
            return Err(ModuleError::DuplicatePlatform(entry.to_string()));
        }
        platforms.push(platform);
    }

    Ok(platforms)
}
