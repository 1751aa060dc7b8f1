//! Fixed layout of the `tealium-swift` repository.
//!
//! Every module lives under [`SOURCE_ROOT`] and depends on the core module,
//! which is published as the [`CORE_TARGET`] SwiftPM target and the
//! [`CORE_SUBSPEC`] pod subspec.

/// Directory holding one sub-directory per module.
pub const SOURCE_ROOT: &str = "tealium";

/// SwiftPM target every module depends on.
pub const CORE_TARGET: &str = "TealiumCore";

/// `path:` argument of the core target in `Package.swift`.
pub const CORE_PATH: &str = "tealium/core/";

/// Subspec every module subspec depends on.
pub const CORE_SUBSPEC: &str = "tealium-swift/Core";

/// Aggregate subspec variable whose file lists collect every module.
pub const FULL_SUBSPEC_VAR: &str = "full";

pub const DEFAULT_PODSPEC: &str = "tealium-swift.podspec";
pub const DEFAULT_PACKAGE_MANIFEST: &str = "Package.swift";
