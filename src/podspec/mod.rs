//! CocoaPods spec (`tealium-swift.podspec`) edits.
//!
//! This module provides the podspec side of registering a module:
//!
//! - **`file_list`**: Globs on the aggregate `full` subspec
//! - **`subspec`**: The module's own subspec
//! - **`version`**: The library version
//!
//! Edits are anchored line rewrites that leave the rest of the file
//! byte-for-byte intact.

pub mod file_list;
pub mod subspec;
pub mod version;

pub use file_list::{add_to_full_source_files, deployment_target_lines, exclude_from_platforms};
pub use subspec::insert_subspec;
pub use version::update_version;
