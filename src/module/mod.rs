//! Description of the module being added.

pub mod descriptor;
pub mod platform;

pub use descriptor::ModuleDescriptor;
pub use platform::{Platform, parse_platform_list};
