//! End-to-end workflows driven by the command line.

pub mod add_module;

pub use add_module::{AddModuleArgs, Plan, execute};
