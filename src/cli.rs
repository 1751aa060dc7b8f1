use crate::steps::AddModuleArgs;
use clap::Parser;

/// Register a new tealium-swift module in the podspec and Package.swift.
///
/// Run from the repository root. Both names are required to add a module;
/// --version may be used on its own.
#[derive(Parser, Debug)]
#[command(name = "new-module", disable_version_flag = true)]
pub struct NewModuleCli {
    #[command(flatten)]
    pub args: AddModuleArgs,
}
