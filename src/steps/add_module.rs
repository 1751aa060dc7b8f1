//! Orchestration logic for registering a module.
//!
//! All file modifications go through a `Transaction` for atomicity.

use crate::error::{ModuleError, Result};
use crate::fs::transaction::Transaction;
use crate::layout::{DEFAULT_PACKAGE_MANIFEST, DEFAULT_PODSPEC};
use crate::module::ModuleDescriptor;
use crate::package::{add_library_product, add_target};
use crate::podspec::{
    add_to_full_source_files, exclude_from_platforms, insert_subspec, update_version,
};
use crate::verify::preflight_checks;

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for registering a module and/or bumping the version.
#[derive(Parser, Debug, Clone)]
pub struct AddModuleArgs {
    /// New library version (MAJOR.MINOR.PATCH)
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Full module name, used for the product and target (e.g. TealiumAnalytics)
    #[arg(
        short = 'f',
        long = "full_name",
        visible_alias = "full-name",
        value_name = "NAME"
    )]
    pub full_name: Option<String>,

    /// Short, lowercase module name, used in paths (e.g. analytics)
    #[arg(
        short = 's',
        long = "short_name",
        visible_alias = "short-name",
        value_name = "NAME"
    )]
    pub short_name: Option<String>,

    /// Comma-separated platforms the module does not support
    ///
    /// Any of: ios, watchos, osx, tvos.
    #[arg(
        short = 'e',
        long = "excluded_platforms",
        visible_alias = "excluded-platforms",
        value_name = "LIST"
    )]
    pub excluded_platforms: Option<String>,

    /// Print the parsed arguments, log verbosely and run the module steps twice
    #[arg(long)]
    pub debug: bool,

    /// Path to the podspec
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PODSPEC)]
    pub podspec: PathBuf,

    /// Path to the Swift package manifest
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PACKAGE_MANIFEST)]
    pub package_manifest: PathBuf,
}

/// What a run will do, derived from validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub module: Option<ModuleDescriptor>,
    pub version: Option<String>,
}

impl Plan {
    /// Returns `true` if neither a module nor a version was requested.
    pub fn is_empty(&self) -> bool {
        self.module.is_none() && self.version.is_none()
    }
}

/// Registers a module and/or bumps the version.
///
/// ## Phases
///
/// 1. Pre-flight checks (flag combinations, platforms, version, files)
/// 2. Stage edits in a transaction: package manifest, podspec file lists,
///    subspec, version, and with `--debug` the module edits once more
/// 3. Commit atomically
/// 4. Print summary
pub fn execute(args: AddModuleArgs) -> Result<()> {
    if args.debug {
        println!("{:#?}", args);
    }

    let plan = preflight_checks(&args)?;

    if plan.is_empty() {
        println!(
            "{}",
            concat!(
                "No changes requested: pass --full_name and --short_name to add a module, ",
                "or --version to set the version."
            )
            .yellow()
        );
        return Ok(());
    }

    let mut txn = Transaction::new();

    if let Err(e) = stage_operations(&args, &plan, &mut txn) {
        return handle_staging_error(e);
    }

    if let Err(e) = txn.commit() {
        return handle_commit_error(e);
    }

    txn.print_summary();

    if let Some(module) = &plan.module {
        println!(
            "\n{} {} ({})",
            "✓ Added module".green().bold(),
            module.full_name.green().bold(),
            module.source_path().yellow()
        );
    }
    if let Some(version) = &plan.version {
        println!("{} {}", "✓ Version set to".green().bold(), version.green().bold());
    }

    Ok(())
}

fn stage_operations(args: &AddModuleArgs, plan: &Plan, txn: &mut Transaction) -> Result<()> {
    if let Some(module) = &plan.module {
        stage_module(module, &args.podspec, &args.package_manifest, txn)?;
    }

    if let Some(version) = &plan.version {
        log::info!("Setting version {} in {}", version, args.podspec.display());
        update_version(&args.podspec, version, txn)?;
    }

    if args.debug {
        if let Some(module) = &plan.module {
            log::debug!("Debug run: staging module edits a second time");
            stage_module(module, &args.podspec, &args.package_manifest, txn)?;
        }
    }

    log::debug!("Staged updates to {} file(s)", txn.len());
    Ok(())
}

/// Stages every edit needed to register `module`.
///
/// Order: library product, target, full file list, platform exclusions,
/// subspec. The subspec consumes the deployment targets produced by the
/// exclusion step.
pub fn stage_module(
    module: &ModuleDescriptor,
    podspec: &Path,
    package_manifest: &Path,
    txn: &mut Transaction,
) -> Result<()> {
    log::info!("Updating {}", package_manifest.display());
    add_library_product(package_manifest, module, txn)?;
    add_target(package_manifest, module, txn)?;

    log::info!("Updating {}", podspec.display());
    add_to_full_source_files(podspec, module, txn)?;

    let deployment_targets = if module.has_exclusions() {
        exclude_from_platforms(podspec, module, txn)?
    } else {
        Vec::new()
    };

    insert_subspec(podspec, module, &deployment_targets, txn)
}

fn handle_staging_error(e: ModuleError) -> Result<()> {
    eprintln!("{} {}", "Error while preparing edits:".red().bold(), e);
    eprintln!("{} No changes were written.", "ℹ".blue().bold());

    Err(e)
}

fn handle_commit_error(e: ModuleError) -> Result<()> {
    eprintln!("{} {}", "Error during commit:".red().bold(), e);

    if matches!(e, ModuleError::RollbackFailed(_)) {
        eprintln!(
            "{}",
            "⚠ Manual intervention may be required.".yellow().bold()
        );
        eprintln!("Hint: Check your version control system.");
    } else {
        eprintln!("{} Files written before the failure were restored.", "ℹ".blue().bold());
    }

    Err(e)
}
