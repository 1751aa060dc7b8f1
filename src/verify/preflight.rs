//! Pre-flight checks run before anything is staged.

use super::rules::{require_value, validate_version};
use crate::error::{ModuleError, Result};
use crate::module::{ModuleDescriptor, parse_platform_list};
use crate::steps::add_module::{AddModuleArgs, Plan};
use std::path::Path;

/// Turns the command line into a [`Plan`].
///
/// ## Checks
/// - `--full_name` and `--short_name` are given together
/// - `--excluded_platforms` and `--debug` come with both names
/// - Excluded platforms are known and not repeated
/// - `--version` is `MAJOR.MINOR.PATCH`
/// - Every file the plan touches exists
pub fn preflight_checks(args: &AddModuleArgs) -> Result<Plan> {
    let module = match (&args.full_name, &args.short_name) {
        (Some(full_name), Some(short_name)) => {
            require_value("--full_name", full_name)?;
            require_value("--short_name", short_name)?;

            let excluded = match &args.excluded_platforms {
                Some(list) => parse_platform_list(list)?,
                None => Vec::new(),
            };

            Some(ModuleDescriptor::new(full_name, short_name, excluded))
        }
        (Some(_), None) => {
            return Err(ModuleError::Usage("--full_name requires --short_name".to_string()));
        }
        (None, Some(_)) => {
            return Err(ModuleError::Usage("--short_name requires --full_name".to_string()));
        }
        (None, None) => None,
    };

    if module.is_none() {
        if args.excluded_platforms.is_some() {
            return Err(ModuleError::Usage(
                "--excluded_platforms requires --full_name and --short_name".to_string(),
            ));
        }
        if args.debug {
            return Err(ModuleError::Usage(
                "--debug requires --full_name and --short_name".to_string(),
            ));
        }
    }

    if let Some(version) = &args.version {
        require_value("--version", version)?;
        validate_version(version)?;
    }

    let plan = Plan {
        module,
        version: args.version.clone(),
    };

    if !plan.is_empty() {
        check_file("Podspec", &args.podspec)?;
    }
    if plan.module.is_some() {
        check_file("Package manifest", &args.package_manifest)?;
    }

    Ok(plan)
}

fn check_file(label: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ModuleError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist: {}", label, path.display()),
        )));
    }

    if path.is_dir() {
        return Err(ModuleError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is a directory: {}", label, path.display()),
        )));
    }

    log::debug!("{} found at {}", label, path.display());
    Ok(())
}
