//! File-list updates on the aggregate `full` subspec.
//!
//! The `full` subspec pulls in every module, so its `source_files` line gains
//! the new module's glob, and the `<platform>.exclude_files` line of each
//! unsupported platform excludes it again.

use crate::error::Result;
use crate::fs::transaction::Transaction;
use crate::layout::FULL_SUBSPEC_VAR;
use crate::module::{ModuleDescriptor, Platform};
use regex::{Captures, Regex};
use std::path::Path;

/// Appends the module glob to `full.source_files`.
pub fn add_to_full_source_files(
    podspec: &Path,
    module: &ModuleDescriptor,
    txn: &mut Transaction,
) -> Result<()> {
    let attribute = format!("{}.source_files", FULL_SUBSPEC_VAR);
    let content = txn.read(podspec)?;
    let (updated, count) = append_glob(&content, &attribute, &module.source_glob())?;

    if count == 0 {
        log::warn!(
            "No '{}' line in {}; full file list left unchanged",
            attribute,
            podspec.display()
        );
        return Ok(());
    }

    txn.update_file(
        podspec.to_path_buf(),
        updated,
        format!("added \"{}\" to {}", module.source_glob(), attribute),
    )
}

/// Excludes the module glob on every unsupported platform.
///
/// Returns the deployment-target lines for the platforms the module does
/// support. The list is empty when the module excludes nothing, in which
/// case the subspec inherits the spec-wide deployment targets.
pub fn exclude_from_platforms(
    podspec: &Path,
    module: &ModuleDescriptor,
    txn: &mut Transaction,
) -> Result<Vec<String>> {
    for platform in &module.excluded {
        let attribute = format!("{}.{}.exclude_files", FULL_SUBSPEC_VAR, platform.id());
        let content = txn.read(podspec)?;
        let (updated, count) = append_glob(&content, &attribute, &module.source_glob())?;

        if count == 0 {
            log::warn!(
                "No '{}' line in {}; {} exclusion skipped",
                attribute,
                podspec.display(),
                platform
            );
            continue;
        }

        txn.update_file(
            podspec.to_path_buf(),
            updated,
            format!("excluded \"{}\" on {}", module.source_glob(), platform),
        )?;
    }

    Ok(deployment_target_lines(module))
}

/// One `<short>.<platform>.deployment_target = "<version>"` line per
/// supported platform, or nothing if the module supports every platform.
pub fn deployment_target_lines(module: &ModuleDescriptor) -> Vec<String> {
    if !module.has_exclusions() {
        return Vec::new();
    }

    module
        .included_platforms()
        .into_iter()
        .map(|p: Platform| {
            format!(
                "{}.{}.deployment_target = \"{}\"",
                module.short_name,
                p.id(),
                p.deployment_target()
            )
        })
        .collect()
}

/// Appends `,"<glob>"` to every line assigning `attribute`.
///
/// Trailing whitespace on a matched line is dropped before appending.
/// Returns the new content and the number of lines changed.
pub(crate) fn append_glob(content: &str, attribute: &str, glob: &str) -> Result<(String, usize)> {
    let pattern = Regex::new(&format!(r"\b{}\s*=[^\r\n]*", regex::escape(attribute)))?;
    let mut count = 0;

    let updated = pattern.replace_all(content, |caps: &Captures| {
        count += 1;
        format!("{},\"{}\"", caps[0].trim_end(), glob)
    });

    Ok((updated.into_owned(), count))
}
