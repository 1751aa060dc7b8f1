//! Library product declarations in `Package.swift`.

use super::{indentation, insert_after_line};
use crate::error::Result;
use crate::fs::transaction::Transaction;
use crate::module::ModuleDescriptor;
use regex::Regex;
use std::path::Path;

/// Adds a `.library` product for the module at the top of `products: [`.
///
/// This modifies the manifest as follows:
/// ```swift
/// products: [
///   .library(                         // ← Added
///     name: "TealiumAnalytics",       // ← Added
///     targets: ["TealiumAnalytics"]), // ← Added
///   .library(
///     name: "TealiumCore",
/// ```
///
/// A manifest without a `products:` list is left unchanged.
pub fn add_library_product(
    manifest: &Path,
    module: &ModuleDescriptor,
    txn: &mut Transaction,
) -> Result<()> {
    let content = txn.read(manifest)?;

    let Some(updated) = insert_library_product(&content, &module.full_name)? else {
        log::warn!(
            "No 'products: [' in {}; library product not added",
            manifest.display()
        );
        return Ok(());
    };

    txn.update_file(
        manifest.to_path_buf(),
        updated,
        format!("added library product \"{}\"", module.full_name),
    )
}

fn insert_library_product(content: &str, full_name: &str) -> Result<Option<String>> {
    let anchor = Regex::new(r"products:\s*\[")?;

    Ok(insert_after_line(content, |line| anchor.is_match(line), |line| {
        let indent = format!("{}  ", indentation(line));
        vec![
            format!("{}.library(", indent),
            format!("{}  name: \"{}\",", indent, full_name),
            format!("{}  targets: [\"{}\"]),", indent, full_name),
        ]
    }))
}
