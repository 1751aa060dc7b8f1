//! Build target declarations in `Package.swift`.

use super::indentation;
use crate::error::Result;
use crate::fs::transaction::Transaction;
use crate::layout::{CORE_PATH, CORE_TARGET};
use crate::module::ModuleDescriptor;
use regex::Regex;
use std::path::Path;

/// Adds a `.target` for the module directly after the core target.
///
/// The core target's `path:` argument is the anchor: the core target is
/// closed right after it and the new target is opened, reusing the closing
/// parenthesis that followed the core path.
///
/// ```swift
/// .target(
///   name: "TealiumCore",
///   path: "tealium/core/"
/// ),                                        // ← Added
/// .target(                                  // ← Added
///   name: "TealiumAnalytics",               // ← Added
///   dependencies: ["TealiumCore"],          // ← Added
///   path: "tealium/analytics/",             // ← Added
///   swiftSettings: [.define("analytics")]   // ← Added
/// ),
/// ```
///
/// A manifest without the core path is left unchanged.
pub fn add_target(manifest: &Path, module: &ModuleDescriptor, txn: &mut Transaction) -> Result<()> {
    let content = txn.read(manifest)?;

    let Some(updated) = insert_target(&content, module)? else {
        log::warn!(
            "No core target path \"{}\" in {}; target not added",
            CORE_PATH,
            manifest.display()
        );
        return Ok(());
    };

    txn.update_file(
        manifest.to_path_buf(),
        updated,
        format!("added target \"{}\"", module.full_name),
    )
}

fn insert_target(content: &str, module: &ModuleDescriptor) -> Result<Option<String>> {
    let anchor = Regex::new(&format!(r#"path:\s*"{}""#, regex::escape(CORE_PATH)))?;

    let Some(m) = anchor.find(content) else {
        return Ok(None);
    };

    let line_start = content[..m.start()].rfind('\n').map_or(0, |i| i + 1);
    let field = indentation(&content[line_start..]);
    let outer = &field[..field.len().saturating_sub(2)];
    let rest_of_line = content[m.end()..].split('\n').next().unwrap_or_default();
    let eol = if rest_of_line.ends_with('\r') { "\r\n" } else { "\n" };

    let block = [
        format!("{}),", outer),
        format!("{}.target(", outer),
        format!("{}name: \"{}\",", field, module.full_name),
        format!("{}dependencies: [\"{}\"],", field, CORE_TARGET),
        format!("{}path: \"{}\",", field, module.source_path()),
        format!("{}swiftSettings: [.define(\"{}\")]", field, module.short_name),
    ];

    let mut out = String::with_capacity(content.len() + 256);
    out.push_str(&content[..m.end()]);
    for line in &block {
        out.push_str(eol);
        out.push_str(line);
    }
    out.push_str(&content[m.end()..]);

    Ok(Some(out))
}
