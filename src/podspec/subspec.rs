//! Appends the module's own subspec to the podspec.

use crate::error::{ModuleError, Result};
use crate::fs::transaction::Transaction;
use crate::layout::CORE_SUBSPEC;
use crate::module::ModuleDescriptor;
use regex::Regex;
use std::path::Path;

const DEFAULT_SPEC_VAR: &str = "s";

/// Inserts a subspec for `module` immediately before the podspec's closing `end`.
///
/// `deployment_targets` are the lines returned by
/// [`exclude_from_platforms`](super::exclude_from_platforms).
///
/// # Errors
///
/// - `MalformedFile`: the last non-blank line is not `end`
pub fn insert_subspec(
    podspec: &Path,
    module: &ModuleDescriptor,
    deployment_targets: &[String],
    txn: &mut Transaction,
) -> Result<()> {
    let content = txn.read(podspec)?;
    let block = subspec_block(&spec_variable(&content)?, module, deployment_targets);

    let updated = insert_before_closing_end(&content, &block).ok_or_else(|| {
        ModuleError::MalformedFile(
            podspec.to_path_buf(),
            "expected the last line to close the spec with 'end'".to_string(),
        )
    })?;

    txn.update_file(
        podspec.to_path_buf(),
        updated,
        format!("added subspec \"{}\"", module.full_name),
    )
}

/// Name bound by `Pod::Spec.new do |s|`, `s` if the header is not found.
fn spec_variable(content: &str) -> Result<String> {
    let header = Regex::new(r"Pod::Spec\.new\s+do\s*\|\s*(\w+)\s*\|")?;

    Ok(header
        .captures(content)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_SPEC_VAR.to_string()))
}

/// Renders the subspec, one entry per line, without a trailing newline.
///
/// ```text
///   s.subspec "TealiumAnalytics" do |analytics|
///     analytics.source_files = "tealium/analytics/*"
///     analytics.dependency "tealium-swift/Core"
///   end
/// ```
fn subspec_block(
    spec_var: &str,
    module: &ModuleDescriptor,
    deployment_targets: &[String],
) -> String {
    let short = &module.short_name;
    let mut lines = vec![format!(
        "  {}.subspec \"{}\" do |{}|",
        spec_var, module.full_name, short
    )];

    lines.extend(deployment_targets.iter().map(|line| format!("    {}", line)));
    lines.push(format!(
        "    {}.source_files = \"{}\"",
        short,
        module.source_glob()
    ));
    lines.push(format!("    {}.dependency \"{}\"", short, CORE_SUBSPEC));
    lines.push("  end".to_string());

    lines.join("\n")
}

/// Replaces the final `end` line with `block`, a blank line and a new `end`.
///
/// Content following the final `end` (its newline, trailing blank lines) is
/// preserved. The block takes the line ending of the line before `end`.
/// Returns `None` if the last non-blank line is not an unindented `end`.
fn insert_before_closing_end(content: &str, block: &str) -> Option<String> {
    let body = content.trim_end();
    let line_start = body.rfind('\n').map_or(0, |i| i + 1);

    if &body[line_start..] != "end" {
        return None;
    }

    let head = &content[..line_start];
    let eol = if head.ends_with("\r\n") { "\r\n" } else { "\n" };

    let mut out = String::with_capacity(content.len() + block.len() + 8);
    out.push_str(head);
    out.push_str(&block.lines().collect::<Vec<_>>().join(eol));
    out.push_str(eol);
    out.push_str(eol);
    out.push_str("end");
    out.push_str(&content[body.len()..]);
    Some(out)
}
