//! Podspec version bump.

use crate::error::Result;
use crate::fs::transaction::Transaction;
use regex::Regex;
use std::path::Path;

pub(crate) const VERSION_TRIPLE: &str = r"\d+\.\d+\.\d+";

/// Replaces the podspec's version with `version`.
///
/// The triple on the `.version =` declaration is replaced. Without such a
/// line the first triple in the file is used. Exactly one triple changes.
pub fn update_version(podspec: &Path, version: &str, txn: &mut Transaction) -> Result<()> {
    let content = txn.read(podspec)?;

    match replace_version(&content, version)? {
        Some((updated, previous)) => txn.update_file(
            podspec.to_path_buf(),
            updated,
            format!("version {} → {}", previous, version),
        ),
        None => {
            log::warn!(
                "No version number found in {}; version left unchanged",
                podspec.display()
            );
            Ok(())
        }
    }
}

/// Returns the rewritten content and the version it replaced.
fn replace_version(content: &str, version: &str) -> Result<Option<(String, String)>> {
    let triple = Regex::new(VERSION_TRIPLE)?;
    let declaration = Regex::new(r"\.version\s*=")?;

    let mut offset = 0;
    let mut fallback = None;
    let mut target = None;

    for line in content.split_inclusive('\n') {
        if let Some(m) = triple.find(line) {
            let range = (offset + m.start(), offset + m.end());
            if declaration.is_match(line) {
                target = Some(range);
                break;
            }
            fallback.get_or_insert(range);
        }
        offset += line.len();
    }

    let Some((start, end)) = target.or(fallback) else {
        return Ok(None);
    };

    let previous = content[start..end].to_string();

    let mut updated = String::with_capacity(content.len() + version.len());
    updated.push_str(&content[..start]);
    updated.push_str(version);
    updated.push_str(&content[end..]);

    Ok(Some((updated, previous)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replaced(content: &str, version: &str) -> Option<String> {
        replace_version(content, version).unwrap().map(|(out, _)| out)
    }

    #[test]
    fn test_replaces_pod_version() {
        let out = replaced("pod.version = '3.9.9'\n", "4.2.1").unwrap();
        assert_eq!(out, "pod.version = '4.2.1'\n");
    }

    #[test]
    fn test_reports_previous_version() {
        let (_, previous) = replace_version("s.version = \"2.1.0\"\n", "2.2.0")
            .unwrap()
            .unwrap();
        assert_eq!(previous, "2.1.0");
    }

    #[test]
    fn test_prefers_version_declaration() {
        let content = r#"# generated by builder 1.4.2
  s.version      = "2.1.0"
  s.dependency "PLCrashReporter", "1.8.1"
"#;
        let out = replaced(content, "2.2.0").unwrap();

        assert!(out.contains(r#"s.version      = "2.2.0""#));
        assert!(out.contains("builder 1.4.2"));
        assert!(out.contains(r#""PLCrashReporter", "1.8.1""#));
    }

    #[test]
    fn test_falls_back_to_first_triple() {
        let content = "tag = \"1.0.0\"\nother = \"5.6.7\"\n";
        let out = replaced(content, "1.1.0").unwrap();
        assert_eq!(out, "tag = \"1.1.0\"\nother = \"5.6.7\"\n");
    }

    #[test]
    fn test_ignores_declaration_without_triple() {
        let content = "s.swift_version = \"5.0\"\ns.version = \"#{VERSION}\"\ns.source = { :tag => \"3.0.1\" }\n";
        let out = replaced(content, "3.1.0").unwrap();
        assert!(out.contains("s.swift_version = \"5.0\""));
        assert!(out.contains(":tag => \"3.1.0\""));
    }

    #[test]
    fn test_two_part_versions_are_not_touched() {
        assert!(replaced("s.ios.deployment_target = \"9.0\"\n", "2.0.0").is_none());
    }

    #[test]
    fn test_replacement_is_literal() {
        let out = replaced("s.version = \"1.0.0\"", "$1.0.0").unwrap();
        assert_eq!(out, "s.version = \"$1.0.0\"");
    }
}
