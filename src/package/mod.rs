//! SwiftPM manifest (`Package.swift`) edits.
//!
//! - **`product`**: `.library` product declarations
//! - **`target`**: `.target` declarations
//!
//! The manifest is Swift source, so edits are anchored on known lines and
//! inherit the indentation of the anchor rather than re-formatting anything.

pub mod product;
pub mod target;

pub use product::add_library_product;
pub use target::add_target;

/// Leading whitespace of `line`.
pub(crate) fn indentation(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}

/// Inserts the lines produced by `render` after the first line matching
/// `is_anchor`. Returns `None` when no line matches.
pub(crate) fn insert_after_line<P, R>(content: &str, is_anchor: P, render: R) -> Option<String>
where
    P: Fn(&str) -> bool,
    R: FnOnce(&str) -> Vec<String>,
{
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let end = offset + line.len();
        let text = line.trim_end_matches(['\r', '\n']);

        if is_anchor(text) {
            let eol = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
            let mut out = String::with_capacity(content.len() + 128);
            out.push_str(&content[..end]);
            if !line.ends_with('\n') {
                out.push_str(eol);
            }
            for inserted in render(text) {
                out.push_str(&inserted);
                out.push_str(eol);
            }
            out.push_str(&content[end..]);
            return Some(out);
        }

        offset = end;
    }

    None
}
