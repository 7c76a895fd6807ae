//! # Templates Module
//!
//! This module decides how a license notice is wrapped for a given file type
//! and builds the header block that gets prepended to the file.
//!
//! The module includes:
//! - [`CommentStyle`] for the delimiter pair around the notice
//! - [`CommentStyleResolver`] and [`BuiltinResolver`] for mapping paths to
//!   comment styles
//! - [`format_header`] for assembling the header block
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use licenser::templates::{BuiltinResolver, CommentStyleResolver, format_header};
//!
//! let style = BuiltinResolver.resolve(Path::new("script.py"));
//! let header = format_header(b"MIT License\n", &style);
//! assert_eq!(header, b"\"\"\"\nMIT License\n\"\"\"\n\n");
//! ```

use std::path::Path;

/// Delimiters used to wrap the inserted license block.
///
/// The license text is written verbatim between the two markers; unlike a
/// line-comment style, no per-line prefix is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
  /// Opening delimiter, written on its own line above the license text
  pub prefix: String,

  /// Closing delimiter, written directly after the license text
  pub suffix: String,
}

impl CommentStyle {
  /// Create a comment style from a prefix/suffix pair.
  pub fn block(prefix: &str, suffix: &str) -> Self {
    Self {
      prefix: prefix.to_string(),
      suffix: suffix.to_string(),
    }
  }

  /// C-family block comment, used for any extension not in the builtin table.
  pub fn c_block() -> Self {
    Self::block("/*", "*/")
  }
}

impl Default for CommentStyle {
  fn default() -> Self {
    Self::c_block()
  }
}

/// Trait for resolving comment styles for file paths.
///
/// This allows the header injector to be driven by something other than the
/// builtin extension table, e.g. from library code or tests.
pub trait CommentStyleResolver: Send + Sync {
  /// Resolve the comment style for the given file path.
  ///
  /// # Arguments
  ///
  /// * `path` - The path to the file. It does not need to exist.
  fn resolve(&self, path: &Path) -> CommentStyle;
}

/// Resolver backed by the fixed extension table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinResolver;

impl CommentStyleResolver for BuiltinResolver {
  fn resolve(&self, path: &Path) -> CommentStyle {
    get_comment_style_for_file(path)
  }
}

/// Gets the comment style for a file based on its extension.
///
/// Matching is exact and case-sensitive: `script.PY` falls through to the
/// default C-style block.
///
/// | extension | prefix   | suffix |
/// |-----------|----------|--------|
/// | `py`      | `"""`    | `"""`  |
/// | `rb`      | `=begin` | `=end` |
/// | `pl`      | `=pod`   | `=cut` |
/// | `sh`      | `: '`    | `'`    |
/// | other     | `/*`     | `*/`   |
pub fn get_comment_style_for_file(path: &Path) -> CommentStyle {
  let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

  match extension {
    "py" => CommentStyle::block("\"\"\"", "\"\"\""),
    "rb" => CommentStyle::block("=begin", "=end"),
    "pl" => CommentStyle::block("=pod", "=cut"),
    "sh" => CommentStyle::block(": '", "'"),
    _ => CommentStyle::c_block(),
  }
}

/// Builds the header block for a license text.
///
/// The layout is `prefix`, a newline, the license text as-is, `suffix` and a
/// blank line. The license text is not reflowed or terminated, so a text
/// without a trailing newline puts the suffix on its last line.
///
/// # Parameters
///
/// * `license_text` - The raw license bytes
/// * `style` - The comment style to wrap them in
pub fn format_header(license_text: &[u8], style: &CommentStyle) -> Vec<u8> {
  let mut header = Vec::with_capacity(style.prefix.len() + license_text.len() + style.suffix.len() + 3);
  header.extend_from_slice(style.prefix.as_bytes());
  header.push(b'\n');
  header.extend_from_slice(license_text);
  header.extend_from_slice(style.suffix.as_bytes());
  header.extend_from_slice(b"\n\n");
  header
}
