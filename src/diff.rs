//! # Diff Module
//!
//! Renders the change a rewrite would make, for `--dry-run`.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Builds and prints line diffs between original and rewritten content.
#[derive(Debug, Default)]
pub struct DiffManager;

impl DiffManager {
  pub const fn new() -> Self {
    Self
  }

  /// Renders a diff between `original` and `new` as plain text.
  ///
  /// Content that is not valid UTF-8 is shown lossily.
  pub fn render(&self, path: &Path, original: &[u8], new: &[u8]) -> String {
    let original = String::from_utf8_lossy(original);
    let new = String::from_utf8_lossy(new);
    let diff = TextDiff::from_lines(original.as_ref(), new.as_ref());

    let mut diff_content = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      diff_content.push_str(sign);
      diff_content.push_str(change.value());
      if change.missing_newline() {
        diff_content.push('\n');
      }
    }

    diff_content
  }

  /// Prints the diff to stdout, coloring inserted and deleted lines when
  /// colors are enabled.
  pub fn display_diff(&self, path: &Path, original: &[u8], new: &[u8]) {
    for line in self.render(path, original, new).lines() {
      if line.starts_with('+') {
        println!("{}", line.if_supports_color(Stream::Stdout, |l| l.green()));
      } else if line.starts_with('-') {
        println!("{}", line.if_supports_color(Stream::Stdout, |l| l.red()));
      } else {
        println!("{line}");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_marks_header_as_inserted() {
    let diff = DiffManager::new().render(Path::new("a.rs"), b"fn main() {}", b"/*\nMIT\n*/\n\nfn main() {}\n");

    assert!(diff.starts_with("Diff for a.rs:\n"));
    assert!(diff.contains("+/*\n"));
    assert!(diff.contains("+MIT\n"));
    assert!(diff.contains("+*/\n"));
    // The unterminated last line is rewritten with a newline
    assert!(diff.contains("-fn main() {}\n"));
    assert!(diff.contains("+fn main() {}\n"));
  }

  #[test]
  fn test_render_unchanged_lines() {
    let diff = DiffManager::new().render(Path::new("a.py"), b"x = 1\n", b"\"\"\"\nT\n\"\"\"\n\nx = 1\n");
    assert!(diff.contains(" x = 1\n"));
    assert!(!diff.contains("-x = 1"));
  }
}
