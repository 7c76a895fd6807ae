//! # Processor Module
//!
//! This module contains the header injection: resolving the comment style
//! for a target, loading the license text and rewriting the target with the
//! header prepended.
//!
//! The module is organized into two submodules:
//! - [`file_io`] - The swap file that is renamed over the target
//! - [`content_transformer`] - Line normalization of the copied content
//!
//! [`HeaderInjector`] ties them together with a [`LicenseStore`] and a
//! [`CommentStyleResolver`].

mod content_transformer;
mod file_io;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use content_transformer::{normalize_line, normalize_lines};
pub use file_io::{SWAP_SUFFIX, SwapFile};
use tracing::{debug, info_span, trace};

use crate::error::{Error, Result};
use crate::licenses::{LicenseId, LicenseStore, LicenseText};
use crate::templates::{BuiltinResolver, CommentStyle, CommentStyleResolver, format_header};
use crate::verbose_log;

/// Rewrites `target` so that it starts with the header block for
/// `license_text` in `style`.
///
/// Steps, in order: create the swap file, open the target, write the header,
/// copy the target line by line (each line ending in exactly one `\n`),
/// flush and sync, rename the swap file over the target. The target keeps its
/// permissions.
///
/// # Errors
///
/// Returns [`Error::Io`] if any step fails. The swap file is deleted for every
/// failure before the rename; a failed rename leaves it next to the unmodified
/// target.
pub fn inject(target: &Path, license_text: &LicenseText, style: &CommentStyle) -> Result<()> {
  let _span = info_span!("inject", path = %target.display()).entered();

  let mut swap = SwapFile::create(target)?;

  let source =
    File::open(target).map_err(|e| Error::io(format!("Failed to open file: {}", target.display()), e))?;
  let permissions = source
    .metadata()
    .map_err(|e| Error::io(format!("Failed to read metadata: {}", target.display()), e))?
    .permissions();

  swap.write_bytes(&format_header(license_text.as_bytes(), style))?;

  let mut reader = BufReader::new(source);
  let mut line = Vec::new();
  let mut line_count = 0usize;
  loop {
    line.clear();
    let read = reader
      .read_until(b'\n', &mut line)
      .map_err(|e| Error::io(format!("Failed to read file: {}", target.display()), e))?;
    if read == 0 {
      break;
    }
    normalize_line(&mut line);
    swap.write_bytes(&line)?;
    line_count += 1;
  }
  trace!(lines = line_count, "copied target content");

  // Release the read handle before the rename
  drop(reader);

  swap.set_permissions(permissions)?;
  swap.persist(target)?;

  debug!(lines = line_count, "license header injected");
  Ok(())
}

/// Adds license headers to files using a license store and a comment style
/// resolver.
pub struct HeaderInjector {
  store: LicenseStore,
  resolver: Box<dyn CommentStyleResolver>,
}

impl HeaderInjector {
  /// Creates an injector using the builtin extension table.
  pub fn new(store: LicenseStore) -> Self {
    Self::with_resolver(store, Box::new(BuiltinResolver))
  }

  /// Creates an injector with a custom comment style resolver.
  pub fn with_resolver(store: LicenseStore, resolver: Box<dyn CommentStyleResolver>) -> Self {
    Self { store, resolver }
  }

  /// Resolves the comment style and loads the license text for `target`.
  ///
  /// Nothing is written; an unknown or unreadable license fails here.
  pub fn prepare(&self, target: &Path, license_name: &str) -> Result<(CommentStyle, LicenseText)> {
    let style = self.resolver.resolve(target);
    verbose_log!(
      "Using comment style {:?} ... {:?} for {}",
      style.prefix,
      style.suffix,
      target.display()
    );

    let id = license_name.parse::<LicenseId>()?;
    let text = self.store.load(id)?;
    Ok((style, text))
  }

  /// Prepends the `license_name` header to `target`, rewriting it in place.
  ///
  /// Running this twice on the same file adds the header twice.
  pub fn add_license(&self, target: &Path, license_name: &str) -> Result<()> {
    let (style, text) = self.prepare(target, license_name)?;
    verbose_log!("Processing file: {}", target.display());
    inject(target, &text, &style)
  }

  /// Computes the rewritten content without touching the filesystem beyond
  /// reading `target` and the license resource.
  ///
  /// # Returns
  ///
  /// A tuple of the original content and the content [`add_license`] would
  /// write.
  ///
  /// [`add_license`]: Self::add_license
  pub fn render(&self, target: &Path, license_name: &str) -> Result<(Vec<u8>, Vec<u8>)> {
    let (style, text) = self.prepare(target, license_name)?;
    let original =
      std::fs::read(target).map_err(|e| Error::io(format!("Failed to read file: {}", target.display()), e))?;

    let mut rendered = format_header(text.as_bytes(), &style);
    rendered.extend(normalize_lines(&original));
    Ok((original, rendered))
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  struct ShoutResolver;

  impl CommentStyleResolver for ShoutResolver {
    fn resolve(&self, _path: &Path) -> CommentStyle {
      CommentStyle::block("<!--", "-->")
    }
  }

  fn store_with(dir: &Path, id: &str, text: &str) -> LicenseStore {
    fs::write(dir.join(format!("{id}.txt")), text).expect("write license");
    LicenseStore::new(dir)
  }

  #[test]
  fn test_inject_exact_output() {
    let dir = TempDir::new().expect("tempdir");
    let target = dir.path().join("main.go");
    fs::write(&target, "L1\nL2\nL3").expect("write target");

    inject(&target, &LicenseText::from("TEXT"), &CommentStyle::c_block()).expect("inject");

    assert_eq!(fs::read_to_string(&target).expect("read"), "/*\nTEXT*/\n\nL1\nL2\nL3\n");
  }

  #[test]
  fn test_inject_missing_target_cleans_up() {
    let dir = TempDir::new().expect("tempdir");
    let target = dir.path().join("missing.rs");

    let err = inject(&target, &LicenseText::from("TEXT"), &CommentStyle::c_block()).expect_err("missing");
    assert!(matches!(err, Error::Io { .. }));
    assert!(!target.exists());
    assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 0);
  }

  #[test]
  fn test_custom_resolver() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_with(dir.path(), "mit", "MIT\n");
    let target = dir.path().join("page.py");
    fs::write(&target, "x = 1\n").expect("write target");

    let injector = HeaderInjector::with_resolver(store, Box::new(ShoutResolver));
    injector.add_license(&target, "mit").expect("add");

    assert_eq!(fs::read_to_string(&target).expect("read"), "<!--\nMIT\n-->\n\nx = 1\n");
  }

  #[test]
  fn test_render_does_not_write() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_with(dir.path(), "gpl", "GPL\n");
    let target = dir.path().join("tool.pl");
    fs::write(&target, "print 1;\r\n").expect("write target");

    let injector = HeaderInjector::new(store);
    let (original, rendered) = injector.render(&target, "gpl").expect("render");

    assert_eq!(original, b"print 1;\r\n");
    assert_eq!(rendered, b"=pod\nGPL\n=cut\n\nprint 1;\n");
    assert_eq!(fs::read(&target).expect("read"), b"print 1;\r\n");
  }

  #[test]
  fn test_unknown_license_leaves_target_alone() {
    let dir = TempDir::new().expect("tempdir");
    let target = dir.path().join("a.rs");
    fs::write(&target, "fn main() {}").expect("write target");

    let injector = HeaderInjector::new(LicenseStore::new(dir.path()));
    let err = injector.add_license(&target, "wtfpl").expect_err("unknown");

    assert!(matches!(err, Error::UnknownLicense(_)));
    assert_eq!(fs::read_to_string(&target).expect("read"), "fn main() {}");
    assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 1);
  }
}
