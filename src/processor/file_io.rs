//! # File I/O Module
//!
//! The swap file that receives the rewritten content before it replaces the
//! target. The swap file removes itself when dropped unless it has been
//! renamed over the target.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Suffix appended to the swap file name.
pub const SWAP_SUFFIX: &str = ".licenser-swap";

/// Temporary output artifact living next to the target file.
pub struct SwapFile {
  path: PathBuf,
  writer: Option<BufWriter<File>>,
  /// Whether dropping should delete the file
  armed: bool,
}

impl SwapFile {
  /// Path of the swap file used for `target`: `.<name>.licenser-swap` in the
  /// target's directory.
  pub fn path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or_else(|| "target".as_ref()));
    name.push(SWAP_SUFFIX);

    match target.parent() {
      Some(parent) => parent.join(name),
      None => PathBuf::from(name),
    }
  }

  /// Creates (or truncates) the swap file for `target`.
  pub fn create(target: &Path) -> Result<Self> {
    let path = Self::path_for(target);
    let file = File::create(&path)
      .map_err(|e| Error::io(format!("Failed to create swap file: {}", path.display()), e))?;
    debug!(swap = %path.display(), "created swap file");

    Ok(Self {
      path,
      writer: Some(BufWriter::new(file)),
      armed: true,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Applies `permissions` to the swap file so the replaced target keeps them.
  pub fn set_permissions(&self, permissions: fs::Permissions) -> Result<()> {
    fs::set_permissions(&self.path, permissions)
      .map_err(|e| Error::io(format!("Failed to set permissions on: {}", self.path.display()), e))
  }

  /// Writes all of `buf`, attributing failures to the swap file.
  pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
    let path = &self.path;
    match self.writer.as_mut() {
      Some(writer) => writer
        .write_all(buf)
        .map_err(|e| Error::io(format!("Failed to write swap file: {}", path.display()), e)),
      None => Err(Error::io(
        format!("Failed to write swap file: {}", path.display()),
        io::Error::other("swap file already closed"),
      )),
    }
  }

  /// Flushes and syncs the content, then renames the swap file over `target`.
  ///
  /// If the rename itself fails the swap file is left on disk next to the
  /// untouched target and the error names it.
  pub fn persist(mut self, target: &Path) -> Result<()> {
    if let Some(writer) = self.writer.take() {
      let file = writer
        .into_inner()
        .map_err(|e| Error::io(format!("Failed to flush swap file: {}", self.path.display()), e.into_error()))?;
      file
        .sync_all()
        .map_err(|e| Error::io(format!("Failed to sync swap file: {}", self.path.display()), e))?;
    }

    if let Err(e) = fs::rename(&self.path, target) {
      self.armed = false;
      warn!(swap = %self.path.display(), dest = %target.display(), "rename failed, swap file left in place");
      return Err(Error::io(
        format!(
          "Failed to replace {} with {} (swap file left in place)",
          target.display(),
          self.path.display()
        ),
        e,
      ));
    }

    self.armed = false;
    debug!(dest = %target.display(), "replaced target with swap file");
    Ok(())
  }
}

impl Drop for SwapFile {
  fn drop(&mut self) {
    // Close the handle before unlinking
    self.writer.take();
    if self.armed {
      if let Err(e) = fs::remove_file(&self.path) {
        warn!(swap = %self.path.display(), error = %e, "failed to remove swap file");
      } else {
        debug!(swap = %self.path.display(), "removed swap file");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_path_for_sits_next_to_target() {
    assert_eq!(
      SwapFile::path_for(Path::new("src/main.rs")),
      Path::new("src/.main.rs.licenser-swap")
    );
    assert_eq!(SwapFile::path_for(Path::new("run.sh")), Path::new(".run.sh.licenser-swap"));
  }

  #[test]
  fn test_drop_removes_unpersisted_swap() {
    let dir = TempDir::new().expect("tempdir");
    let target = dir.path().join("a.rs");

    let swap_path = {
      let mut swap = SwapFile::create(&target).expect("create");
      swap.write_bytes(b"partial").expect("write");
      assert!(swap.path().exists());
      swap.path().to_path_buf()
    };

    assert!(!swap_path.exists());
  }

  #[test]
  fn test_persist_replaces_target() {
    let dir = TempDir::new().expect("tempdir");
    let target = dir.path().join("a.rs");
    fs::write(&target, "old").expect("write target");

    let mut swap = SwapFile::create(&target).expect("create");
    let swap_path = swap.path().to_path_buf();
    swap.write_bytes(b"new").expect("write");
    swap.persist(&target).expect("persist");

    assert_eq!(fs::read_to_string(&target).expect("read"), "new");
    assert!(!swap_path.exists());
  }

  #[test]
  fn test_failed_rename_leaves_swap_file() {
    let dir = TempDir::new().expect("tempdir");
    // A non-empty directory cannot be replaced by a regular file
    let target = dir.path().join("occupied");
    fs::create_dir(&target).expect("mkdir");
    fs::write(target.join("inner"), "x").expect("write inner");

    let mut swap = SwapFile::create(&target).expect("create");
    let swap_path = swap.path().to_path_buf();
    swap.write_bytes(b"content").expect("write");

    let err = swap.persist(&target).expect_err("rename over directory");
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("swap file left in place"));
    assert!(swap_path.exists());
    assert!(target.is_dir());
  }
}
