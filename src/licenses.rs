//! # Licenses Module
//!
//! The closed set of supported license identifiers and the store that loads
//! their texts from a directory of `<id>.txt` resources.
//!
//! ```rust,no_run
//! use licenser::licenses::{LicenseId, LicenseStore};
//!
//! # fn main() -> licenser::error::Result<()> {
//! let store = LicenseStore::new("/opt/licenser/licenses");
//! let text = store.load(LicenseId::Mit)?;
//! assert!(!text.as_bytes().is_empty());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::verbose_log;

/// Compiled-in location of the license resources.
pub const DEFAULT_LICENSE_DIR: &str = "/opt/licenser/licenses";

/// Supported license identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseId {
  Mit,
  Gpl,
  Apache,
  Lgpl,
  Mpl,
}

impl LicenseId {
  /// Every supported identifier, in the order shown in usage text.
  pub const ALL: [Self; 5] = [Self::Mit, Self::Gpl, Self::Apache, Self::Lgpl, Self::Mpl];

  /// The identifier as typed on the command line.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Mit => "mit",
      Self::Gpl => "gpl",
      Self::Apache => "apache",
      Self::Lgpl => "lgpl",
      Self::Mpl => "mpl",
    }
  }

  /// File name of the resource holding this license's text.
  pub fn file_name(self) -> String {
    format!("{}.txt", self.as_str())
  }

  /// Comma separated list of supported identifiers.
  pub fn supported_list() -> String {
    Self::ALL.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
  }
}

impl fmt::Display for LicenseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LicenseId {
  type Err = Error;

  /// Exact, case-sensitive match against the supported identifiers.
  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|id| id.as_str() == s)
      .ok_or_else(|| Error::UnknownLicense(s.to_string()))
  }
}

/// Verbatim content of a license resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText(Vec<u8>);

impl LicenseText {
  pub const fn new(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl From<&str> for LicenseText {
  fn from(text: &str) -> Self {
    Self(text.as_bytes().to_vec())
  }
}

/// Loads license texts from a base directory.
#[derive(Debug, Clone)]
pub struct LicenseStore {
  base_dir: PathBuf,
}

impl Default for LicenseStore {
  fn default() -> Self {
    Self::new(DEFAULT_LICENSE_DIR)
  }
}

impl LicenseStore {
  /// Creates a store reading resources from `base_dir`.
  pub fn new(base_dir: impl Into<PathBuf>) -> Self {
    Self {
      base_dir: base_dir.into(),
    }
  }

  /// Path of the resource backing `id`.
  pub fn path_for(&self, id: LicenseId) -> PathBuf {
    self.base_dir.join(id.file_name())
  }

  /// Reads the full text for `id`. Nothing is trimmed or substituted.
  ///
  /// # Errors
  ///
  /// Returns [`Error::ResourceUnavailable`] if the resource is missing or
  /// cannot be read.
  pub fn load(&self, id: LicenseId) -> Result<LicenseText> {
    let path = self.path_for(id);
    verbose_log!("Loading {} license from: {}", id, path.display());

    let bytes = std::fs::read(&path).map_err(|source| Error::ResourceUnavailable {
      path: path.clone(),
      source,
    })?;
    debug!(license = %id, bytes = bytes.len(), "loaded license text");

    Ok(LicenseText::new(bytes))
  }

  /// Parses `name` as a [`LicenseId`] and loads it.
  ///
  /// # Errors
  ///
  /// Returns [`Error::UnknownLicense`] before touching the filesystem if
  /// `name` is not supported, otherwise whatever [`load`](Self::load) returns.
  pub fn load_by_name(&self, name: &str) -> Result<LicenseText> {
    let id = name.parse::<LicenseId>()?;
    self.load(id)
  }
}
