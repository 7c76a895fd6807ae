#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// License texts written by [`license_dir`], one per supported identifier.
pub const LICENSES: [(&str, &str); 5] = [
  ("mit", "MIT License\n\nPermission is hereby granted, free of charge.\n"),
  ("gpl", "GNU GENERAL PUBLIC LICENSE\nVersion 3\n"),
  ("apache", "Apache License\nVersion 2.0, January 2004\n"),
  ("lgpl", "GNU LESSER GENERAL PUBLIC LICENSE\n"),
  ("mpl", "Mozilla Public License Version 2.0"),
];

/// Text of a license written by [`license_dir`].
pub fn license_text(id: &str) -> &'static str {
  LICENSES
    .iter()
    .find(|(name, _)| *name == id)
    .map(|(_, text)| *text)
    .unwrap_or_default()
}

/// Creates `<root>/licenses` populated with every license in [`LICENSES`].
pub fn license_dir(root: &Path) -> Result<PathBuf> {
  let dir = root.join("licenses");
  fs::create_dir_all(&dir)?;
  for (id, text) in LICENSES {
    fs::write(dir.join(format!("{id}.txt")), text)?;
  }
  Ok(dir)
}

/// A temporary workspace with a `licenses/` directory and a `work/`
/// directory for target files.
pub struct Workspace {
  pub temp: TempDir,
  pub licenses: PathBuf,
  pub work: PathBuf,
}

impl Workspace {
  pub fn new() -> Result<Self> {
    let temp = TempDir::new()?;
    let licenses = license_dir(temp.path())?;
    let work = temp.path().join("work");
    fs::create_dir_all(&work)?;
    Ok(Self { temp, licenses, work })
  }

  /// Writes a target file into `work/` and returns its path.
  pub fn target(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = self.work.join(name);
    fs::write(&path, content)?;
    Ok(path)
  }

  /// Names of all entries in `work/`, sorted.
  pub fn work_entries(&self) -> Result<Vec<String>> {
    let mut names = fs::read_dir(&self.work)?
      .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
      .collect::<Result<Vec<_>, _>>()?;
    names.sort();
    Ok(names)
  }
}
