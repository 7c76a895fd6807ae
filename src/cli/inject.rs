//! # Inject Command
//!
//! Runs the license injection for one target file once arguments have been
//! validated.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{load_config, resolve_license_dir};
use crate::diff::DiffManager;
use crate::error::Error;
use crate::info_log;
use crate::licenses::LicenseStore;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::processor::HeaderInjector;

/// Arguments for the inject command
#[derive(Args, Debug, Default)]
pub struct InjectArgs {
  /// Source file to prepend the license header to
  #[arg(value_name = "SOURCE_FILE", allow_hyphen_values = true)]
  pub source: Option<PathBuf>,

  /// License to insert (mit, gpl, apache, lgpl, mpl)
  #[arg(value_name = "LICENSE", allow_hyphen_values = true)]
  pub license: Option<String>,

  /// Directory holding the <license>.txt files
  #[arg(long, value_name = "DIR")]
  pub license_dir: Option<PathBuf>,

  /// Path to config file (default: .licenser.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Show the diff that would be applied without modifying the file
  #[arg(long)]
  pub dry_run: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl InjectArgs {
  /// Whether both positional arguments were given.
  pub const fn is_complete(&self) -> bool {
    self.source.is_some() && self.license.is_some()
  }
}

/// Run the injection with the given arguments
///
/// # Errors
///
/// Returns [`Error::Usage`] if either positional argument is missing, and
/// the loader or injector error otherwise.
pub fn run_inject(args: InjectArgs) -> Result<()> {
  let (Some(source), Some(license)) = (args.source, args.license) else {
    return Err(Error::Usage(Some("Missing required arguments: <SOURCE_FILE> <LICENSE>".to_string())).into());
  };

  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;
  let license_dir = resolve_license_dir(args.license_dir.as_deref(), config.as_ref());
  debug!("Using license directory: {}", license_dir.display());

  let injector = HeaderInjector::new(LicenseStore::new(license_dir));

  if args.dry_run {
    let (original, rendered) = injector.render(&source, &license)?;
    DiffManager::new().display_diff(&source, &original, &rendered);
    info_log!("Dry run: {} was not modified", source.display());
    return Ok(());
  }

  injector.add_license(&source, &license)?;
  info_log!("Added {} license header to {}", license, source.display());

  Ok(())
}
