//! # CLI Module
//!
//! Command-line handling for licenser: clap-based argument parsing, the
//! usage text, and the mapping from parse results to what `main` does next.
//!
//! Help is not handled by clap. `-h`/`--help` as the first argument, missing
//! positional arguments and malformed options all produce the usage text on
//! stdout and exit status 1. Anything after the license name is ignored. An
//! argument starting with `-` that is not a known option is taken as a
//! positional value, so file names such as `-notes.c` work.

mod inject;

use std::ffi::OsString;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
pub use inject::{InjectArgs, run_inject};

use crate::error::{Error, Result};
use crate::licenses::LicenseId;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = PROGRAM_NAME,
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  disable_help_flag = true,
  after_help = "Examples:
  # Prepend the MIT license to a Python script
  licenser script.py mit

  # Use licenses from a custom directory
  licenser --license-dir ./licenses src/main.c apache

  # Show what would change without writing
  licenser --dry-run deploy.sh gpl
"
)]
pub struct Cli {
  #[command(flatten)]
  pub inject_args: InjectArgs,

  /// Arguments after the license name, ignored
  #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
  pub rest: Vec<OsString>,
}

/// Whether `arg` asks for the usage text.
fn is_help_flag(arg: &OsString) -> bool {
  arg == "-h" || arg == "--help"
}

impl Cli {
  /// Parse the process arguments.
  pub fn parse_args() -> Result<InjectArgs> {
    Self::parse_from_args(std::env::args_os())
  }

  /// Parse an explicit argument list; the first item is the program name.
  ///
  /// Returns [`Error::Usage`] when the usage text should be printed, carrying
  /// clap's message for malformed options. `--version` is printed by clap and
  /// exits the process with status 0.
  pub fn parse_from_args<I, T>(args: I) -> Result<InjectArgs>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).is_some_and(is_help_flag) {
      return Err(Error::Usage(None));
    }

    let cli = match Self::try_parse_from(args) {
      Ok(cli) => cli,
      Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
      Err(e) => {
        let message = e.to_string();
        let first_line = message.lines().next().unwrap_or_default().to_string();
        return Err(Error::Usage(Some(first_line)));
      }
    };

    if !cli.inject_args.is_complete() {
      return Err(Error::Usage(None));
    }

    Ok(cli.inject_args)
  }
}

/// The usage text: invocation line, supported licenses, then the options.
pub fn usage_text() -> String {
  let template = format!(
    "Usage: {PROGRAM_NAME} <source file> <license name>\nAvailable licenses: {}\n\n{{all-args}}{{after-help}}",
    LicenseId::supported_list()
  );

  let mut usage = Cli::command().help_template(template).render_help().to_string();
  if !usage.ends_with('\n') {
    usage.push('\n');
  }
  usage
}

#[cfg(test)]
mod tests {
  use super::*;

  fn usage_error(result: Result<InjectArgs>) -> Option<String> {
    match result {
      Err(Error::Usage(error)) => error,
      Err(e) => panic!("expected usage, got {e}"),
      Ok(args) => panic!("expected usage, got {args:?}"),
    }
  }

  fn run_args<const N: usize>(argv: [&str; N]) -> InjectArgs {
    match Cli::parse_from_args(argv) {
      Ok(args) => args,
      Err(e) => panic!("unexpected usage for {argv:?}: {e}"),
    }
  }

  #[test]
  fn test_no_arguments_is_usage() {
    assert_eq!(usage_error(Cli::parse_from_args(["licenser"])), None);
  }

  #[test]
  fn test_single_argument_is_usage() {
    assert_eq!(usage_error(Cli::parse_from_args(["licenser", "main.c"])), None);
  }

  #[test]
  fn test_help_as_first_argument_is_usage() {
    for flag in ["-h", "--help"] {
      assert_eq!(usage_error(Cli::parse_from_args(["licenser", flag])), None);
      assert_eq!(usage_error(Cli::parse_from_args(["licenser", flag, "main.c", "mit"])), None);
    }
  }

  #[test]
  fn test_help_after_license_is_ignored() {
    for flag in ["-h", "--help"] {
      let args = run_args(["licenser", "main.c", "mit", flag]);
      assert_eq!(args.source.as_deref(), Some(std::path::Path::new("main.c")));
      assert_eq!(args.license.as_deref(), Some("mit"));
    }
  }

  #[test]
  fn test_trailing_arguments_are_ignored() {
    let args = run_args(["licenser", "main.c", "mit", "extra", "--more", "-x"]);
    assert_eq!(args.source.as_deref(), Some(std::path::Path::new("main.c")));
    assert_eq!(args.license.as_deref(), Some("mit"));
    assert!(!args.dry_run);
  }

  #[test]
  fn test_source_may_start_with_hyphen() {
    let args = run_args(["licenser", "-notes.c", "mit"]);
    assert_eq!(args.source.as_deref(), Some(std::path::Path::new("-notes.c")));
    assert_eq!(args.license.as_deref(), Some("mit"));
  }

  #[test]
  fn test_malformed_option_is_usage_with_error() {
    let error = usage_error(Cli::parse_from_args(["licenser", "--colors=rainbow", "main.c", "mit"]));
    assert!(error.is_some_and(|e| e.contains("rainbow")));
  }

  #[test]
  fn test_complete_arguments_run() {
    let args = run_args(["licenser", "-vv", "--dry-run", "main.c", "mit"]);
    assert_eq!(args.source.as_deref(), Some(std::path::Path::new("main.c")));
    assert_eq!(args.license.as_deref(), Some("mit"));
    assert_eq!(args.verbose, 2);
    assert!(args.dry_run);
  }

  #[test]
  fn test_license_is_not_validated_by_clap() {
    // Unknown licenses are reported by the loader, not as usage errors
    assert_eq!(run_args(["licenser", "main.c", "bsd"]).license.as_deref(), Some("bsd"));
  }

  #[test]
  fn test_usage_text_lists_licenses() {
    let usage = usage_text();
    assert!(usage.starts_with("Usage: licenser <source file> <license name>\n"));
    assert!(usage.contains("Available licenses: mit, gpl, apache, lgpl, mpl"));
    assert!(usage.contains("--license-dir"));
  }

  #[test]
  fn test_command_is_well_formed() {
    Cli::command().debug_assert();
  }
}
