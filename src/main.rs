//! # licenser
//!
//! Prepends a license header to a source file.

use std::process::ExitCode;

use licenser::cli::{Cli, run_inject, usage_text};
use licenser::error::Error;
use licenser::logging::print_error;

fn usage(reason: Option<&str>) -> ExitCode {
  if let Some(reason) = reason {
    print_error(reason);
  }
  print!("{}", usage_text());
  ExitCode::FAILURE
}

fn main() -> ExitCode {
  let args = match Cli::parse_args() {
    Ok(args) => args,
    Err(Error::Usage(reason)) => return usage(reason.as_deref()),
    Err(e) => {
      print_error(&e.to_string());
      return ExitCode::FAILURE;
    }
  };

  match run_inject(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => match e.downcast_ref::<Error>() {
      Some(Error::Usage(reason)) => usage(reason.as_deref()),
      _ => {
        print_error(&format!("{e:#}"));
        ExitCode::FAILURE
      }
    },
  }
}
