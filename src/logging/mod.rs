//! # Logging Module
//!
//! Output helpers for the licenser binary:
//! - `verbose_log!` for step-by-step detail on stderr, shown with `-v`
//! - `info_log!` for the one-line result on stdout, hidden with `-q`
//! - [`print_error`] for failures, always on stdout
//! - [`init_tracing`] for the `tracing` events emitted by the library
//!
//! ## Example
//!
//! ```rust
//! use licenser::logging::{ColorMode, set_verbose};
//! use licenser::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Processing file: {}", "example.py");
//! info_log!("Added mit license header to {}", "example.py");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose, tracing_directive};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// Uses the same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an informational message to stdout, yellow when colors are on.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}

/// Prints an error message to stdout, red when colors are on.
///
/// Quiet mode does not suppress errors.
pub fn print_error(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.red()));
}
