use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Global output mode shared by the logging macros.
///
/// This is initialized to `Normal`; [`set_verbose`] and [`set_quiet`] switch
/// it once at startup.
static OUTPUT_MODE: AtomicU8 = AtomicU8::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
  Normal = 0,
  Quiet = 1,
  Verbose = 2,
}

impl OutputMode {
  const fn from_u8(value: u8) -> Self {
    match value {
      1 => OutputMode::Quiet,
      2 => OutputMode::Verbose,
      _ => OutputMode::Normal,
    }
  }
}

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Makes this mode the process-wide color setting for `owo-colors`.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Sets the global verbose logging flag.
///
/// When verbose logging is enabled, the [`verbose_log!`](crate::verbose_log)
/// macro will output messages to stderr.
pub fn set_verbose() {
  OUTPUT_MODE.store(OutputMode::Verbose as u8, Ordering::SeqCst);
}

/// Suppresses [`info_log!`](crate::info_log) output.
pub fn set_quiet() {
  OUTPUT_MODE.store(OutputMode::Quiet as u8, Ordering::SeqCst);
}

/// Checks if verbose logging is currently enabled.
pub fn is_verbose() -> bool {
  matches!(OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)), OutputMode::Verbose)
}

/// Checks if quiet mode is currently enabled.
pub fn is_quiet() -> bool {
  matches!(OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)), OutputMode::Quiet)
}

/// Maps `-q` / `-v` counts to a tracing filter directive.
pub const fn tracing_directive(quiet: bool, verbose: u8) -> &'static str {
  if quiet {
    return "error";
  }
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Installs the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` overrides the level derived from the flags. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(tracing_directive(quiet, verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}
