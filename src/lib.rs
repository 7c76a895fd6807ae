//! # licenser
//!
//! A tool that prepends a license notice to a source file, wrapped in the
//! block-comment delimiters of the file's language.
//!
//! `licenser` rewrites the file in place: the header is written to a swap
//! file next to the target, followed by the original content with every line
//! terminated by a single `\n`, and the swap file is then renamed over the
//! target. Running it twice adds the header twice.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use licenser::licenses::LicenseStore;
//! use licenser::processor::HeaderInjector;
//!
//! fn main() -> licenser::error::Result<()> {
//!     let injector = HeaderInjector::new(LicenseStore::new("/opt/licenser/licenses"));
//!     injector.add_license(Path::new("script.py"), "mit")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - The rewrite itself
//! * [`templates`] - Comment styles and header formatting
//! * [`licenses`] - Supported licenses and the license text store
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`templates`]: crate::templates
//! [`licenses`]: crate::licenses
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod licenses;
pub mod logging;
pub mod processor;
pub mod templates;
