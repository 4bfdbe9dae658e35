//! Foundation types for the pkg front end.
//!
//! This crate holds what the command front end and the package library share:
//! error types and exit codes, configuration, package records, the typed
//! lifecycle events, and the `Handle` that carries the active event callback.

pub mod config;
pub mod error;
pub mod event;
pub mod exit;
pub mod handle;
pub mod package;

pub use config::PkgConfig;
pub use error::{PkgError, Result};
pub use event::{EventCallback, PkgEvent};
pub use handle::Handle;
pub use package::{ArchiveError, Package, PackageField};
