//! Typed lifecycle events and the callback interface that receives them.
//!
//! Deep library code (archive extraction, install sequencing) reports progress
//! through [`Handle::emit`](crate::Handle::emit) without knowing how the front
//! end presents it. Payloads borrow from the emitter for the duration of the
//! call only.

use crate::error::Result;
use crate::package::{ArchiveError, Package};

/// A lifecycle notification.
///
/// New kinds are added over time; receivers must ignore kinds they do not
/// handle.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum PkgEvent<'a> {
    /// A package is about to be installed.
    InstallBegin { package: &'a Package },
    /// A package finished installing.
    InstallFinished { package: &'a Package },
    /// A package is about to be removed.
    DeinstallBegin { package: &'a Package },
    /// A package finished being removed.
    DeinstallFinished { package: &'a Package },
    /// A remote file is about to be fetched.
    FetchBegin { url: &'a str },
    /// The archive library failed on a file.
    ArchiveError {
        path: &'a str,
        error: &'a ArchiveError,
    },
    /// A generic library error.
    Error { message: &'a str },
}

/// Receives events emitted through a [`Handle`](crate::Handle).
///
/// The returned status is handed back to the emitter, which may ignore it.
pub trait EventCallback {
    fn on_event(&mut self, event: &PkgEvent<'_>) -> Result<()>;
}

impl<F> EventCallback for F
where
    F: FnMut(&PkgEvent<'_>) -> Result<()>,
{
    fn on_event(&mut self, event: &PkgEvent<'_>) -> Result<()> {
        self(event)
    }
}
