//! Console rendering of library lifecycle events.

use std::io::{self, Stderr, Stdout, Write};

use pkg_types::error::Result;
use pkg_types::{EventCallback, PackageField, PkgEvent};

/// The front end's event callback: progress to `out`, failures to `err`.
///
/// Only install-begin and archive-error are rendered; every other event kind
/// is accepted and ignored.
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// A reporter writing to the process's standard output and error.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Recover the output streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> EventCallback for ConsoleReporter<O, E> {
    fn on_event(&mut self, event: &PkgEvent<'_>) -> Result<()> {
        match event {
            PkgEvent::InstallBegin { package } => {
                writeln!(self.out, "Installing {}", package.get(PackageField::Name))?;
            },
            PkgEvent::ArchiveError { path, error } => {
                writeln!(self.err, "archive error on {path}: {}", error.error_string())?;
            },
            _ => {},
        }
        Ok(())
    }
}
