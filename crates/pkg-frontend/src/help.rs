//! The `help` entry and the documentation renderer it delegates to.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process;

use pkg_types::PkgConfig;
use pkg_types::error::{PkgError, Result};
use pkg_types::exit::EX_USAGE;

use crate::registry::{Command, Environment, PROGRAM};

/// Shows long-form documentation for a command.
pub trait DocumentationRenderer {
    /// Display the documentation for `command`, blocking until done.
    fn render(&self, command: &str) -> Result<()>;
}

/// Renders documentation by running a manual page viewer.
///
/// `help add` runs `<viewer> <prefix>add` with inherited stdio.
#[derive(Debug, Clone)]
pub struct ManPageRenderer {
    viewer: PathBuf,
    prefix: String,
}

impl ManPageRenderer {
    pub fn new(viewer: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &PkgConfig) -> Self {
        Self::new(&config.manual_viewer, &config.manual_prefix)
    }

    /// The manual page name for `command`.
    pub fn page_name(&self, command: &str) -> String {
        format!("{}{command}", self.prefix)
    }
}

impl DocumentationRenderer for ManPageRenderer {
    fn render(&self, command: &str) -> Result<()> {
        let page = self.page_name(command);
        log::debug!("Running {} {page}", self.viewer.display());
        let status = process::Command::new(&self.viewer)
            .arg(&page)
            .status()
            .map_err(|e| {
                PkgError::Unavailable(format!(
                    "failed to start {}: {e}",
                    self.viewer.display()
                ))
            })?;
        if !status.success() {
            return Err(PkgError::Command(format!(
                "{} {page} exited with {status}",
                self.viewer.display()
            )));
        }
        Ok(())
    }
}

/// Registry entry for `help`.
///
/// Supplies the name and usage so `help` is listed and abbreviable like any
/// other command. `CommandRegistry::dispatch` runs `help` itself because the
/// listing and exact lookup need the table; `execute` is only reached when the
/// entry is invoked outside a registry and prints the same usage line.
pub(crate) struct HelpCmd;

impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn usage(&self) -> &str {
        "help <command>"
    }
    fn execute(&self, _args: &[&OsStr], env: &mut Environment<'_>) -> Result<i32> {
        writeln!(env.stderr, "usage: {PROGRAM} {}", self.usage())?;
        Ok(EX_USAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_uses_prefix() {
        let r = ManPageRenderer::from_config(&PkgConfig::default());
        assert_eq!(r.page_name("add"), "pkg-add");
    }

    #[test]
    fn custom_prefix() {
        let r = ManPageRenderer::new("/usr/bin/man", "pkgng-");
        assert_eq!(r.page_name("repo"), "pkgng-repo");
    }

    #[cfg(unix)]
    #[test]
    fn successful_viewer() {
        let r = ManPageRenderer::new("true", "pkg-");
        assert!(r.render("add").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failing_viewer_is_command_error() {
        let r = ManPageRenderer::new("false", "pkg-");
        let err = r.render("add").unwrap_err();
        assert!(matches!(err, PkgError::Command(_)));
        assert!(err.to_string().contains("pkg-add"));
    }

    #[test]
    fn missing_viewer_is_unavailable() {
        let r = ManPageRenderer::new("/nonexistent/bin/man", "pkg-");
        let err = r.render("add").unwrap_err();
        assert!(matches!(err, PkgError::Unavailable(_)));
    }
}
