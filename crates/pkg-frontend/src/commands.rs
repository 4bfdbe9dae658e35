//! The built-in command table.

use std::ffi::OsStr;
use std::process;

use pkg_types::error::{PkgError, Result};
use pkg_types::exit::{EX_OK, EX_SOFTWARE, EX_USAGE};

use crate::help::HelpCmd;
use crate::registry::{Command, CommandRegistry, Environment, PROGRAM};

/// Register every command in display order.
///
/// `help` and `version` run in process; the package operations are separate
/// programs under the configured libexec directory.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(external("add", "add <pkg-file>"));
    reg.register(external("create", "create [-o outdir] <pkg-name> ..."));
    reg.register(external("delete", "delete [-f] <pkg-name> ..."));
    reg.register(Box::new(HelpCmd));
    reg.register(external("info", "info [-e] [<pkg-name>]"));
    reg.register(external("register", "register -m <metadatadir>"));
    reg.register(external("repo", "repo <repo-path>"));
    reg.register(external("update", "update"));
    reg.register(external("upgrade", "upgrade"));
    reg.register(Box::new(VersionCmd));
    reg.register(external("which", "which <file>"));
}

fn external(name: &'static str, usage: &'static str) -> Box<dyn Command> {
    Box::new(ExternalCmd { name, usage })
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

struct VersionCmd;
impl Command for VersionCmd {
    fn name(&self) -> &str {
        "version"
    }
    fn usage(&self) -> &str {
        "version"
    }
    fn execute(&self, args: &[&OsStr], env: &mut Environment<'_>) -> Result<i32> {
        if !args.is_empty() {
            writeln!(env.stderr, "usage: {PROGRAM} {}", self.usage())?;
            return Ok(EX_USAGE);
        }
        writeln!(env.stdout, "{PROGRAM} {}", env!("CARGO_PKG_VERSION"))?;
        Ok(EX_OK)
    }
}

// ---------------------------------------------------------------------------
// out-of-process subcommands
// ---------------------------------------------------------------------------

/// Runs `<libexec_dir>/pkg-<name>` and passes its exit status through.
struct ExternalCmd {
    name: &'static str,
    usage: &'static str,
}

impl Command for ExternalCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn usage(&self) -> &str {
        self.usage
    }
    fn execute(&self, args: &[&OsStr], env: &mut Environment<'_>) -> Result<i32> {
        let program = env
            .handle
            .config()
            .libexec_dir
            .join(format!("{PROGRAM}-{}", self.name));
        // The child shares our stdio; keep ordering with anything already written.
        env.stdout.flush()?;
        env.stderr.flush()?;
        log::debug!("Running {}", program.display());
        let status = process::Command::new(&program)
            .args(args)
            .status()
            .map_err(|e| {
                PkgError::Unavailable(format!("failed to start {}: {e}", program.display()))
            })?;
        match status.code() {
            Some(code) => Ok(code),
            None => {
                log::warn!("{} terminated by {status}", program.display());
                Ok(EX_SOFTWARE)
            },
        }
    }
}
