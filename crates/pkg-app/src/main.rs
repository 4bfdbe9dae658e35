//! pkg entry point.
//!
//! Loads the configuration, acquires the package handle with the console
//! event reporter installed, and dispatches the first argument to a
//! subcommand. The process exits with the subcommand's status.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use pkg_frontend::{
    CommandRegistry, ConsoleReporter, Environment, ManPageRenderer, register_builtins,
};
use pkg_types::exit::{EX_CONFIG, EX_SOFTWARE};
use pkg_types::{Handle, PkgConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    ExitCode::from(exit_status(run()))
}

fn run() -> Result<i32> {
    let config = PkgConfig::load_default().context("cannot load configuration")?;
    log::debug!("Using {config:?}");

    let mut handle = Handle::new(config);
    handle.set_event_callback(Box::new(ConsoleReporter::stdio()));
    let docs = ManPageRenderer::from_config(handle.config());

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let argv: Vec<OsString> = std::env::args_os().collect();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut env = Environment {
        handle: &mut handle,
        docs: &docs,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };
    Ok(registry.run(&argv, &mut env))
}

/// Process exit status for the outcome of `run`.
///
/// Startup failures print on standard error and map to `EX_CONFIG`; statuses
/// outside `0..=255` map to `EX_SOFTWARE`.
fn exit_status(outcome: Result<i32>) -> u8 {
    let status = match outcome {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{}: {e:#}", pkg_frontend::PROGRAM);
            EX_CONFIG
        },
    };
    u8::try_from(status).unwrap_or(EX_SOFTWARE as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_in_range_passes_through() {
        assert_eq!(exit_status(Ok(0)), 0);
        assert_eq!(exit_status(Ok(64)), 64);
        assert_eq!(exit_status(Ok(255)), 255);
    }

    #[test]
    fn status_out_of_range_is_software_error() {
        assert_eq!(exit_status(Ok(256)), EX_SOFTWARE as u8);
        assert_eq!(exit_status(Ok(-1)), EX_SOFTWARE as u8);
    }

    #[test]
    fn config_error_is_config_status() {
        let err = PkgConfig::from_toml("manual_viewer = [")
            .context("cannot load configuration")
            .unwrap_err();
        assert_eq!(exit_status(Err(err)), EX_CONFIG as u8);
    }
}
