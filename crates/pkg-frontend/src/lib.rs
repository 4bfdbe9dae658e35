//! Command front end for pkg.
//!
//! The front end is a registry-based dispatch system. Subcommands implement
//! the `Command` trait and are registered in display order. The first
//! argument is resolved by exact name or unambiguous prefix and the selected
//! command runs with the remaining arguments. Library progress is reported
//! back through the handle's event callback, rendered by `ConsoleReporter`.

mod commands;
mod help;
mod registry;
mod reporter;

/// Register the standard command table into a registry.
pub use commands::register_builtins;
/// Documentation display capability used by `help <command>`.
pub use help::DocumentationRenderer;
/// Documentation renderer that runs a manual page viewer.
pub use help::ManPageRenderer;
/// A single executable command trait.
pub use registry::Command;
/// Ordered command table with resolution and dispatch.
pub use registry::CommandRegistry;
/// Context passed to every command.
pub use registry::Environment;
/// Program name used in diagnostics.
pub use registry::PROGRAM;
/// Outcome of resolving a command token.
pub use registry::Resolution;
/// Default event callback rendering events to the console.
pub use reporter::ConsoleReporter;
