//! Command trait, registry, prefix resolution, and dispatch.
//!
//! A command is selected by its full name or by any abbreviation that is a
//! prefix of exactly one registered name. An exact match always wins, so a
//! name that is also a prefix of a longer one stays reachable when typed in
//! full.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::Write;

use pkg_types::Handle;
use pkg_types::error::Result;
use pkg_types::exit::{EX_OK, EX_USAGE};

use crate::help::DocumentationRenderer;

/// Program name used in diagnostics.
pub const PROGRAM: &str = "pkg";

/// Everything a command needs while it runs.
pub struct Environment<'a> {
    /// The package-system handle (config and event callback).
    pub handle: &'a mut Handle,
    /// Renders long-form documentation for `help <command>`.
    pub docs: &'a dyn DocumentationRenderer,
    /// Normal output.
    pub stdout: &'a mut dyn Write,
    /// Diagnostics.
    pub stderr: &'a mut dyn Write,
}

/// A single subcommand.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// Usage line without the program name (e.g. "version").
    fn usage(&self) -> &str;

    /// Run the command. `args` excludes the command name itself and carries
    /// the caller's bytes unmodified.
    ///
    /// `Ok(status)` is returned to the caller unchanged, including non-zero
    /// statuses.
    fn execute(&self, args: &[&OsStr], env: &mut Environment<'_>) -> Result<i32>;
}

/// Outcome of resolving a user-typed token.
pub enum Resolution<'a> {
    /// Exactly one command matched (by name or unambiguous prefix).
    Resolved(&'a dyn Command),
    /// No command matched.
    NotFound,
    /// Two or more commands share the typed prefix, in registry order.
    Ambiguous(Vec<&'a dyn Command>),
}

impl Resolution<'_> {
    /// Names of the matched commands, in registry order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Resolved(cmd) => vec![cmd.name()],
            Self::NotFound => Vec::new(),
            Self::Ambiguous(cmds) => cmds.iter().map(|c| c.name()).collect(),
        }
    }
}

impl fmt::Debug for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(cmd) => f.debug_tuple("Resolved").field(&cmd.name()).finish(),
            Self::NotFound => f.write_str("NotFound"),
            Self::Ambiguous(_) => f.debug_tuple("Ambiguous").field(&self.names()).finish(),
        }
    }
}

/// Ordered table of available commands.
///
/// Insertion order is display order for usage listings. Names are unique and
/// compared case-sensitively.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command at the end of the table.
    ///
    /// A command with the same name as an existing entry replaces it in place.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.commands.iter_mut().find(|c| c.name() == cmd.name()) {
            Some(slot) => {
                log::warn!("Replacing registered command '{}'", cmd.name());
                *slot = cmd;
            },
            None => self.commands.push(cmd),
        }
    }

    /// Command names in registry order.
    pub fn list_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look up a command by exact name only.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Resolve a token to a command: exact name first, then unique prefix.
    ///
    /// The empty token is a prefix of every name.
    pub fn resolve(&self, token: &str) -> Resolution<'_> {
        if let Some(cmd) = self.get(token) {
            return Resolution::Resolved(cmd);
        }

        let matches: Vec<&dyn Command> = self
            .commands
            .iter()
            .filter(|c| c.name().as_bytes().starts_with(token.as_bytes()))
            .map(|c| c.as_ref())
            .collect();

        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Resolved(matches[0]),
            _ => Resolution::Ambiguous(matches),
        }
    }

    /// Entry point: `argv[0]` is the program name, `argv[1]` the command.
    ///
    /// Only the command token must be UTF-8; a token that is not cannot name
    /// any command. The remaining arguments are forwarded untouched.
    pub fn run(&self, argv: &[OsString], env: &mut Environment<'_>) -> i32 {
        let Some(token) = argv.get(1) else {
            write_diagnostic(env.stderr, &self.usage_text());
            return EX_USAGE;
        };
        let Some(token) = token.to_str() else {
            log::debug!("Command token {token:?} is not UTF-8");
            write_diagnostic(env.stderr, &self.usage_text());
            return EX_USAGE;
        };
        let args: Vec<&OsStr> = argv[2..].iter().map(OsString::as_os_str).collect();
        self.dispatch(token, &args, env)
    }

    /// Resolve `token` and run the selected command with `args`.
    ///
    /// Unknown and ambiguous tokens print a diagnostic and return `EX_USAGE`
    /// without running anything.
    pub fn dispatch(&self, token: &str, args: &[&OsStr], env: &mut Environment<'_>) -> i32 {
        match self.resolve(token) {
            Resolution::Resolved(cmd) => {
                log::debug!("'{token}' resolved to '{}'", cmd.name());
                // `help` needs the registry itself.
                if cmd.name() == "help" {
                    return self.execute_help(args, env);
                }
                match cmd.execute(args, env) {
                    Ok(status) => status,
                    Err(e) => {
                        let msg = format!("{PROGRAM}: {}: {e}\n", cmd.name());
                        write_diagnostic(env.stderr, &msg);
                        e.exit_code()
                    },
                }
            },
            Resolution::NotFound => {
                log::debug!("'{token}' matched no command");
                write_diagnostic(env.stderr, &self.usage_text());
                EX_USAGE
            },
            Resolution::Ambiguous(cmds) => {
                log::debug!("'{token}' matched {} commands", cmds.len());
                let mut out = invalid_command_text(token);
                out.push('\n');
                out.push_str(&format!(
                    "Command '{token}' could be one of the following:\n"
                ));
                for cmd in &cmds {
                    out.push_str(&format!("\t{}\n", cmd.name()));
                }
                write_diagnostic(env.stderr, &out);
                EX_USAGE
            },
        }
    }

    /// Top-level usage listing.
    pub fn usage_text(&self) -> String {
        let mut out = format!("usage: {PROGRAM} <command> [<args>]\n\n");
        out.push_str(&self.command_listing());
        out.push_str(&format!(
            "\nFor more information on the different commands see '{PROGRAM} help <command>'.\n"
        ));
        out
    }

    /// Usage listing for `help` itself.
    pub fn help_usage_text(&self) -> String {
        let mut out = format!("usage: {PROGRAM} help <command>\n\n");
        out.push_str(&self.command_listing());
        out
    }

    fn command_listing(&self) -> String {
        let mut out = "Where <command> can be:\n".to_string();
        for name in self.list_names() {
            out.push_str(&format!("\t{name}\n"));
        }
        out
    }

    /// `help [<command>]`: exact-match lookup, no abbreviations.
    fn execute_help(&self, args: &[&OsStr], env: &mut Environment<'_>) -> i32 {
        let name = match args {
            [name] if *name != "help" => *name,
            _ => {
                write_diagnostic(env.stderr, &self.help_usage_text());
                return EX_USAGE;
            },
        };

        let Some(cmd) = name.to_str().and_then(|name| self.get(name)) else {
            write_diagnostic(env.stderr, &invalid_command_text(&name.to_string_lossy()));
            return EX_USAGE;
        };

        if let Err(e) = env.docs.render(cmd.name()) {
            log::warn!("Cannot show documentation for '{}': {e}", cmd.name());
            write_diagnostic(
                env.stderr,
                &format!("usage: {PROGRAM} {}\n", cmd.usage()),
            );
        }
        EX_OK
    }
}

fn invalid_command_text(token: &str) -> String {
    format!(
        "{PROGRAM}: '{token}' is not a valid command.\n\
         See '{PROGRAM} help' for more information on the commands.\n"
    )
}

/// Write user-facing text. A failing diagnostics stream is logged, never fatal.
fn write_diagnostic(w: &mut dyn Write, text: &str) {
    if let Err(e) = w.write_all(text.as_bytes()).and_then(|()| w.flush()) {
        log::error!("Failed to write diagnostics: {e}");
    }
}
