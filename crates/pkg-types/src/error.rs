//! Error types for the pkg front end.

use std::io;

use crate::exit;

/// Errors produced by the front end and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum PkgError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("event error: {0}")]
    Event(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl PkgError {
    /// The process exit status this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => exit::EX_USAGE,
            Self::Config(_) | Self::TomlParse(_) => exit::EX_CONFIG,
            Self::Io(_) => exit::EX_IOERR,
            Self::Unavailable(_) => exit::EX_UNAVAILABLE,
            Self::Command(_) | Self::Archive(_) | Self::Event(_) => exit::EX_SOFTWARE,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PkgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_display() {
        let e = PkgError::Usage("pkg version".into());
        assert_eq!(format!("{e}"), "usage: pkg version");
    }

    #[test]
    fn command_error_display() {
        let e = PkgError::Command("no such package".into());
        assert_eq!(format!("{e}"), "command error: no such package");
    }

    #[test]
    fn unavailable_error_display() {
        let e = PkgError::Unavailable("/usr/bin/man".into());
        assert_eq!(format!("{e}"), "unavailable: /usr/bin/man");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: PkgError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: PkgError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn exit_codes_follow_sysexits() {
        assert_eq!(PkgError::Usage(String::new()).exit_code(), exit::EX_USAGE);
        assert_eq!(PkgError::Config(String::new()).exit_code(), exit::EX_CONFIG);
        assert_eq!(
            PkgError::Unavailable(String::new()).exit_code(),
            exit::EX_UNAVAILABLE
        );
        assert_eq!(PkgError::Command(String::new()).exit_code(), exit::EX_SOFTWARE);
        assert_eq!(PkgError::Event(String::new()).exit_code(), exit::EX_SOFTWARE);
        let io_err: PkgError = io::Error::other("disk").into();
        assert_eq!(io_err.exit_code(), exit::EX_IOERR);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(PkgError::Archive("truncated".into()));
        assert!(r.is_err());
    }
}
