//! Process exit statuses, following the BSD `sysexits` convention.

/// Successful termination.
pub const EX_OK: i32 = 0;

/// The command was used incorrectly: no command, unknown or ambiguous
/// command, or `help` misuse.
pub const EX_USAGE: i32 = 64;

/// A required service or program is unavailable.
pub const EX_UNAVAILABLE: i32 = 69;

/// An internal software error.
pub const EX_SOFTWARE: i32 = 70;

/// An error occurred while doing I/O.
pub const EX_IOERR: i32 = 74;

/// Something was found in an unconfigured or misconfigured state.
pub const EX_CONFIG: i32 = 78;
