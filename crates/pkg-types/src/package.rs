//! Package records and archive errors carried by lifecycle events.

/// Fields readable through [`Package::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageField {
    Name,
    Version,
    Origin,
    Comment,
}

/// A package as seen by the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub origin: String,
    pub comment: String,
}

impl Package {
    /// Create a package with a name and version; other fields are empty.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Read a single field.
    pub fn get(&self, field: PackageField) -> &str {
        match field {
            PackageField::Name => &self.name,
            PackageField::Version => &self.version,
            PackageField::Origin => &self.origin,
            PackageField::Comment => &self.comment,
        }
    }
}

/// An error reported by the archive library while reading a package file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveError {
    errno: i32,
    message: String,
}

impl ArchiveError {
    pub fn new(errno: i32, message: impl Into<String>) -> Self {
        Self {
            errno,
            message: message.into(),
        }
    }

    /// The underlying OS error number, or 0 if none.
    pub fn errno(&self) -> i32 {
        self.errno
    }

    /// Human-readable description of the failure.
    pub fn error_string(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ArchiveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessor() {
        let mut p = Package::new("curl", "8.5.0");
        p.origin = "ftp/curl".to_string();
        assert_eq!(p.get(PackageField::Name), "curl");
        assert_eq!(p.get(PackageField::Version), "8.5.0");
        assert_eq!(p.get(PackageField::Origin), "ftp/curl");
        assert_eq!(p.get(PackageField::Comment), "");
    }

    #[test]
    fn archive_error_string() {
        let e = ArchiveError::new(22, "Unrecognized archive format");
        assert_eq!(e.errno(), 22);
        assert_eq!(e.error_string(), "Unrecognized archive format");
        assert_eq!(e.to_string(), "Unrecognized archive format");
    }
}
