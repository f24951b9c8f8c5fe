use std::fmt;

/// File that holds every setting the tool reads.
pub const CANONICAL_CONFIG_FILE: &str = "pyproject.toml";

/// Pattern used when a source or target names a file but no regex.
pub const DEFAULT_SEMVER_REGEX: &str = r"(\d+\.\d+\.\d+)";

/// Pattern for the project's own declared `version = "..."` field.
///
/// Accepts single or double quotes and optional whitespace around `=`. The key must start
/// its line, so `foo_version = "1.0.0"` or `other = "1.0.0"` never match.
pub const DECLARED_VERSION_REGEX: &str = r#"(?m)^[ \t]*version[ \t]*=[ \t]*["'](\d+\.\d+\.\d+)["']"#;

/// Where a version lives: a file plus a regex whose capture group(s) isolate it.
///
/// The regex is not compiled here; group count and syntax are checked when the spec is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub file: String,
    pub regex: String,
}

impl VersionSpec {
    pub fn new(file: impl Into<String>, regex: impl Into<String>) -> Self {
        VersionSpec {
            file: file.into(),
            regex: regex.into(),
        }
    }

    /// The project's declared version field in the canonical configuration file.
    ///
    /// Default source when none is configured and, independently, the default target.
    pub fn declared_version() -> Self {
        VersionSpec::new(CANONICAL_CONFIG_FILE, DECLARED_VERSION_REGEX)
    }

    /// Any semver-shaped text inside `file`.
    pub fn semver_in(file: impl Into<String>) -> Self {
        VersionSpec::new(file, DEFAULT_SEMVER_REGEX)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ('{}')", self.file, self.regex)
    }
}
