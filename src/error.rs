use thiserror::Error;

/// Validation failures raised by the bump engine.
///
/// Every variant renders a fixed, reproducible message built from the file, regex or
/// config field involved. The CLI prefixes these with the program tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BumpError {
    #[error("Reading of configuration from another file than pyproject.toml is not supported")]
    ConfigSourceUnsupported,

    #[error("`tool.bump` section nor `tool.poetry.version` found in pyproject.toml")]
    MissingVersionConfig,

    #[error("Invalid type {found} for `{field}` config field, expected {expected}")]
    ConfigTypeError {
        field: String,
        found: String,
        expected: String,
    },

    #[error("{field} must contain a `file` field")]
    ConfigMissingField { field: String },

    #[error("Version not found using regex '{regex}' to search in file {file}")]
    VersionNotFound { regex: String, file: String },

    #[error("Too much groups found using regex '{regex}' to search in file {file}")]
    TooManyGroups { regex: String, file: String },

    #[error("Invalid regex '{regex}' to search in file {file}: {reason}")]
    InvalidRegex {
        regex: String,
        file: String,
        reason: String,
    },

    #[error("The version '{version}' does not follow semantic versioning!")]
    InvalidSemver { version: String },
}

impl BumpError {
    /// Create a type error for a config field
    pub fn config_type(
        field: impl Into<String>,
        found: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        BumpError::ConfigTypeError {
            field: field.into(),
            found: found.into(),
            expected: expected.into(),
        }
    }

    /// Create a missing-field error for a config field path
    pub fn missing_field(field: impl Into<String>) -> Self {
        BumpError::ConfigMissingField {
            field: field.into(),
        }
    }
}

/// Unified error type for bump runs.
///
/// `Bump` is the domain tier. `Io` and `ConfigSyntax` pass infrastructure failures through
/// unchanged, so a mistyped path never looks like a validation failure.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Bump(#[from] BumpError),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ConfigSyntax {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience type alias for Results in bump
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that carry the fixed domain message contract
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Bump(_))
    }

    /// The domain error, if this is one
    pub fn as_bump(&self) -> Option<&BumpError> {
        match self {
            Error::Bump(err) => Some(err),
            _ => None,
        }
    }
}
