use crate::error::BumpError;
use std::fmt;

/// Strict semantic version: exactly `major.minor.patch`, nothing around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of the exact shape `\d+\.\d+\.\d+`.
    ///
    /// No prefixes (`v1.2.3`), suffixes, surrounding whitespace or missing and extra
    /// components are accepted.
    pub fn parse(text: &str) -> Result<Self, BumpError> {
        let invalid = || BumpError::InvalidSemver {
            version: text.to_string(),
        };

        if !is_semver_shape(text) {
            return Err(invalid());
        }

        let mut parts = text.split('.').map(|part| part.parse::<u64>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(major)), Some(Ok(minor)), Some(Ok(patch))) => {
                Ok(Version::new(major, minor, patch))
            }
            _ => Err(invalid()),
        }
    }

    /// Bump version according to bump type, zeroing every lower component.
    pub fn bump(&self, part: BumpPart) -> Self {
        match part {
            BumpPart::Major => Version::new(self.major + 1, 0, 0),
            BumpPart::Minor => Version::new(self.major, self.minor + 1, 0),
            BumpPart::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version component to increment for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpPart {
    #[value(name = "1", alias = "major")]
    Major,
    #[value(name = "2", alias = "minor")]
    Minor,
    #[value(name = "3", alias = "patch")]
    Patch,
}

impl fmt::Display for BumpPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpPart::Major => "major",
            BumpPart::Minor => "minor",
            BumpPart::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Returns true when `text` is three dot-separated runs of ASCII digits.
pub fn is_semver_shape(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
