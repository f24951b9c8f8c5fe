//! Domain values - pure types independent of the file system

pub mod spec;
pub mod version;

pub use spec::{VersionSpec, CANONICAL_CONFIG_FILE, DECLARED_VERSION_REGEX, DEFAULT_SEMVER_REGEX};
pub use version::{is_semver_shape, BumpPart, Version};
