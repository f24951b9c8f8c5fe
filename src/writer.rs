//! Rewrites the version inside target files.

use std::fs;
use std::path::Path;

use crate::domain::{Version, VersionSpec};
use crate::error::{BumpError, Error, Result};
use crate::locator::{find_version_spans, read_spec_file};

/// Outcome of rewriting one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUpdate {
    pub file: String,
    /// Version the target held before the write
    pub previous: Version,
}

/// Returns `content` with every version-bearing span of `spec` replaced by `new_version`.
///
/// Every byte outside those spans, context groups included, is kept as is. Each value being
/// replaced must itself be a valid version; the first one is returned as the previous version.
pub fn substitute_version(
    spec: &VersionSpec,
    content: &str,
    new_version: &str,
) -> std::result::Result<(String, Version), BumpError> {
    let spans = find_version_spans(spec, content)?;
    let previous = spans[0].version;

    let mut updated = String::with_capacity(content.len() + spans.len() * new_version.len());
    let mut cursor = 0;
    for span in &spans {
        updated.push_str(&content[cursor..span.range.start]);
        updated.push_str(new_version);
        cursor = span.range.end;
    }
    updated.push_str(&content[cursor..]);

    Ok((updated, previous))
}

/// Writes `new_version` into the file named by `spec`, relative to `project_dir`.
///
/// The file is located again from its on-disk content, so it may hold a different
/// version than the source did. With `dry_run` set the target is validated but left as is.
pub fn write_version(
    project_dir: &Path,
    spec: &VersionSpec,
    new_version: &str,
    dry_run: bool,
) -> Result<TargetUpdate> {
    let content = read_spec_file(project_dir, spec)?;
    let (updated, previous) = substitute_version(spec, &content, new_version)?;

    if !dry_run {
        fs::write(project_dir.join(&spec.file), updated)
            .map_err(|e| Error::io(spec.file.as_str(), e))?;
    }

    Ok(TargetUpdate {
        file: spec.file.clone(),
        previous,
    })
}
