//! Finds the current version inside a file.
//!
//! A source is read from its first match. The writer uses [`find_version_spans`], which
//! applies the same classification to every match of a target.

use regex::{Captures, Regex};
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::domain::{is_semver_shape, Version, VersionSpec};
use crate::error::{BumpError, Error, Result};

/// Most capture groups a version regex may declare: the version plus one context group.
pub const MAX_CAPTURE_GROUPS: usize = 2;

/// The version-bearing part of one regex match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpan {
    /// Byte range of the version text inside the searched content
    pub range: Range<usize>,
    /// Parsed value of that text
    pub version: Version,
}

/// Locates the version-bearing span of the first match of `spec` inside `content`.
///
/// With no capture group the whole match is the version; with one group that group is;
/// with two, exactly one of them must look like `M.N.P` and the other is literal context.
/// Anything else fails closed.
pub fn find_version_span(
    spec: &VersionSpec,
    content: &str,
) -> std::result::Result<VersionSpan, BumpError> {
    let (re, group_count) = compile(spec)?;
    let captures = re.captures(content).ok_or_else(|| not_found(spec))?;
    classify(spec, &captures, group_count)
}

/// Locates the version-bearing span of every match of `spec` inside `content`.
///
/// Each match is classified and validated like the first one, so a single unresolvable
/// or malformed match fails the whole search. Spans are returned in content order.
pub fn find_version_spans(
    spec: &VersionSpec,
    content: &str,
) -> std::result::Result<Vec<VersionSpan>, BumpError> {
    let (re, group_count) = compile(spec)?;
    let spans = re
        .captures_iter(content)
        .map(|captures| classify(spec, &captures, group_count))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if spans.is_empty() {
        return Err(not_found(spec));
    }
    Ok(spans)
}

/// Compiles the regex of `spec` and returns it with its capture group count.
fn compile(spec: &VersionSpec) -> std::result::Result<(Regex, usize), BumpError> {
    let re = Regex::new(&spec.regex).map_err(|e| BumpError::InvalidRegex {
        regex: spec.regex.clone(),
        file: spec.file.clone(),
        reason: e.to_string(),
    })?;

    let group_count = re.captures_len() - 1;
    if group_count > MAX_CAPTURE_GROUPS {
        return Err(BumpError::TooManyGroups {
            regex: spec.regex.clone(),
            file: spec.file.clone(),
        });
    }
    Ok((re, group_count))
}

fn classify(
    spec: &VersionSpec,
    captures: &Captures<'_>,
    group_count: usize,
) -> std::result::Result<VersionSpan, BumpError> {
    let candidate = match group_count {
        0 => captures.get(0),
        1 => captures.get(1),
        _ => {
            let mut semver_groups = (1..=group_count)
                .filter_map(|i| captures.get(i))
                .filter(|m| is_semver_shape(m.as_str()));
            match (semver_groups.next(), semver_groups.next()) {
                (Some(only), None) => Some(only),
                _ => None,
            }
        }
    }
    .ok_or_else(|| not_found(spec))?;

    let version = Version::parse(candidate.as_str())?;
    Ok(VersionSpan {
        range: candidate.range(),
        version,
    })
}

fn not_found(spec: &VersionSpec) -> BumpError {
    BumpError::VersionNotFound {
        regex: spec.regex.clone(),
        file: spec.file.clone(),
    }
}

/// Reads the file named by `spec` (relative to `project_dir`) and returns its version.
///
/// A missing or unreadable file is passed through as [`Error::Io`].
pub fn locate_version(project_dir: &Path, spec: &VersionSpec) -> Result<Version> {
    let content = read_spec_file(project_dir, spec)?;
    Ok(find_version_span(spec, &content)?.version)
}

pub(crate) fn read_spec_file(project_dir: &Path, spec: &VersionSpec) -> Result<String> {
    fs::read_to_string(project_dir.join(&spec.file)).map_err(|e| Error::io(spec.file.as_str(), e))
}
