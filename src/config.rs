use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use toml::Value;

use crate::domain::{VersionSpec, CANONICAL_CONFIG_FILE};
use crate::error::{BumpError, Error, Result};

/// Where the current version is read from and where the bumped one is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: VersionSpec,
    pub targets: Vec<VersionSpec>,
}

impl Config {
    /// Configuration implied by a bare `tool.poetry.version` field.
    pub fn declared_version() -> Self {
        Config {
            source: VersionSpec::declared_version(),
            targets: vec![VersionSpec::declared_version()],
        }
    }
}

/// The part of `pyproject.toml` the tool cares about.
///
/// `tool.bump` stays an untyped value because its members accept several shapes and
/// must report the exact type they were given. `tool` and `tool.poetry` fall back to a
/// raw value when they are not tables, so a valid document always deserializes.
#[derive(Debug, Default, Deserialize)]
struct PyProject {
    tool: Option<Section<ToolTable>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Section<T> {
    Table(T),
    Other(Value),
}

impl<T> Section<T> {
    fn as_table(&self) -> Option<&T> {
        match self {
            Section::Table(table) => Some(table),
            Section::Other(_) => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    bump: Option<Value>,
    poetry: Option<Section<PoetryTable>>,
}

#[derive(Debug, Deserialize)]
struct PoetryTable {
    version: Option<Value>,
}

/// Loads and resolves the configuration of the project in `project_dir`.
///
/// Only `pyproject.toml` is honored. Passing any other file, or pointing at a project
/// without one, fails with [`BumpError::ConfigSourceUnsupported`] before anything is read.
/// Syntax errors in the file pass through as [`Error::ConfigSyntax`].
///
/// # Arguments
/// * `project_dir` - Directory that relative paths are resolved against
/// * `config_file` - Optional configuration file, relative to `project_dir`
pub fn load_config(project_dir: &Path, config_file: Option<&str>) -> Result<Config> {
    if let Some(requested) = config_file {
        if !is_canonical_config_path(requested) {
            return Err(BumpError::ConfigSourceUnsupported.into());
        }
    }

    let config_path = project_dir.join(CANONICAL_CONFIG_FILE);
    if !config_path.is_file() {
        return Err(BumpError::ConfigSourceUnsupported.into());
    }

    let content =
        fs::read_to_string(&config_path).map_err(|e| Error::io(CANONICAL_CONFIG_FILE, e))?;
    let document = content
        .parse::<toml::Table>()
        .map_err(|source| Error::ConfigSyntax {
            path: CANONICAL_CONFIG_FILE.to_string(),
            source,
        })?;

    resolve_config(&document)
}

/// Turns a parsed `pyproject.toml` into a [`Config`], applying every default.
///
/// Source is validated before targets; target errors carry their zero-based index.
/// Configuration problems come back as [`Error::Bump`].
pub fn resolve_config(document: &toml::Table) -> Result<Config> {
    let pyproject: PyProject = Value::Table(document.clone())
        .try_into()
        .map_err(|source| Error::ConfigSyntax {
            path: CANONICAL_CONFIG_FILE.to_string(),
            source,
        })?;

    Ok(resolve_pyproject(&pyproject)?)
}

fn resolve_pyproject(pyproject: &PyProject) -> std::result::Result<Config, BumpError> {
    // A non-table `tool` or `tool.poetry` holds neither section.
    let tool = pyproject.tool.as_ref().and_then(Section::as_table);
    let has_declared_version = tool
        .and_then(|tool| tool.poetry.as_ref())
        .and_then(Section::as_table)
        .and_then(|poetry| poetry.version.as_ref())
        .is_some();

    let bump = match tool.and_then(|tool| tool.bump.as_ref()) {
        Some(Value::Table(table)) => table,
        Some(other) => {
            return Err(BumpError::config_type(
                "tool.bump",
                type_name(other),
                "object",
            ))
        }
        None if has_declared_version => return Ok(Config::declared_version()),
        None => return Err(BumpError::MissingVersionConfig),
    };

    let source = match bump.get("source") {
        None => VersionSpec::declared_version(),
        Some(value) => coerce_spec(value, "tool.bump.source", false)?,
    };

    // Targets default to the declared version field, never to `source`.
    let targets = match bump.get("targets") {
        None => vec![VersionSpec::declared_version()],
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| coerce_spec(item, &format!("tool.bump.targets[{}]", i), true))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(BumpError::config_type(
                "tool.bump.targets",
                type_name(other),
                "list",
            ))
        }
    };

    Ok(Config { source, targets })
}

/// Coerces a string or `{file, regex}` object into a [`VersionSpec`].
fn coerce_spec(
    value: &Value,
    field: &str,
    file_required: bool,
) -> std::result::Result<VersionSpec, BumpError> {
    match value {
        Value::String(file) => Ok(VersionSpec::semver_in(file.as_str())),
        Value::Table(table) => {
            let file = match table.get("file") {
                Some(Value::String(file)) => file.clone(),
                Some(other) => {
                    return Err(BumpError::config_type(
                        format!("{}.file", field),
                        type_name(other),
                        "string",
                    ))
                }
                None if file_required => return Err(BumpError::missing_field(field)),
                None => CANONICAL_CONFIG_FILE.to_string(),
            };

            let spec = VersionSpec::semver_in(file);
            match table.get("regex") {
                Some(Value::String(regex)) => Ok(VersionSpec::new(spec.file, regex.as_str())),
                Some(other) => Err(BumpError::config_type(
                    format!("{}.regex", field),
                    type_name(other),
                    "string",
                )),
                None => Ok(spec),
            }
        }
        other => Err(BumpError::config_type(
            field,
            type_name(other),
            "string or object",
        )),
    }
}

/// Name of a TOML value's type, in the vocabulary used by config error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "str",
        Value::Integer(_) => "int",
        Value::Float(_) => "float",
        Value::Boolean(_) => "bool",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "list",
        Value::Table(_) => "dict",
    }
}

fn is_canonical_config_path(requested: &str) -> bool {
    let normalized: PathBuf = Path::new(requested)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    normalized == Path::new(CANONICAL_CONFIG_FILE)
}
