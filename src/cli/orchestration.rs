//! Main workflow orchestration logic
//!
//! Runs one bump from configuration to written targets, independent of clap so it can be
//! called programmatically.

use std::fmt;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::domain::{BumpPart, Version};
use crate::error::Result;
use crate::locator;
use crate::writer::{self, TargetUpdate};

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Directory holding `pyproject.toml`; every configured path is relative to it
    pub project_dir: PathBuf,

    /// Explicit configuration file, if one was requested
    pub config_file: Option<String>,

    /// Version component to increment
    pub part: BumpPart,

    /// Validate every target without writing
    pub dry_run: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version read from the source
    pub previous: Version,

    /// Version written to the targets
    pub next: Version,

    /// Targets in the order they were processed
    pub written: Vec<TargetUpdate>,
}

/// Progress points of a run, in order.
///
/// Any error aborts the run at the stage it happened in. Targets written before the
/// failure stay written.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    ResolvingConfig,
    LocatingSource { file: String },
    Bumping { from: Version, to: Version },
    WritingTarget { index: usize, file: String },
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolvingConfig => write!(f, "Reading configuration"),
            Stage::LocatingSource { file } => write!(f, "Reading current version from {}", file),
            Stage::Bumping { from, to } => write!(f, "Bumping {} -> {}", from, to),
            Stage::WritingTarget { index, file } => {
                write!(f, "Writing target #{} ({})", index + 1, file)
            }
            Stage::Done => write!(f, "Done"),
        }
    }
}

/// Main bump workflow
///
/// 1. Resolve configuration from `pyproject.toml`
/// 2. Locate the current version in the source
/// 3. Bump the requested part
/// 4. Write the new version into each target, in order
///
/// `observe` is called on entering each stage.
pub fn run_bump_workflow<F>(args: &BumpWorkflowArgs, mut observe: F) -> Result<WorkflowResult>
where
    F: FnMut(&Stage),
{
    observe(&Stage::ResolvingConfig);
    let config = config::load_config(&args.project_dir, args.config_file.as_deref())?;

    run_with_config(args, &config, observe)
}

/// Same as [`run_bump_workflow`] with an already resolved configuration.
pub fn run_with_config<F>(
    args: &BumpWorkflowArgs,
    config: &Config,
    mut observe: F,
) -> Result<WorkflowResult>
where
    F: FnMut(&Stage),
{
    observe(&Stage::LocatingSource {
        file: config.source.file.clone(),
    });
    let previous = locator::locate_version(&args.project_dir, &config.source)?;

    let next = previous.bump(args.part);
    observe(&Stage::Bumping {
        from: previous,
        to: next,
    });
    let rendered = next.to_string();

    let mut written = Vec::with_capacity(config.targets.len());
    for (index, target) in config.targets.iter().enumerate() {
        observe(&Stage::WritingTarget {
            index,
            file: target.file.clone(),
        });
        written.push(writer::write_version(
            &args.project_dir,
            target,
            &rendered,
            args.dry_run,
        )?);
    }

    observe(&Stage::Done);
    Ok(WorkflowResult {
        previous,
        next,
        written,
    })
}
