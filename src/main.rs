use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use bump::domain::BumpPart;
use bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "bump",
    version,
    about = "Bump the semantic version of a project and write it into its target files"
)]
struct Args {
    /// Version part to bump: 1 (major), 2 (minor) or 3 (patch)
    #[arg(value_enum)]
    part: BumpPart,

    #[arg(short, long, default_value = ".", help = "Project directory")]
    path: PathBuf,

    #[arg(
        short,
        long,
        help = "Configuration file (only pyproject.toml is supported)"
    )]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without writing files")]
    dry_run: bool,

    #[arg(short, long, help = "Print each step of the run")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let workflow_args = BumpWorkflowArgs {
        project_dir: args.path,
        config_file: args.config,
        part: args.part,
        dry_run: args.dry_run,
    };

    let verbose = args.verbose;
    let result = run_bump_workflow(&workflow_args, |stage| {
        if verbose {
            ui::display_stage(stage);
        }
    });

    match result {
        Ok(result) => {
            if verbose || workflow_args.dry_run {
                ui::display_result(&result, workflow_args.dry_run);
            }
            Ok(())
        }
        Err(e) => {
            if let Some(domain) = e.as_bump() {
                ui::display_error(&domain.to_string());
                std::process::exit(1);
            }
            // Missing files and malformed TOML are not validation failures; report them raw.
            Err(e.into())
        }
    }
}
