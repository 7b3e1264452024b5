//! `borefield-sweep` — Generates the borehole sweep inputs and job scripts.
//!
//! Reads the template once, then writes into the output directory:
//! - `case_<NNN>.jl` — one simulation input per case
//! - `case_<NNN>.sh` — one SLURM job script per case
//! - `submit_all.sh` — submits every case
//! - `cases.json` — the case table (with `--manifest`)
//!
//! **Usage:**
//! ```
//! borefield-sweep [--template <path>] [--out <path>] [--allow-missing-anchors]
//!                 [--dry-run] [--manifest] [--partition <name>] [--time <hh:mm:ss>]
//!                 [--interpreter <cmd>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use borefield_cases::Sweep;
use borefield_codegen::anchor::AnchorMode;
use borefield_codegen::slurm::JobSettings;
use borefield_codegen::template::{Template, DEFAULT_TEMPLATE};
use borefield_codegen::GenerateOptions;
use clap::Parser;

/// Generate per-case simulation inputs and SLURM scripts from one template.
#[derive(Parser)]
#[command(
    name = "borefield-sweep",
    about = "Generate borehole sweep inputs and SLURM job scripts"
)]
struct Args {
    /// Template simulation script.
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Output directory for generated files.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Keep template values for absent anchors instead of failing.
    #[arg(long)]
    allow_missing_anchors: bool,

    /// Render and validate without writing files.
    #[arg(long)]
    dry_run: bool,

    /// Also write the case table to `cases.json`.
    #[arg(long)]
    manifest: bool,

    /// SLURM partition for every job.
    #[arg(long)]
    partition: Option<String>,

    /// Wall-clock limit for every job (hh:mm:ss).
    #[arg(long)]
    time: Option<String>,

    /// Command that runs each simulation input.
    #[arg(long)]
    interpreter: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let sweep = Sweep::full();
    let template = Template::load(&args.template)?;

    let mut job = JobSettings::default();
    if let Some(partition) = args.partition {
        job.partition = partition;
    }
    if let Some(time) = args.time {
        job.time_limit = time;
    }
    if let Some(interpreter) = args.interpreter {
        job.interpreter = interpreter;
    }

    let options = GenerateOptions {
        out_dir: args.out,
        mode: if args.allow_missing_anchors {
            AnchorMode::Lenient
        } else {
            AnchorMode::Strict
        },
        job,
        dry_run: args.dry_run,
        manifest: args.manifest,
    };

    println!(
        "Generating {} cases from {} into {}",
        sweep.len(),
        args.template.display(),
        options.out_dir.display()
    );

    let report = borefield_codegen::generate(sweep, &template, &options)?;

    if !report.missing.is_empty() {
        eprintln!(
            "warning: {} case(s) kept template values for absent anchors",
            report.missing.len()
        );
    }
    if options.dry_run {
        println!("Dry run: {} files not written.", report.files.len());
    }
    Ok(())
}
