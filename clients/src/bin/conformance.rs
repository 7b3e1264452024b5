//! `borefield-conformance` — Verifies generated sweep outputs against the case table.
//!
//! Checks:
//! - Case table indices (unique, dense from 1)
//! - Template anchors (each tracked field exactly once)
//! - Simulation inputs (equal to the strict render for each case)
//! - Job scripts and `submit_all.sh`
//!
//! **Usage:**
//! ```
//! borefield-conformance [--template <path>] [--out <path>] [--partition <name>]
//!                       [--time <hh:mm:ss>] [--interpreter <cmd>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use borefield_cases::Sweep;
use borefield_codegen::slurm::JobSettings;
use borefield_codegen::template::DEFAULT_TEMPLATE;
use borefield_conformance::{run_all, Severity, SweepConfig};
use clap::Parser;

/// Verify generated borehole sweep outputs.
#[derive(Parser)]
#[command(
    name = "borefield-conformance",
    about = "Verify generated sweep inputs and job scripts against the case table"
)]
struct Args {
    /// Template the outputs were generated from.
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Directory holding the generated files.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// SLURM partition the job scripts were generated with.
    #[arg(long)]
    partition: Option<String>,

    /// Wall-clock limit the job scripts were generated with.
    #[arg(long)]
    time: Option<String>,

    /// Interpreter the job scripts were generated with.
    #[arg(long)]
    interpreter: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

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

    let config = SweepConfig {
        template: args.template,
        out_dir: args.out,
        job,
    };
    let report = run_all(Sweep::full(), &config)?;

    println!("Borehole Sweep Conformance Report");
    println!("=================================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
