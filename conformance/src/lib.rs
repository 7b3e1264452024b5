//! Borehole sweep conformance checks.
//!
//! Re-reads a generated output directory and verifies it against the case
//! table: every simulation input equals the strict render of the template
//! for its case, every job script matches its index, and `submit_all.sh`
//! queues each case exactly once, in order.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use borefield_cases::Sweep;
//! use borefield_conformance::{run_all, SweepConfig};
//!
//! let config = SweepConfig {
//!     template: PathBuf::from("template.jl"),
//!     out_dir: PathBuf::from("."),
//!     job: Default::default(),
//! };
//! let report = run_all(Sweep::full(), &config).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

use borefield_cases::Sweep;
use borefield_codegen::slurm::JobSettings;
use borefield_codegen::template::Template;

pub use report::{ConformanceReport, Severity, TestResult};

/// Inputs of a conformance run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Template the outputs were generated from.
    pub template: PathBuf,
    /// Directory holding the generated files.
    pub out_dir: PathBuf,
    /// Scheduler settings the job scripts were generated with.
    pub job: JobSettings,
}

/// Runs every validator and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Case table indices
/// 2. Template anchors
/// 3. Simulation inputs
/// 4. Job scripts
/// 5. Submission script
/// 6. Case manifest, when `cases.json` was written
///
/// # Errors
///
/// Returns an error if the template cannot be read or the output
/// directory cannot be listed.
pub fn run_all(sweep: &Sweep, config: &SweepConfig) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let template = Template::load(&config.template)?;

    report.extend(validators::table::validate(sweep));
    report.extend(validators::template::validate(&template)?);
    report.extend(validators::documents::validate(sweep, &template, &config.out_dir)?);
    report.extend(validators::scripts::validate_jobs(sweep, &config.job, &config.out_dir)?);
    report.extend(validators::scripts::validate_submit(sweep, &config.out_dir));
    report.extend(validators::manifest::validate(sweep, &config.out_dir));

    Ok(report)
}
