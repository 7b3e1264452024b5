//! Borehole sweep generator.
//!
//! Renders one simulation input per case of a [`Sweep`] from a single
//! template, one SLURM job script per case, and the `submit_all.sh` script
//! that queues them all. Every count and file name derives from the sweep
//! table passed in.
//!
//! ```no_run
//! use std::path::Path;
//! use borefield_cases::Sweep;
//! use borefield_codegen::{generate, GenerateOptions, template::Template};
//!
//! let template = Template::load(Path::new("case_001.jl")).expect("template");
//! let report = generate(Sweep::full(), &template, &GenerateOptions::default())
//!     .expect("generation failed");
//! assert_eq!(report.case_count, 32);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod anchor;
pub mod emit;
pub mod slurm;
pub mod template;

use std::path::PathBuf;

use anyhow::{Context, Result};
use borefield_cases::{Sweep, TrackedField};

use anchor::{AnchorMode, AnchorSet};
use slurm::JobSettings;
use template::{RenderedCase, Template};

/// File name of the optional case manifest.
pub const MANIFEST: &str = "cases.json";

/// Generation settings.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving every generated file.
    pub out_dir: PathBuf,
    /// Anchor strictness.
    pub mode: AnchorMode,
    /// Scheduler directives for the job scripts.
    pub job: JobSettings,
    /// Render and validate without writing anything.
    pub dry_run: bool,
    /// Also write `cases.json`.
    pub manifest: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            mode: AnchorMode::Strict,
            job: JobSettings::default(),
            dry_run: false,
            manifest: false,
        }
    }
}

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of simulation inputs rendered.
    pub case_count: usize,
    /// Number of job scripts generated.
    pub job_count: usize,
    /// Files written (or, on a dry run, that would have been written).
    pub files: Vec<String>,
    /// Cases that kept template values because an anchor was absent.
    pub missing: Vec<(u32, Vec<TrackedField>)>,
}

/// Generates every output file for `sweep` into `options.out_dir`.
///
/// All cases are rendered before the first file is written, so an anchor
/// error in strict mode leaves the output directory untouched.
///
/// # Errors
///
/// Returns an error if an anchor does not match exactly once (strict mode)
/// or any file cannot be written.
pub fn generate(
    sweep: &Sweep,
    template: &Template,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    let anchors = AnchorSet::standard()?;
    let out = &options.out_dir;
    let verb = progress_verb(options.dry_run);

    // 1. Render every case
    let rendered = sweep
        .iter()
        .map(|case| {
            template
                .render(case, &anchors, options.mode)
                .with_context(|| format!("Failed to render case {}", case.index))
        })
        .collect::<Result<Vec<RenderedCase>>>()?;

    // 2. Simulation inputs
    for (case, doc) in sweep.iter().zip(&rendered) {
        if !options.dry_run {
            emit::write_file(&out.join(&doc.file_name), &doc.content)?;
        }
        println!(
            "{verb} {} ({}, k={}, rho_c={}, depth={}, Q={}, spacing={})",
            doc.file_name,
            case.layout,
            TrackedField::Conductivity.literal(case),
            TrackedField::HeatCapacity.literal(case),
            TrackedField::Depth.literal(case),
            TrackedField::ExtractionRate.literal(case),
            TrackedField::Spacing.literal(case),
        );
        if !doc.missing.is_empty() {
            let fields: Vec<&str> = doc.missing.iter().map(|f| f.as_str()).collect();
            eprintln!(
                "warning: {} kept template values for: {}",
                doc.file_name,
                fields.join(", ")
            );
            report.missing.push((doc.index, doc.missing.clone()));
        }
        report.files.push(doc.file_name.clone());
        report.case_count += 1;
    }
    println!();
    println!("Done! {verb} {} case files.", report.case_count);

    // 3. Job scripts
    for case in sweep {
        let name = slurm::job_file_name(case.index);
        if !options.dry_run {
            let script = slurm::job_script(case.index, &options.job);
            emit::write_script(&out.join(&name), &script)?;
        }
        println!("{verb} {name}");
        report.files.push(name);
        report.job_count += 1;
    }
    println!();
    println!(
        "Done! {verb} {} .{} files.",
        report.job_count,
        slurm::SCRIPT_EXTENSION
    );

    // 4. Submission script
    if !options.dry_run {
        emit::write_script(&out.join(slurm::SUBMIT_SCRIPT), &slurm::submit_script(sweep))?;
    }
    println!("{verb} {}", slurm::SUBMIT_SCRIPT);
    report.files.push(slurm::SUBMIT_SCRIPT.to_string());

    // 5. Manifest
    if options.manifest {
        if !options.dry_run {
            let manifest = borefield_cases::serializer::json::to_json(sweep);
            let json = serde_json::to_string_pretty(&manifest)
                .context("Failed to serialize case manifest")?;
            emit::write_file(&out.join(MANIFEST), &format!("{json}\n"))?;
        }
        println!("{verb} {MANIFEST}");
        report.files.push(MANIFEST.to_string());
    }

    Ok(report)
}

/// Returns the word that opens each progress line.
///
/// A dry run writes nothing, so it never claims a file was generated.
fn progress_verb(dry_run: bool) -> &'static str {
    if dry_run {
        "Would generate"
    } else {
        "Generated"
    }
}
