//! Job script and submission script validators.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use borefield_cases::Sweep;
use borefield_codegen::slurm::{
    job_file_name, job_script, submit_script, submitted_indices, JobSettings, SCRIPT_EXTENSION,
    SUBMIT_SCRIPT,
};

use super::{first_difference, stray_case_files};
use crate::report::{ConformanceReport, TestResult};

/// Validates every `case_<NNN>.sh` in `out_dir`.
///
/// # Errors
///
/// Returns an error if the output directory cannot be listed.
pub fn validate_jobs(sweep: &Sweep, job: &JobSettings, out_dir: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let mut problems = Vec::new();

    for case in sweep {
        let name = job_file_name(case.index);
        match fs::read_to_string(out_dir.join(&name)) {
            Ok(actual) => {
                let expected = job_script(case.index, job);
                if actual != expected {
                    let line = first_difference(&expected, &actual).unwrap_or(0);
                    problems.push(format!("{name}: differs at line {line}"));
                }
            }
            Err(e) => problems.push(format!("{name}: {e}")),
        }
    }

    if problems.is_empty() {
        report.push(TestResult::pass(
            "scripts/jobs",
            format!("All {} job scripts match their case index", sweep.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            "scripts/jobs",
            "Job scripts missing or incorrect",
            problems,
        ));
    }

    let expected: HashSet<String> = sweep.iter().map(|c| job_file_name(c.index)).collect();
    let stray = stray_case_files(out_dir, SCRIPT_EXTENSION, &expected)?;
    if !stray.is_empty() {
        let mut result = TestResult::warn("scripts/jobs", "Job scripts not in the case table");
        result.details = stray;
        report.push(result);
    }

    Ok(report)
}

/// Validates `submit_all.sh`: one zero-padded entry per case, in table order.
pub fn validate_submit(sweep: &Sweep, out_dir: &Path) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let path = out_dir.join(SUBMIT_SCRIPT);
    let actual = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            report.push(TestResult::fail(
                "scripts/submit",
                format!("Cannot read {}: {e}", path.display()),
            ));
            return report;
        }
    };

    let expected: Vec<String> = sweep.iter().map(|c| format!("{:03}", c.index)).collect();
    match submitted_indices(&actual) {
        Some(indices) if indices == expected => report.push(TestResult::pass(
            "scripts/submit",
            format!("{SUBMIT_SCRIPT} submits all {} cases in order", sweep.len()),
        )),
        Some(indices) => {
            let wanted: HashSet<&String> = expected.iter().collect();
            let listed: HashSet<&String> = indices.iter().collect();
            let mut details: Vec<String> = expected
                .iter()
                .filter(|i| !listed.contains(i))
                .map(|i| format!("not submitted: {i}"))
                .collect();
            details.extend(
                indices
                    .iter()
                    .filter(|i| !wanted.contains(i))
                    .map(|i| format!("unexpected entry: {i}")),
            );
            if details.is_empty() {
                details.push("entries out of order or repeated".to_string());
            }
            report.push(TestResult::fail_with_details(
                "scripts/submit",
                format!("{SUBMIT_SCRIPT} does not match the case table"),
                details,
            ));
        }
        None => report.push(TestResult::fail(
            "scripts/submit",
            format!("{SUBMIT_SCRIPT} has no `for i in …; do` loop"),
        )),
    }

    let submit_line = format!("sbatch \"case_${{i}}.{SCRIPT_EXTENSION}\"");
    let submits = actual
        .lines()
        .filter(|l| l.trim_start().starts_with("sbatch"))
        .collect::<Vec<_>>();
    match submits.as_slice() {
        [line] if line.trim() == submit_line => {}
        [] => report.push(TestResult::fail(
            "scripts/submit",
            format!("{SUBMIT_SCRIPT} never calls sbatch"),
        )),
        lines => report.push(TestResult::fail_with_details(
            "scripts/submit",
            format!("{SUBMIT_SCRIPT} does not submit `{submit_line}` once"),
            lines.iter().map(|l| l.trim().to_string()).collect(),
        )),
    }

    let generated = submit_script(sweep);
    if actual != generated {
        let line = first_difference(&generated, &actual).unwrap_or(0);
        report.push(TestResult::fail_with_details(
            "scripts/submit",
            format!("{SUBMIT_SCRIPT} differs from the generated form"),
            vec![format!("{SUBMIT_SCRIPT}: differs at line {line}")],
        ));
    }

    report
}
