//! Simulation input validator.
//!
//! Each `case_<NNN>.jl` must equal the strict render of the template for
//! its case: tracked anchors hold the case values and every other byte is
//! the template's.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use borefield_cases::Sweep;
use borefield_codegen::anchor::{AnchorMode, AnchorSet};
use borefield_codegen::template::{case_file_name, Template, CASE_EXTENSION};

use super::{first_difference, stray_case_files};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "cases/documents";

/// Validates every simulation input in `out_dir`.
///
/// # Errors
///
/// Returns an error if the output directory cannot be listed.
pub fn validate(sweep: &Sweep, template: &Template, out_dir: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let anchors = AnchorSet::standard()?;

    let mut missing = Vec::new();
    let mut mismatched = Vec::new();
    for case in sweep {
        let expected = match template.render(case, &anchors, AnchorMode::Strict) {
            Ok(doc) => doc,
            Err(e) => {
                report.push(TestResult::fail(
                    VALIDATOR,
                    format!("Cannot render case {}: {e}", case.index),
                ));
                return Ok(report);
            }
        };
        match fs::read_to_string(out_dir.join(&expected.file_name)) {
            Ok(actual) if actual == expected.content => {}
            Ok(actual) => {
                let line = first_difference(&expected.content, &actual).unwrap_or(0);
                mismatched.push(format!("{}: differs at line {line}", expected.file_name));
            }
            Err(e) => missing.push(format!("{}: {e}", expected.file_name)),
        }
    }

    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("All {} simulation inputs present", sweep.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Missing simulation inputs",
            missing,
        ));
    }

    if mismatched.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Simulation inputs match template and case table",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Simulation inputs differ from template render",
            mismatched,
        ));
    }

    let expected: HashSet<String> = sweep.iter().map(|c| case_file_name(c.index)).collect();
    let stray = stray_case_files(out_dir, CASE_EXTENSION, &expected)?;
    if !stray.is_empty() {
        let mut result = TestResult::warn(VALIDATOR, "Simulation inputs not in the case table");
        result.details = stray;
        report.push(result);
    }

    Ok(report)
}
