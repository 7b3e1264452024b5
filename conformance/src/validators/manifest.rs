//! Case manifest validator.
//!
//! `cases.json` is optional; when present it must equal the manifest of
//! the current case table.

use std::fs;
use std::path::Path;

use borefield_cases::serializer::json::to_json;
use borefield_cases::Sweep;
use borefield_codegen::MANIFEST;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "cases/manifest";

/// Validates `cases.json` in `out_dir`, if it exists.
pub fn validate(sweep: &Sweep, out_dir: &Path) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let path = out_dir.join(MANIFEST);
    if !path.exists() {
        return report;
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str::<Value>(&s).map_err(|e| e.to_string()));
    let actual = match parsed {
        Ok(v) => v,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("Cannot read {MANIFEST}: {e}"),
            ));
            return report;
        }
    };

    let expected = to_json(sweep);
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{MANIFEST} matches the case table"),
        ));
        return report;
    }

    let mut details = Vec::new();
    if actual["count"] != expected["count"] {
        details.push(format!(
            "count: expected {}, found {}",
            expected["count"], actual["count"]
        ));
    }
    let empty = Vec::new();
    let found = actual["cases"].as_array().unwrap_or(&empty);
    let wanted = expected["cases"].as_array().unwrap_or(&empty);
    for (position, node) in wanted.iter().enumerate() {
        if found.get(position) != Some(node) {
            details.push(format!("case entry {} differs", position + 1));
        }
    }
    if found.len() > wanted.len() {
        details.push(format!("{} extra case entries", found.len() - wanted.len()));
    }
    if details.is_empty() {
        details.push("top-level fields differ".to_string());
    }
    report.push(TestResult::fail_with_details(
        VALIDATOR,
        format!("{MANIFEST} does not match the case table"),
        details,
    ));
    report
}
