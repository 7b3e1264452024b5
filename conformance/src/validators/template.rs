//! Template anchor validator.

use anyhow::Result;
use borefield_codegen::anchor::AnchorSet;
use borefield_codegen::template::Template;

use crate::report::{ConformanceReport, TestResult};

/// Checks that every tracked field's anchor occurs exactly once.
///
/// # Errors
///
/// Returns an error only if a built-in anchor pattern fails to compile.
pub fn validate(template: &Template) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for (field, count) in AnchorSet::standard()?.census(template.source()) {
        let result = match count {
            1 => TestResult::pass("template/anchors", format!("Anchor `{field}` found once")),
            0 => TestResult::fail("template/anchors", format!("Anchor `{field}` missing")),
            n => TestResult::fail(
                "template/anchors",
                format!("Anchor `{field}` matched {n} lines"),
            ),
        };
        report.push(result);
    }
    Ok(report)
}
