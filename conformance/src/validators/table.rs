//! Case table validator.
//!
//! Generation accepts any table; this check reports duplicate or
//! non-dense indices, which would make file names collide or skip.

use borefield_cases::Sweep;

use crate::report::{ConformanceReport, TestResult};

/// Validates the case table indices.
pub fn validate(sweep: &Sweep) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let problems = sweep.check_indices();
    if sweep.is_empty() {
        report.push(TestResult::fail("table/indices", "Case table is empty"));
    } else if problems.is_empty() {
        report.push(TestResult::pass(
            "table/indices",
            format!("{} cases indexed 1..{}", sweep.len(), sweep.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            "table/indices",
            "Case indices are not unique and dense",
            problems,
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table_passes() {
        assert!(validate(Sweep::full()).all_passed());
    }

    #[test]
    fn gap_fails() {
        let mut cases = Sweep::full().cases.clone();
        cases.remove(4);
        let sweep = Sweep { name: "gap", cases };
        let report = validate(&sweep);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.results[0].details.is_empty());
    }

    #[test]
    fn empty_table_fails() {
        let sweep = Sweep {
            name: "empty",
            cases: Vec::new(),
        };
        assert!(!validate(&sweep).all_passed());
    }
}
