//! Check results, severity levels, and report aggregation.

use std::fmt;

/// Outcome class of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Suspicious but not wrong (e.g. a stray file).
    Warning,
    /// The output does not match the case table.
    Failure,
}

impl Severity {
    /// Returns the tag printed in front of each result line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One check outcome.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Validator that produced the result (e.g. `scripts/jobs`).
    pub validator: String,
    /// One-line description of the outcome.
    pub message: String,
    /// Outcome class.
    pub severity: Severity,
    /// Offending files or lines, one per entry.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Creates a failure.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Creates a failure listing the offending items.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// Returns true if this result is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// All results of one conformance run, in validator order.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Individual results.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Returns how many results have the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the number of failures.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if nothing failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("a", "hmm"));
        let mut other = ConformanceReport::new();
        other.push(TestResult::fail_with_details("b", "bad", vec!["x".into()]));
        report.extend(other);

        assert_eq!(report.count(Severity::Pass), 1);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.results[2].details, vec!["x".to_string()]);
    }

    #[test]
    fn empty_report_passes() {
        assert!(ConformanceReport::new().all_passed());
        assert_eq!(Severity::Warning.to_string(), "WARN");
    }
}
